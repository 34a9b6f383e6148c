//! HTTP Header Block Toolkit.
//!
//! - [`headers`] contains the header multimap, `quoted-string` quoting and list splitting.
//! - [`h1`] contains the HTTP/1 header block parser.
//!
//! ```rust
//! use httphead::headers::{HeaderMap, standard::COOKIE};
//!
//! let mut map = HeaderMap::new();
//! let n = map.parse_bytes(b"Cookie: a=1\r\ncookie: b=2\r\n\r\nbody").unwrap();
//!
//! assert_eq!(n, 28);
//! assert_eq!(map.get(COOKIE), Some("a=1"));
//! assert_eq!(map.get_all("COOKIE").collect::<Vec<_>>(), ["a=1", "b=2"]);
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod headers;
pub mod h1;
