//! HTTP Header Multimap.
//!
//! - [`HeaderMap`], multimap from canonical [`HeaderName`] to ordered values
//! - [`quote`], [`quote_or_token`] and [`unquote`], `quoted-string` encoding of a single value
//! - [`split_list`], quote aware comma separated list splitting
mod name;
mod field;
mod map;
mod iter;
mod list;
mod quote;
mod write;
pub mod error;

pub use name::{HeaderName, canonicalize, standard};
pub use field::{HeaderField, GetAll};
pub use map::{HeaderMap, AsHeaderName, IntoHeaderName};
pub use iter::Iter;
pub use list::{List, split_list};
pub use quote::{is_token, quote, quote_or_token, push_quoted, unquote};
pub use error::HeaderError;
