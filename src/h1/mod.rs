//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains the header block parser.

pub mod parser;
