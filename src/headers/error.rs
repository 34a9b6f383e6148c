//! Error types that can occur during header related operation.

/// An error that can occur in header related operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header name is empty.
    Empty,
    /// Static header name is not in canonical form.
    NotCanonical,
    /// Static header name contains invalid character.
    Invalid,
    /// Name and value list has a name without value.
    OddPairs,
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::Empty => "header name cannot be empty",
            Self::NotCanonical => "header name is not canonical",
            Self::Invalid => "header name contains invalid byte",
            Self::OddPairs => "header name without value",
        }
    }

    pub(crate) const fn panic_const(self) -> ! {
        panic!("{}", self.message())
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
