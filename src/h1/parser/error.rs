/// Header block parsing error.
#[derive(Debug)]
pub enum ParseError {
    /// Header line does not contain colon.
    InvalidHeader,
    /// Continuation line without preceding header field.
    LeadingContinuation,
    /// Input ended before the empty line that terminates the header block.
    Truncated,
    /// Error from the underlying reader.
    Io(std::io::Error),
}

impl ParseError {
    /// Returns `true` if more input could complete the header block.
    #[inline]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidHeader => f.write_str("invalid header"),
            Self::LeadingContinuation => f.write_str("continuation line without header"),
            Self::Truncated => f.write_str("unexpected end of header block"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl From<std::io::Error> for ParseError {
    #[inline]
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
