use crate::headers::error::HeaderError;
use crate::matches;

/// HTTP Header name.
///
/// # Case Normalization
///
/// Input is normalized to its canonical form at construction time: the first letter of every
/// hyphen delimited segment is uppercase, everything else is lowercase.
///
/// ```rust
/// use httphead::headers::HeaderName;
///
/// assert_eq!(HeaderName::new("content-TYPE").as_str(), "Content-Type");
/// assert_eq!(HeaderName::new("CoOkie").as_str(), "Cookie");
/// ```
///
/// [`from_static`][HeaderName::from_static] does not copy, but will panic at compile time when
/// the name is not already canonical.
//
// hash is cached at construction, map lookup compares hash before comparing the name
#[derive(Clone)]
pub struct HeaderName {
    repr: Repr,
    hash: u32,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    /// is canonical
    Arbitrary(Box<str>),
}

impl HeaderName {
    /// Create header name, normalizing it into canonical form.
    pub fn new(name: &str) -> Self {
        Self {
            hash: matches::hash_32(name.as_bytes()),
            repr: Repr::Arbitrary(canonicalize(name).into_boxed_str()),
        }
    }

    /// Create header name from static str.
    ///
    /// # Panics
    ///
    /// Panics if the input is empty, contains non token character, or is not in canonical form.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_canonical(name.as_bytes()) {
            Ok(()) => Self {
                hash: matches::hash_32(name.as_bytes()),
                repr: Repr::Static(name),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Extracts a string slice of the header name.
    ///
    /// The returned string is always in canonical form.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            Repr::Arbitrary(s) => s,
        }
    }

    /// Checks that two header name are an ASCII case-insensitive match.
    ///
    /// Header names are case-insensitive.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }

    pub(crate) const fn hash(&self) -> u32 {
        self.hash
    }
}

/// Normalize header name into its canonical form.
///
/// Rules:
///
/// - The first character is capitalised
/// - Any character immediately following `-` is capitalised
/// - All other characters are made lowercase
///
/// Non ASCII characters are left as is.
///
/// ```rust
/// use httphead::headers::canonicalize;
///
/// assert_eq!(canonicalize("foo-bar"), "Foo-Bar");
/// assert_eq!(canonicalize("FOO-BAR"), "Foo-Bar");
/// assert_eq!(canonicalize("x--y"), "X--Y");
/// ```
pub fn canonicalize(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        output.push(if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        });
        upper = c == '-';
    }
    output
}

/// Same rules as [`canonicalize`], and only token characters allowed.
const fn validate_canonical(bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;

    if bytes.is_empty() {
        return Err(E::Empty);
    }

    let mut upper = true;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if !matches::is_token(byte) {
            return Err(E::Invalid);
        }
        if upper && byte.is_ascii_lowercase() || !upper && byte.is_ascii_uppercase() {
            return Err(E::NotCanonical);
        }
        upper = byte == b'-';
        i += 1;
    }

    Ok(())
}

// ===== Traits =====

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl std::hash::Hash for HeaderName {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

impl PartialEq for HeaderName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // both are canonical
        self.hash == other.hash && self.as_str() == other.as_str()
    }
}

impl Eq for HeaderName {}

/// Case-insensitive comparison.
impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

/// Case-insensitive comparison.
impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl AsRef<str> for HeaderName {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for HeaderName {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HeaderName {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

// ===== Standard Headers =====

macro_rules! standard {
    ($($(#[$meta:meta])* $id:ident = $name:literal;)*) => {
        $(
            $(#[$meta])*
            pub const $id: HeaderName = HeaderName::from_static($name);
        )*
    };
}

/// Commonly used header names.
pub mod standard {
    use super::HeaderName;

    standard! {
        /// `Accept`
        ACCEPT = "Accept";
        /// `Accept-Encoding`
        ACCEPT_ENCODING = "Accept-Encoding";
        /// `Accept-Language`
        ACCEPT_LANGUAGE = "Accept-Language";
        /// `Authorization`
        AUTHORIZATION = "Authorization";
        /// `Cache-Control`
        CACHE_CONTROL = "Cache-Control";
        /// `Connection`
        CONNECTION = "Connection";
        /// `Content-Disposition`
        CONTENT_DISPOSITION = "Content-Disposition";
        /// `Content-Encoding`
        CONTENT_ENCODING = "Content-Encoding";
        /// `Content-Length`
        CONTENT_LENGTH = "Content-Length";
        /// `Content-Type`
        CONTENT_TYPE = "Content-Type";
        /// `Cookie`
        COOKIE = "Cookie";
        /// `Date`
        DATE = "Date";
        /// `Etag`
        ETAG = "Etag";
        /// `Expect`
        EXPECT = "Expect";
        /// `Host`
        HOST = "Host";
        /// `If-Modified-Since`
        IF_MODIFIED_SINCE = "If-Modified-Since";
        /// `If-None-Match`
        IF_NONE_MATCH = "If-None-Match";
        /// `Last-Modified`
        LAST_MODIFIED = "Last-Modified";
        /// `Location`
        LOCATION = "Location";
        /// `Referer`
        REFERER = "Referer";
        /// `Server`
        SERVER = "Server";
        /// `Set-Cookie`
        SET_COOKIE = "Set-Cookie";
        /// `Transfer-Encoding`
        TRANSFER_ENCODING = "Transfer-Encoding";
        /// `Upgrade`
        UPGRADE = "Upgrade";
        /// `User-Agent`
        USER_AGENT = "User-Agent";
        /// `Vary`
        VARY = "Vary";
        /// `Www-Authenticate`
        WWW_AUTHENTICATE = "Www-Authenticate";
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_form() {
        assert_eq!(canonicalize("content-type"), "Content-Type");
        assert_eq!(canonicalize("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonicalize("cOOKIE"), "Cookie");
        assert_eq!(canonicalize("-x"), "-X");
        assert_eq!(canonicalize("x-"), "X-");
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("www-authenticate"), "Www-Authenticate");
    }

    #[test]
    fn validate() {
        assert_eq!(validate_canonical(b"Content-Type"), Ok(()));
        assert_eq!(validate_canonical(b"X-1"), Ok(()));
        assert_eq!(validate_canonical(b""), Err(HeaderError::Empty));
        assert_eq!(validate_canonical(b"content-type"), Err(HeaderError::NotCanonical));
        assert_eq!(validate_canonical(b"Content-TYPE"), Err(HeaderError::NotCanonical));
        assert_eq!(validate_canonical(b"Content Type"), Err(HeaderError::Invalid));
    }

    #[test]
    fn name_eq() {
        let name = HeaderName::new("coOKie");
        assert_eq!(name, standard::COOKIE);
        assert_eq!(name.hash(), standard::COOKIE.hash());
        assert!(name == "COOKIE");
        assert_ne!(name, standard::SET_COOKIE);
    }

    #[test]
    #[should_panic]
    fn static_lowercase() {
        let _ = HeaderName::from_static("content-type");
    }
}
