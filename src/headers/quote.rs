//! `token` and `quoted-string` encoding.
//!
//! ```not_rust
//! quoted-string  = DQUOTE *( qdtext / quoted-pair ) DQUOTE
//! quoted-pair    = "\" ( HTAB / SP / VCHAR / obs-text )
//! ```
use std::borrow::Cow;

use crate::matches;

/// Returns `true` if `value` is a valid `token`, thus can be sent without quoting.
///
/// An empty string is not a `token`.
#[inline]
pub fn is_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(matches::is_token)
}

/// Quote a string, to turn it into a `quoted-string`.
///
/// Backslash and double quote are escaped with a backslash, other characters are kept as is.
///
/// ```rust
/// use httphead::headers::quote;
///
/// assert_eq!(quote("a"), r#""a""#);
/// assert_eq!(quote(r#"x"y"#), r#""x\"y""#);
/// assert_eq!(quote(r"x\y"), r#""x\\y""#);
/// ```
pub fn quote(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    push_quoted(&mut output, value);
    output
}

/// Append the `quoted-string` form of `value` into `buf`.
pub fn push_quoted(buf: &mut String, value: &str) {
    buf.reserve(value.len() + 2);
    buf.push('"');
    for c in value.chars() {
        if matches!(c, '\\' | '"') {
            buf.push('\\');
        }
        buf.push(c);
    }
    buf.push('"');
}

/// Make a string into a `token` or `quoted-string`, preferring a `token`.
///
/// ```rust
/// use httphead::headers::quote_or_token;
///
/// assert_eq!(quote_or_token("a"), "a");
/// assert_eq!(quote_or_token("a b"), r#""a b""#);
/// assert_eq!(quote_or_token(""), r#""""#);
/// ```
pub fn quote_or_token(value: &str) -> Cow<'_, str> {
    if is_token(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quote(value))
    }
}

/// Parse a `quoted-string` back into its raw value.
///
/// Value that is not surrounded by double quotes is returned as is. Inside the quotes, a
/// backslash followed by a backslash or double quote is removed, any other character is kept.
///
/// This function never fails, malformed input such as trailing backslash is kept as is.
///
/// ```rust
/// use httphead::headers::unquote;
///
/// assert_eq!(unquote("a b"), "a b");
/// assert_eq!(unquote(r#""a""#), "a");
/// assert_eq!(unquote(r#""a \\ b \" c""#), r#"a \ b " c"#);
/// ```
pub fn unquote(value: &str) -> Cow<'_, str> {
    let inner = match value.as_bytes() {
        [b'"', .., b'"'] => &value[1..value.len() - 1],
        _ => return Cow::Borrowed(value),
    };

    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.clone().next() {
                Some(next @ ('\\' | '"')) => {
                    chars.next();
                    output.push(next);
                    continue;
                }
                _ => {}
            }
        }
        output.push(c);
    }

    Cow::Owned(output)
}
