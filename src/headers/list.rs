use std::iter::FusedIterator;

/// Split header value into comma separated list items.
///
/// A comma inside a quoted segment is not a delimiter. A backslash escapes the character after
/// it, so an escaped quote does not open nor close a quoted segment. A quoted segment that is
/// never closed runs to the end of the value.
///
/// Items are trimmed of ASCII whitespace, empty items are skipped. Quoted items keep their
/// surrounding quotes, use [`unquote`][super::unquote] to get the raw value.
///
/// ```rust
/// use httphead::headers::split_list;
///
/// let items = split_list(r#""a, b, c", d "#).collect::<Vec<_>>();
/// assert_eq!(items, [r#""a, b, c""#, "d"]);
///
/// let items = split_list(r#"" ""#).collect::<Vec<_>>();
/// assert_eq!(items, [r#"" ""#]);
/// ```
#[inline]
pub fn split_list(value: &str) -> List<'_> {
    List { value, pos: 0 }
}

/// Iterator returned from [`split_list`] and [`HeaderMap::get_list`].
///
/// [`HeaderMap::get_list`]: super::HeaderMap::get_list
#[derive(Clone, Debug)]
pub struct List<'a> {
    value: &'a str,
    pos: usize,
}

impl List<'_> {
    pub(crate) const fn empty() -> Self {
        Self { value: "", pos: 0 }
    }
}

impl<'a> Iterator for List<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.value.as_bytes();

        while self.pos < bytes.len() {
            let mut begin = self.pos;
            let mut end = begin;
            let mut quoted = false;
            let mut escape = false;
            let mut i = self.pos;

            while let Some(&byte) = bytes.get(i) {
                match byte {
                    _ if escape => {
                        escape = false;
                        end = i + 1;
                    }
                    b'\\' => {
                        escape = true;
                        end = i + 1;
                    }
                    b'"' => {
                        quoted = !quoted;
                        end = i + 1;
                    }
                    _ if quoted => end = i + 1,
                    b',' => break,
                    _ if byte.is_ascii_whitespace() => {
                        // leading whitespace moves the start, trailing whitespace is never
                        // included because `end` does not advance
                        if begin == end {
                            begin = i + 1;
                            end = begin;
                        }
                    }
                    _ => end = i + 1,
                }
                i += 1;
            }

            // skip the delimiter
            self.pos = i + 1;

            if begin < end {
                // `begin` and `end` always lands right after an ASCII byte or at the end of
                // a multibyte character
                return Some(&self.value[begin..end]);
            }
        }

        None
    }
}

impl FusedIterator for List<'_> {}
