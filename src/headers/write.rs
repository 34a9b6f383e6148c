use bytes::{BufMut, Bytes, BytesMut};

use super::HeaderMap;

impl HeaderMap {
    /// Write header fields followed by the terminating empty line.
    ///
    /// Fields are written as `Name: value\r\n` in iteration order. CR and LF inside a value are
    /// written as space, so a value cannot start a new header line.
    ///
    /// In a name, CR, LF, colon and a leading space or tab are written as `-`, so every field is
    /// written as exactly one line that parses back as the same number of fields.
    ///
    /// ```rust
    /// use httphead::headers;
    ///
    /// let map = headers! {
    ///     "content-type" => "text/html",
    ///     "cookie" => "a=1",
    ///     "cookie" => "b=2",
    /// };
    ///
    /// let mut buf = Vec::new();
    /// map.write_head(&mut buf);
    /// assert_eq!(buf, b"Content-Type: text/html\r\nCookie: a=1\r\nCookie: b=2\r\n\r\n");
    /// ```
    pub fn write_head<B: BufMut>(&self, mut bufm: B) {
        for (name, value) in self.iter() {
            put_name(&mut bufm, name.as_str().as_bytes());
            bufm.put_slice(b": ");
            put_value(&mut bufm, value.as_bytes());
            bufm.put_slice(b"\r\n");
        }

        bufm.put_slice(b"\r\n");
    }

    /// Write header fields into [`std::io::Write`].
    ///
    /// See [`write_head`][HeaderMap::write_head] for the format.
    ///
    /// # Errors
    ///
    /// Returns error from the underlying writer.
    pub fn write_to<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&self.to_bytes())
    }

    /// Returns header fields in wire format.
    ///
    /// See [`write_head`][HeaderMap::write_head] for the format.
    pub fn to_bytes(&self) -> Bytes {
        let mut bytes = BytesMut::with_capacity(self.encoded_len());
        self.write_head(&mut bytes);
        bytes.freeze()
    }

    fn encoded_len(&self) -> usize {
        self.iter()
            .map(|(name, value)| name.as_str().len() + value.len() + 4)
            .sum::<usize>()
            + 2
    }
}

fn put_name<B: BufMut>(bufm: &mut B, name: &[u8]) {
    let name = match name {
        [b' ' | b'\t', rest @ ..] => {
            bufm.put_u8(b'-');
            rest
        }
        name => name,
    };
    put_replaced(bufm, name, |b| matches!(b, b'\r' | b'\n' | b':'), b'-');
}

fn put_value<B: BufMut>(bufm: &mut B, value: &[u8]) {
    put_replaced(bufm, value, |b| matches!(b, b'\r' | b'\n'), b' ');
}

fn put_replaced<B, F>(bufm: &mut B, mut bytes: &[u8], reject: F, with: u8)
where
    B: BufMut,
    F: Fn(u8) -> bool,
{
    while let Some(nth) = bytes.iter().position(|b| reject(*b)) {
        bufm.put_slice(&bytes[..nth]);
        bufm.put_u8(with);
        bytes = &bytes[nth + 1..];
    }
    bufm.put_slice(bytes);
}

#[cfg(test)]
mod test {
    use crate::headers::HeaderMap;

    #[test]
    fn write_sanitized() {
        let mut map = HeaderMap::new();
        map.append("x-evil", "a\r\nSet-Cookie: b\n");

        assert_eq!(&map.to_bytes()[..], b"X-Evil: a  Set-Cookie: b \r\n\r\n");
    }

    #[test]
    fn write_sanitized_name() {
        macro_rules! test {
            ($name:expr => $out:expr) => {
                let mut map = HeaderMap::new();
                map.append($name, "v");

                let bytes = map.to_bytes();
                assert_eq!(&bytes[..], $out, "write {:?}", $name);

                let mut parsed = HeaderMap::new();
                let n = parsed.parse_bytes(&bytes).unwrap();
                assert_eq!(n, bytes.len());
                assert_eq!(parsed.len(), 1, "parse back {:?}", $name);
                assert_eq!(parsed.iter().next().map(|(_, value)| value), Some("v"));
            };
        }

        test!("X\r\nEvil: 1" => b"X--evil- 1: v\r\n\r\n");
        test!("a:b" => b"A-b: v\r\n\r\n");
        test!(" lead" => b"-lead: v\r\n\r\n");
        test!("\tx\n" => b"-x-: v\r\n\r\n");
    }

    #[test]
    fn write_empty() {
        assert_eq!(&HeaderMap::new().to_bytes()[..], b"\r\n");
    }

    #[test]
    fn write_to_io() {
        let map = HeaderMap::from_pairs(["host", "example.com"]).unwrap();
        let mut out = std::io::Cursor::new(Vec::new());
        map.write_to(&mut out).unwrap();
        assert_eq!(out.into_inner(), b"Host: example.com\r\n\r\n");
    }
}
