use std::io::{BufReader, Cursor, Read};

use bytes::BytesMut;

use super::{Line, ParseError, classify};
use crate::common::ParseResult;
use crate::headers;
use crate::headers::HeaderMap;
use crate::headers::standard::{CONTENT_TYPE, COOKIE};

const MULTIHDR: &str = "\
Content-Type: text/html
CoOkie: hello=world
Cookie: foo=bar

";

const CONTINUATION: &str = "\
Cookie: hello=world,
 foo=bar
Content-Type: text/html

";

fn cases() -> [(&'static str, HeaderMap, &'static str); 2] {
    [
        (
            "multihdr",
            headers! {
                CONTENT_TYPE => "text/html",
                COOKIE => "hello=world",
                COOKIE => "foo=bar",
            },
            MULTIHDR,
        ),
        (
            "continuation",
            headers! {
                CONTENT_TYPE => "text/html",
                COOKIE => "hello=world, foo=bar",
            },
            CONTINUATION,
        ),
    ]
}

fn parse(input: &[u8]) -> Result<(HeaderMap, usize), ParseError> {
    let mut map = HeaderMap::new();
    let n = map.parse_bytes(input)?;
    Ok((map, n))
}

#[test]
fn test_classify() {
    assert_eq!(classify(b"").unwrap(), Line::End);
    assert_eq!(classify(b"\r").unwrap(), Line::End);
    assert_eq!(classify(b"A: b\r").unwrap(), Line::Field(b"A", b"b"));
    assert_eq!(classify(b"A:b").unwrap(), Line::Field(b"A", b"b"));
    assert_eq!(classify(b"A:  b ").unwrap(), Line::Field(b"A", b" b "));
    assert_eq!(classify(b"A:").unwrap(), Line::Field(b"A", b""));
    assert_eq!(classify(b"A: b: c").unwrap(), Line::Field(b"A", b"b: c"));
    assert_eq!(classify(b" \t b").unwrap(), Line::Continuation(b"b"));
    assert_eq!(classify(b"\tb c\r").unwrap(), Line::Continuation(b"b c"));
    assert_eq!(classify(b"  ").unwrap(), Line::Continuation(b""));
    assert!(matches!(classify(b"no colon"), Err(ParseError::InvalidHeader)));
}

#[test]
fn test_read_from() {
    for (name, expected, input) in cases() {
        let mut reader = Cursor::new(input.as_bytes());
        let mut map = HeaderMap::new();

        if let Err(err) = map.read_from(&mut reader) {
            panic!("read_from error for {name}: {err}");
        }

        assert_eq!(map, expected, "read_from for {name}");
        assert_eq!(reader.position() as usize, input.len());
    }
}

#[test]
fn test_parse_bytes() {
    for (name, expected, input) in cases() {
        let (map, n) = match parse(input.as_bytes()) {
            Ok(ok) => ok,
            Err(err) => panic!("parse_bytes error for {name}: {err}"),
        };

        assert_eq!(map, expected, "parse_bytes for {name}");
        assert_eq!(n, input.len(), "parse_bytes consumed for {name}");
    }
}

#[test]
fn test_distinct_entries() {
    let (map, _) = parse(MULTIHDR.as_bytes()).unwrap();

    assert_eq!(map.fields_len(), 2);
    assert_eq!(map.get_all("cookie").collect::<Vec<_>>(), ["hello=world", "foo=bar"]);
    assert_eq!(map.get("CoOkie"), map.get("Cookie"));
    assert_eq!(map.fields()[1].name().as_str(), "Cookie");
}

#[test]
fn test_crlf_and_remaining() {
    let input = b"Host: example.com\r\nContent-Length: 4\r\n\r\nbody";
    let (map, n) = parse(input).unwrap();

    assert_eq!(&input[n..], b"body");
    assert_eq!(map.get("host"), Some("example.com"));
    assert_eq!(map.get("content-length"), Some("4"));

    let mut reader = Cursor::new(&input[..]);
    let mut map = HeaderMap::new();
    map.read_from(&mut reader).unwrap();
    assert_eq!(reader.position() as usize, n);
}

#[test]
fn test_value_spacing() {
    let (map, _) = parse(b"A:b\nB: b\nC:  b \nD:\nE: \n\n").unwrap();

    assert_eq!(map.get("a"), Some("b"));
    assert_eq!(map.get("b"), Some("b"));
    assert_eq!(map.get("c"), Some(" b "));
    assert_eq!(map.get("d"), Some(""));
    assert_eq!(map.get("e"), Some(""));
}

#[test]
fn test_continuation() {
    // tab, multiple continuation, crlf
    let (map, _) = parse(b"X-Long: a\r\n\tb\r\n   c\r\n\r\n").unwrap();
    assert_eq!(map.get_all("x-long").collect::<Vec<_>>(), ["a b c"]);

    // continuation extends the latest value of a repeated name
    let (map, _) = parse(b"Cookie: a=1\nHost: h\nCookie: b=2\n c=3\n\n").unwrap();
    assert_eq!(map.get_all("cookie").collect::<Vec<_>>(), ["a=1", "b=2 c=3"]);
    assert_eq!(map.get("host"), Some("h"));

    // whitespace only continuation
    let (map, _) = parse(b"A: b\n \n\n").unwrap();
    assert_eq!(map.get("a"), Some("b "));
}

#[test]
fn test_error() {
    assert!(matches!(parse(b"no colon\n\n"), Err(ParseError::InvalidHeader)));
    assert!(matches!(parse(b"A: b\nno colon\n\n"), Err(ParseError::InvalidHeader)));
    assert!(matches!(parse(b" leading: continuation\n\n"), Err(ParseError::LeadingContinuation)));
    assert!(matches!(parse(b""), Err(ParseError::Truncated)));
    assert!(matches!(parse(b"A: b\n"), Err(ParseError::Truncated)));
    assert!(matches!(parse(b"A: b\n\r"), Err(ParseError::Truncated)));

    let mut map = HeaderMap::new();
    let err = map.read_from(&mut Cursor::new(&b"A: b\nB: c"[..])).unwrap_err();
    assert!(err.is_truncated());

    let mut map = HeaderMap::new();
    let err = map.read_from(&mut Cursor::new(&b"\tA: b\n\n"[..])).unwrap_err();
    assert!(matches!(err, ParseError::LeadingContinuation));
}

#[test]
fn test_continuation_does_not_cross_blocks() {
    let mut map = headers! { "a" => "b" };
    let err = map.parse_bytes(b" c\n\n").unwrap_err();

    assert!(matches!(err, ParseError::LeadingContinuation));
    assert_eq!(map.get("a"), Some("b"));
}

#[test]
fn test_io_error() {
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken"))
        }
    }

    let mut map = HeaderMap::new();
    let err = map.read_from(&mut BufReader::new(Broken)).unwrap_err();

    assert!(matches!(err, ParseError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_non_utf8() {
    let (map, _) = parse(b"X-Bin: a\xffb\n\n").unwrap();
    assert_eq!(map.get("x-bin"), Some("a\u{fffd}b"));
}

#[test]
fn test_parse_chunk() {
    let mut map = HeaderMap::new();
    let mut bytes = BytesMut::new();

    for chunk in [&b"Cookie: hello"[..], b"=world,\r\n", b" foo=bar\r", b"\n\r", b"\nbody"] {
        assert!(map.parse_chunk(&mut bytes).is_pending());
        assert!(map.is_empty());
        bytes.extend_from_slice(chunk);
    }

    assert!(matches!(map.parse_chunk(&mut bytes), ParseResult::Ok(())));
    assert_eq!(map.get_all("cookie").collect::<Vec<_>>(), ["hello=world, foo=bar"]);
    assert_eq!(&bytes[..], b"body");

    let mut bytes = BytesMut::from(&b"bad line\r\nA: b"[..]);
    assert!(map.parse_chunk(&mut bytes).is_err());
    assert_eq!(bytes.len(), 14);
}

#[test]
fn test_write_round_trip() {
    for (name, expected, _) in cases() {
        let (map, n) = parse(&expected.to_bytes()).unwrap();
        assert_eq!(map, expected, "round trip for {name}");
        assert_eq!(n, expected.to_bytes().len());
    }
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn test_read_from_async() {
    use tokio::io::BufReader;

    for (name, expected, input) in cases() {
        let mut reader = BufReader::new(input.as_bytes());
        let mut map = HeaderMap::new();

        if let Err(err) = map.read_from_async(&mut reader).await {
            panic!("read_from_async error for {name}: {err}");
        }

        assert_eq!(map, expected, "read_from_async for {name}");
    }

    let mut map = HeaderMap::new();
    let err = map
        .read_from_async(&mut BufReader::new(&b"A: b\n"[..]))
        .await
        .unwrap_err();
    assert!(err.is_truncated());
}
