use std::io;
use httphead::headers::{HeaderMap, split_list, unquote};

/// Read a header block from stdin and print every field.
///
/// ```not_rust
/// printf 'Accept: text/html, "a, b"\r\nX-Folded: a\r\n b\r\n\r\n' | cargo run -p example
/// ```
fn main() -> io::Result<()> {
    env_logger::init();

    let mut map = HeaderMap::new();
    if let Err(err) = map.read_from(&mut io::stdin().lock()) {
        log::error!("failed to parse header block: {err}");
        return Err(io::Error::new(io::ErrorKind::InvalidData, err));
    }

    for (name, value) in &map {
        println!("> {name}: {value}");
        for item in split_list(value) {
            println!("  - {}", unquote(item));
        }
    }

    log::info!("{} fields, {} values", map.fields_len(), map.len());

    map.write_to(&mut io::stdout().lock())
}
