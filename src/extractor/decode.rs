use crate::error::{RenameCfdError, Result};
use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};

/// The XML declaration has to sit in the first bytes of the document.
const DECLARATION_WINDOW: usize = 256;

/// Decode raw invoice bytes to UTF-8 text.
///
/// A byte order mark wins over the declaration; otherwise the `encoding`
/// pseudo-attribute of `<?xml ...?>` is used, and UTF-8 when there is none.
/// `origin` only labels the error.
pub fn decode_document(bytes: &[u8], origin: &str) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (declared_encoding(bytes, origin), bytes),
    };

    if encoding != UTF_8 {
        debug!("Decoding {} as {}", origin, encoding.name());
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| RenameCfdError::Encoding {
            path: origin.to_string(),
            encoding: encoding.name().to_string(),
        })
}

fn declared_encoding(bytes: &[u8], origin: &str) -> &'static Encoding {
    let Some(label) = declaration_label(bytes) else {
        return UTF_8;
    };

    match Encoding::for_label(label) {
        Some(encoding) => encoding,
        None => {
            warn!(
                "{} declares unknown encoding '{}', reading it as UTF-8",
                origin,
                String::from_utf8_lossy(label)
            );
            UTF_8
        }
    }
}

/// Value of `encoding="..."` inside a leading `<?xml ...?>` declaration.
fn declaration_label(bytes: &[u8]) -> Option<&[u8]> {
    let window = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    if !window.starts_with(b"<?xml") {
        return None;
    }

    let end = find(window, b"?>")?;
    let declaration = &window[..end];

    let start = find(declaration, b"encoding")? + b"encoding".len();
    let rest = trim_ascii_start(&declaration[start..]);
    let rest = trim_ascii_start(rest.strip_prefix(b"=")?);

    let quote = *rest.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value = &rest[1..];
    let close = value.iter().position(|b| *b == quote)?;

    Some(&value[..close])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim_ascii_start(bytes: &[u8]) -> &[u8] {
    let skip = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &bytes[skip..]
}
