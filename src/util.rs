//! Byte-input helpers.

use std::borrow::Cow;

/// Decode raw export bytes to text.
///
/// UTF-8 (with or without BOM) is tried first; if the bytes are not valid
/// UTF-8 the declared charset is used, and Windows-1252 is the last resort.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a `charset=` declaration near the start of an HTML document.
///
/// Matches both `<meta charset="...">` and the `content="text/html;
/// charset=..."` form.
pub fn extract_charset(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(1024);
    let prefix = &bytes[..check_len];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let mut value = &prefix[pos + 8..];

    if let Some((&quote, rest)) = value.split_first()
        && (quote == b'"' || quote == b'\'')
    {
        value = rest;
    }

    let end = value
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(value.len());
    if end == 0 {
        return None;
    }

    std::str::from_utf8(&value[..end]).ok()
}
