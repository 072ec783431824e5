//! Character set decoding for byte input.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::{CharacterSet, HtmlTextError, Result};

/// How far into the document to look for a `<meta>` charset declaration
const META_SNIFF_LEN: usize = 1024;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i-u)<meta\b[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).unwrap()
});

/// Decode bytes to a string.
///
/// With [`CharacterSet::Auto`]:
/// 1. a byte order mark decides the encoding
/// 2. valid UTF-8 is taken as is
/// 3. a `<meta charset>` or `http-equiv` declaration near the top is honoured
/// 4. otherwise Windows-1252 (superset of ISO-8859-1, common in old mail)
///
/// A named character set is used as given; an unknown label is a load error.
pub fn decode<'a>(bytes: &'a [u8], character_set: &CharacterSet) -> Result<Cow<'a, str>> {
    match character_set {
        CharacterSet::Auto => Ok(detect_and_decode(bytes)),
        CharacterSet::Named(label) => {
            let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
                return Err(HtmlTextError::load(
                    format!("unknown character set `{}`", label),
                    String::from_utf8_lossy(bytes),
                ));
            };
            log::debug!("decoding input as {}", encoding.name());
            let (result, _malformed) = encoding.decode_with_bom_removal(bytes);
            Ok(result)
        }
    }
}

fn detect_and_decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        log::debug!("byte order mark found, decoding as {}", encoding.name());
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _encoding, malformed) = UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(encoding) = sniff_meta_charset(bytes) {
        log::debug!("meta declaration found, decoding as {}", encoding.name());
        let (result, _) = encoding.decode_without_bom_handling(bytes);
        return result;
    }

    log::debug!("input is not UTF-8, falling back to windows-1252");
    let (result, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    result
}

/// Find the encoding declared by a `<meta>` tag near the top of the document
pub fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LEN)];
    let caps = META_CHARSET.captures(head)?;
    Encoding::for_label(caps.get(1)?.as_bytes())
}
