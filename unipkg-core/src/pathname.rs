//! Decoding of `pathname` records.
//!
//! Unity pads the record with whitespace and control bytes after the path.
//! The path is taken to end at its last ASCII letter, which drops that
//! padding (and, for names ending in a digit or symbol, part of the name).

const ASSETS_ROOT_LEN: usize = "Assets/".len();

/// Project-relative path for a raw `pathname` record, or `None` to skip.
pub fn resolve(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let last = text.rfind(|c: char| c.is_ascii_alphabetic())?;
    let path = &text[..=last];
    if path.is_empty() {
        return None;
    }
    Some(strip_assets_root(path).to_owned())
}

fn strip_assets_root(path: &str) -> &str {
    let b = path.as_bytes();
    if b.len() >= ASSETS_ROOT_LEN
        && b[..6].eq_ignore_ascii_case(b"Assets")
        && matches!(b[6], b'/' | b'\\')
    {
        &path[ASSETS_ROOT_LEN..]
    } else {
        path
    }
}
