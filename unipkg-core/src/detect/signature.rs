//! Magic-number sniffing for asset payloads.
//!
//! Unity stores every payload as a bare `asset` file, so the only reliable
//! hint about its real type is the leading bytes. Rules run in a fixed order
//! and the first match wins.

use memchr::memmem;

pub const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

const GIF_MAGIC: [u8; 3] = *b"GIF";
// Uncompressed and run-length encoded true-color TGA headers.
const TGA_HEADERS: [[u8; 3]; 2] = [[0x00, 0x00, 0x02], [0x00, 0x00, 0x0A]];
const OBJ_KEYWORDS: [&str; 4] = ["v ", "vt ", "vn ", "f "];

/// Bytes inspected by the text-based rules.
const HEAD_WINDOW: usize = 100;
/// An embedded signature must leave at least this many bytes after it.
pub const EMBED_TAIL: usize = 100;

/// Best-guess extension (with leading dot) for `data`, or `None`.
pub fn detect(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }
    if data.starts_with(&PNG_MAGIC) {
        return Some(".png");
    }
    if data.starts_with(&JPEG_SOI) {
        return Some(".jpg");
    }
    if data.starts_with(&GIF_MAGIC) {
        return Some(".gif");
    }
    if data.len() >= 18 && TGA_HEADERS.iter().any(|h| data.starts_with(h)) {
        return Some(".tga");
    }
    if data.len() >= 20 {
        let header = ascii_lossy(&data[..20]);
        if header.contains("Kaydara") || header.starts_with("FBX") {
            return Some(".fbx");
        }
    }
    if data.len() >= 10 {
        let head = &data[..data.len().min(HEAD_WINDOW)];
        let ascii = ascii_lossy(head);
        if OBJ_KEYWORDS.iter().any(|k| ascii.contains(k)) {
            return Some(".obj");
        }
        let text = String::from_utf8_lossy(head);
        if (text.starts_with("%YAML") || text.starts_with("---"))
            && offset_past_header(data, &PNG_MAGIC).is_some()
        {
            return Some(".png");
        }
    }
    None
}

/// True when `data` is itself a PNG or JPEG stream from byte zero.
pub fn is_standalone_image(data: &[u8]) -> bool {
    data.starts_with(&PNG_MAGIC) || data.starts_with(&JPEG_SOI)
}

/// Offset of the first `needle`, if it sits behind a non-empty header and
/// is followed by more than [`EMBED_TAIL`] bytes.
pub(crate) fn offset_past_header(data: &[u8], needle: &[u8]) -> Option<usize> {
    let p = memmem::find(data, needle)?;
    (p > 0 && p < data.len().saturating_sub(EMBED_TAIL)).then_some(p)
}

// Strict ASCII view: anything above 0x7F reads as '?'.
fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}
