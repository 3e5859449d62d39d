//! Recovery of images wrapped behind a container header.
//!
//! Some Unity containers prefix a plain PNG or JPEG with a variable-length
//! binary header. A linear scan for the image signature recovers it without
//! parsing the container.

use memchr::memmem;

use super::signature::{JPEG_EOI, JPEG_SOI, PNG_SIGNATURE, offset_past_header};

/// Whether a payload with this detected extension is worth scanning.
pub fn scans(current: Option<&str>) -> bool {
    matches!(current, None | Some(".png") | Some(".jpg"))
}

/// Returns a copied sub-range holding the embedded image and its extension.
pub fn find_embedded(data: &[u8], current: Option<&str>) -> Option<(Vec<u8>, &'static str)> {
    if !scans(current) {
        return None;
    }
    if let Some(p) = offset_past_header(data, &PNG_SIGNATURE) {
        return Some((data[p..].to_vec(), ".png"));
    }
    let p = offset_past_header(data, &JPEG_SOI)?;
    let body = p + JPEG_SOI.len();
    let end = memmem::find(&data[body..], &JPEG_EOI)
        .map(|e| body + e + JPEG_EOI.len())
        .unwrap_or(data.len());
    Some((data[p..end].to_vec(), ".jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_behind_header() {
        let mut data = vec![0xAA; 50];
        data.extend_from_slice(&PNG_SIGNATURE);
        data.extend(std::iter::repeat_n(0xBB, 200));

        let (payload, ext) = find_embedded(&data, None).unwrap();
        assert_eq!(ext, ".png");
        assert_eq!(payload.len(), 208);
        assert!(payload.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn png_at_zero_is_not_embedded() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend(std::iter::repeat_n(0xBB, 300));
        assert!(find_embedded(&data, Some(".png")).is_none());
    }

    #[test]
    fn png_needs_trailing_room() {
        let mut data = vec![0xAA; 50];
        data.extend_from_slice(&PNG_SIGNATURE);
        data.extend(std::iter::repeat_n(0xBB, 60));
        assert!(find_embedded(&data, None).is_none());
    }

    #[test]
    fn jpeg_trimmed_at_end_marker() {
        let mut data = vec![0x11; 20];
        data.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
        data.extend(std::iter::repeat_n(0x22, 150));
        data.extend_from_slice(&JPEG_EOI);
        data.extend(std::iter::repeat_n(0x33, 40));

        let (payload, ext) = find_embedded(&data, Some(".jpg")).unwrap();
        assert_eq!(ext, ".jpg");
        assert_eq!(payload.len(), 4 + 150 + 2);
        assert!(payload.starts_with(&JPEG_SOI));
        assert!(payload.ends_with(&JPEG_EOI));
    }

    #[test]
    fn jpeg_without_end_marker_runs_to_end() {
        let mut data = vec![0x11; 20];
        data.extend_from_slice(&JPEG_SOI);
        data.extend(std::iter::repeat_n(0x22, 150));

        let (payload, _) = find_embedded(&data, None).unwrap();
        assert_eq!(payload.len(), data.len() - 20);
    }

    #[test]
    fn other_extensions_are_left_alone() {
        let mut data = vec![0xAA; 50];
        data.extend_from_slice(&PNG_SIGNATURE);
        data.extend(std::iter::repeat_n(0xBB, 200));
        assert!(find_embedded(&data, Some(".fbx")).is_none());
        assert!(!scans(Some(".tga")));
    }
}
