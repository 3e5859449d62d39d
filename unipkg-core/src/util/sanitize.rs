use std::path::{Path, PathBuf};

/// Join a `/`-separated relative path under `root`.
///
/// Returns `None` for absolute paths or any `..` segment, so the result can
/// never leave `root`. Backslashes stay inside their segment.
pub fn safe_join(root: &Path, rel: &str) -> Option<PathBuf> {
    if rel.starts_with('/') || rel.starts_with('\\') {
        return None;
    }
    let mut out = root.to_path_buf();
    let mut pushed = false;
    for seg in rel.split('/') {
        if seg.split('\\').any(|s| s == "..") || seg.contains(':') {
            return None;
        }
        if seg.is_empty() || seg == "." {
            continue;
        }
        out.push(seg);
        pushed = true;
    }
    pushed.then_some(out)
}

/// Replace the extension of the last path segment, appending when it has none.
/// `ext` carries its leading dot.
pub fn change_extension(path: &str, ext: &str) -> String {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let stem_end = path[name_start..]
        .rfind('.')
        .map_or(path.len(), |i| name_start + i);
    format!("{}{}", &path[..stem_end], ext)
}

/// Lowercased extension of the last segment, with its dot.
pub fn extension_of(path: &str) -> Option<String> {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &path[name_start..];
    name.rfind('.')
        .filter(|&i| i + 1 < name.len())
        .map(|i| name[i..].to_ascii_lowercase())
}
