// unipkg_core/src/domain.rs
use std::fmt;
use std::path::PathBuf;

/// Unity's 128-bit asset identifier, spelled as 32 lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid([u8; 16]);

impl Guid {
    /// Parse a directory name. Only the exact lowercase form is accepted.
    pub fn parse(name: &str) -> Option<Self> {
        if name.len() != 32
            || !name
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return None;
        }
        let mut out = [0u8; 16];
        hex::decode_to_slice(name, &mut out).ok()?;
        Some(Self(out))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// One identifier directory as read from the archive.
#[derive(Clone, Debug)]
pub struct PackageEntry {
    pub id: Guid,
    pub raw_pathname: Option<Vec<u8>>,
    pub asset: Option<Vec<u8>>,
}

#[derive(Clone, Debug)]
pub struct ResolvedAsset {
    /// Project-relative path without the `Assets/` root.
    pub project_path: String,
    pub detected: Option<&'static str>,
    pub payload: Vec<u8>,
    pub output_path: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Model,
    Texture,
    Icon,
    Excluded,
    Unclassified,
}
