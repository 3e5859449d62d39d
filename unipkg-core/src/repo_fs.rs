use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{Guid, PackageEntry};
use crate::error::Result;
use crate::repo::{OpenParams, PackageRepo};

pub const PATHNAME_FILE: &str = "pathname";
pub const ASSET_FILE: &str = "asset";

/// Reads identifier directories from an unpacked scratch tree.
pub struct FsPackageRepo {
    root: PathBuf,
}

impl FsPackageRepo {
    pub fn new(params: OpenParams) -> Result<Self> {
        if !params.scratch_dir.is_dir() {
            return Err(std::io::Error::new(
                ErrorKind::NotFound,
                format!("scratch dir missing: {}", params.scratch_dir.display()),
            )
            .into());
        }
        Ok(Self {
            root: params.scratch_dir,
        })
    }
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read(path)?))
}

impl PackageRepo for FsPackageRepo {
    fn identifiers(&self) -> Result<Vec<Guid>> {
        let mut ids = Vec::new();
        for dent in fs::read_dir(&self.root)? {
            let dent = dent?;
            if !dent.file_type()?.is_dir() {
                continue;
            }
            if let Some(id) = dent.file_name().to_str().and_then(Guid::parse) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn read_entry(&self, id: Guid) -> Result<PackageEntry> {
        let dir = self.root.join(id.to_string());
        Ok(PackageEntry {
            id,
            raw_pathname: read_optional(&dir.join(PATHNAME_FILE))?,
            asset: read_optional(&dir.join(ASSET_FILE))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_identifier_dirs_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let id = "aabbccddeeff00112233445566778899";
        fs::create_dir_all(dir.path().join(id)).unwrap();
        fs::write(dir.path().join(id).join(PATHNAME_FILE), b"Assets/x.png").unwrap();
        fs::create_dir_all(dir.path().join("AABBCCDDEEFF00112233445566778899")).unwrap();
        fs::create_dir_all(dir.path().join("not-a-guid")).unwrap();
        fs::write(dir.path().join("ffffffffffffffffffffffffffffffff"), b"file").unwrap();

        let repo = FsPackageRepo::new(OpenParams {
            scratch_dir: dir.path().to_path_buf(),
        })
        .unwrap();
        let ids = repo.identifiers().unwrap();
        assert_eq!(ids, vec![Guid::parse(id).unwrap()]);

        let entry = repo.read_entry(ids[0]).unwrap();
        assert_eq!(entry.raw_pathname.as_deref(), Some(&b"Assets/x.png"[..]));
        assert!(entry.asset.is_none());
    }
}
