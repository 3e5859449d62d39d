//! Step 2: turn identifier entries back into files under the staging root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::detect::embedded::{find_embedded, scans};
use crate::detect::signature::{detect, is_standalone_image};
use crate::domain::{PackageEntry, ResolvedAsset};
use crate::error::Result;
use crate::pathname::resolve;
use crate::policy::Policy;
use crate::repo::PackageRepo;
use crate::stats::Stats;
use crate::util::sanitize::{change_extension, safe_join};

const PROGRESS_EVERY: u64 = 10;
const UNITY_INTERNAL_SUFFIXES: [&str; 5] = [".meta", ".mat", ".prefab", ".unity", ".asset"];
const EDITOR_DIR: &str = "Editor";

/// Why an entry produced no file. None of these are errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// `pathname` or `asset` is missing.
    Incomplete,
    Unresolvable,
    /// Unity-internal file while running raw-only.
    Filtered,
    EmptyAsset,
    /// Resolved path would land outside the staging root.
    UnsafePath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Extracted(PathBuf),
    /// Destination already existed and overwrite is off.
    Skipped(PathBuf),
    Dropped(DropReason),
}

/// True for files that only make sense inside the Unity editor.
pub fn is_unity_internal(path: &str) -> bool {
    if UNITY_INTERNAL_SUFFIXES.iter().any(|s| path.ends_with(s)) {
        return true;
    }
    let segments: Vec<&str> = path.split(['/', '\\']).collect();
    segments
        .split_last()
        .is_some_and(|(_, dirs)| dirs.contains(&EDITOR_DIR))
}

pub struct Materializer<'a> {
    root: &'a Path,
    policy: Policy,
}

impl<'a> Materializer<'a> {
    pub fn new(root: &'a Path, policy: Policy) -> Self {
        Self { root, policy }
    }

    /// Work out where an entry goes and what it is, without touching disk.
    pub fn resolve_entry(
        &self,
        entry: PackageEntry,
    ) -> std::result::Result<ResolvedAsset, DropReason> {
        let (Some(raw), Some(asset)) = (entry.raw_pathname, entry.asset) else {
            return Err(DropReason::Incomplete);
        };
        let project_path = resolve(&raw).ok_or(DropReason::Unresolvable)?;
        if self.policy.raw_only && is_unity_internal(&project_path) {
            return Err(DropReason::Filtered);
        }
        if asset.is_empty() {
            return Err(DropReason::EmptyAsset);
        }

        let detected = detect(&asset);
        let rel = match detected {
            Some(ext) => change_extension(&project_path, ext),
            None => project_path.clone(),
        };
        let output_path = safe_join(self.root, &rel).ok_or(DropReason::UnsafePath)?;
        Ok(ResolvedAsset {
            project_path,
            detected,
            payload: asset,
            output_path,
        })
    }

    pub fn materialize(&self, entry: PackageEntry, stats: &mut Stats) -> Result<Outcome> {
        let id = entry.id;
        let mut asset = match self.resolve_entry(entry) {
            Ok(a) => a,
            Err(reason) => {
                debug!(%id, ?reason, "dropping entry");
                return Ok(Outcome::Dropped(reason));
            }
        };

        if asset.output_path.exists() && !self.policy.overwrite {
            debug!(%id, path = %asset.output_path.display(), "exists, skipping");
            stats.skipped += 1;
            return Ok(Outcome::Skipped(asset.output_path));
        }

        if self.unwrap_embedded(&mut asset)
            && asset.output_path.exists()
            && !self.policy.overwrite
        {
            debug!(%id, path = %asset.output_path.display(), "embedded target exists, skipping");
            stats.skipped += 1;
            return Ok(Outcome::Skipped(asset.output_path));
        }

        if let Some(parent) = asset.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&asset.output_path, &asset.payload)?;
        stats.extracted += 1;
        if stats.extracted % PROGRESS_EVERY == 0 {
            info!("processed {} raw files", stats.extracted);
        }
        Ok(Outcome::Extracted(asset.output_path))
    }

    // Returns true when the output path moved. A payload that already starts
    // with its image magic is written as-is.
    fn unwrap_embedded(&self, asset: &mut ResolvedAsset) -> bool {
        if !scans(asset.detected) || is_standalone_image(&asset.payload) {
            return false;
        }
        let Some((payload, ext)) = find_embedded(&asset.payload, asset.detected) else {
            return false;
        };
        let Ok(rel) = asset.output_path.strip_prefix(self.root) else {
            return false;
        };
        let Some(path) = safe_join(self.root, &change_extension(&rel.to_string_lossy(), ext))
        else {
            return false;
        };
        asset.payload = payload;
        let moved = path != asset.output_path;
        asset.output_path = path;
        moved
    }
}

/// Materialize every entry of `repo` under `root`, tallying into `stats`.
pub fn materialize_all(
    repo: &dyn PackageRepo,
    root: &Path,
    policy: Policy,
    stats: &mut Stats,
) -> Result<()> {
    fs::create_dir_all(root)?;
    let m = Materializer::new(root, policy);
    for id in repo.identifiers()? {
        let entry = repo.read_entry(id)?;
        m.materialize(entry, stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::signature::PNG_SIGNATURE;
    use crate::domain::Guid;

    fn entry(path: &[u8], asset: &[u8]) -> PackageEntry {
        PackageEntry {
            id: Guid::parse("00000000000000000000000000000001").unwrap(),
            raw_pathname: Some(path.to_vec()),
            asset: Some(asset.to_vec()),
        }
    }

    fn png(len: usize) -> Vec<u8> {
        let mut v = PNG_SIGNATURE.to_vec();
        v.resize(len, 0x42);
        v
    }

    #[test]
    fn unity_internal_files() {
        assert!(is_unity_internal("Mats/Skin.mat"));
        assert!(is_unity_internal("Scenes/Main.unity"));
        assert!(is_unity_internal("Scripts/Editor/Tool.cs"));
        assert!(is_unity_internal("Scripts\\Editor\\Tool.cs"));
        assert!(!is_unity_internal("Scripts/Runtime/Editor.cs"));
        assert!(!is_unity_internal("Models/Hero.fbx"));
    }

    #[test]
    fn detected_extension_replaces_original() {
        let root = Path::new("/stage");
        let m = Materializer::new(root, Policy::default());
        let a = m
            .resolve_entry(entry(b"Assets/Tex/skin.asset\n", &png(64)))
            .unwrap();
        assert_eq!(a.project_path, "Tex/skin.asset");
        assert_eq!(a.detected, Some(".png"));
        assert_eq!(a.output_path, PathBuf::from("/stage/Tex/skin.png"));
    }

    #[test]
    fn unknown_payload_keeps_path() {
        let m = Materializer::new(Path::new("/stage"), Policy::default());
        let a = m
            .resolve_entry(entry(b"Assets/Docs/readme.txt", b"hello there, world"))
            .unwrap();
        assert_eq!(a.detected, None);
        assert_eq!(a.output_path, PathBuf::from("/stage/Docs/readme.txt"));
    }

    #[test]
    fn drop_reasons() {
        let m = Materializer::new(
            Path::new("/stage"),
            Policy {
                raw_only: true,
                ..Policy::default()
            },
        );
        let mut incomplete = entry(b"Assets/a.png", b"x");
        incomplete.asset = None;
        assert_eq!(m.resolve_entry(incomplete).unwrap_err(), DropReason::Incomplete);
        assert_eq!(
            m.resolve_entry(entry(b"1234\0", b"data")).unwrap_err(),
            DropReason::Unresolvable
        );
        assert_eq!(
            m.resolve_entry(entry(b"Assets/a.prefab", b"data")).unwrap_err(),
            DropReason::Filtered
        );
        assert_eq!(
            m.resolve_entry(entry(b"Assets/a.png", b"")).unwrap_err(),
            DropReason::EmptyAsset
        );
        assert_eq!(
            m.resolve_entry(entry(b"Assets/../../etc/x.txt", b"data")).unwrap_err(),
            DropReason::UnsafePath
        );
    }

    #[test]
    fn raw_only_off_keeps_internal_files() {
        let m = Materializer::new(Path::new("/stage"), Policy::default());
        assert!(m.resolve_entry(entry(b"Assets/a.prefab", b"data 1234")).is_ok());
    }

    #[test]
    fn writes_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let m = Materializer::new(dir.path(), Policy::default());
        let mut stats = Stats::default();

        let out = m.materialize(entry(b"Assets/a/b.tex", &png(64)), &mut stats).unwrap();
        let path = dir.path().join("a/b.png");
        assert_eq!(out, Outcome::Extracted(path.clone()));
        assert_eq!(fs::read(&path).unwrap(), png(64));

        let again = m.materialize(entry(b"Assets/a/b.tex", &png(64)), &mut stats).unwrap();
        assert_eq!(again, Outcome::Skipped(path));
        assert_eq!((stats.extracted, stats.skipped), (1, 1));
    }

    #[test]
    fn materializes_every_entry_in_order() {
        use crate::index::inmem::InMemRepo;

        let dir = tempfile::tempdir().unwrap();
        let mut incomplete = entry(b"Assets/c.txt", b"");
        incomplete.id = Guid::parse("00000000000000000000000000000003").unwrap();
        incomplete.asset = None;
        let mut second = entry(b"Assets/Docs/b.txt", b"plain text body");
        second.id = Guid::parse("00000000000000000000000000000002").unwrap();
        let repo = InMemRepo::from_entries([
            incomplete,
            second,
            entry(b"Assets/Docs/a.txt", b"another text body"),
        ]);

        let mut stats = Stats::default();
        materialize_all(&repo, dir.path(), Policy::default(), &mut stats).unwrap();
        assert_eq!(stats.extracted, 2);
        assert!(dir.path().join("Docs/a.txt").exists());
        assert!(dir.path().join("Docs/b.txt").exists());
        assert!(!dir.path().join("c.txt").exists());
    }
}
