use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, UnipkgError};
use crate::layout::{Layout, has_package_extension};
use crate::materialize::materialize_all;
use crate::organize::organize;
use crate::policy::Policy;
use crate::read::unpack::unpack;
use crate::repo::OpenParams;
use crate::repo_fs::FsPackageRepo;
use crate::stats::Stats;

/// Unpack `package` next to itself and sort its assets.
pub fn run(package: &Path, policy: Policy) -> Result<Stats> {
    if !package.is_file() {
        return Err(UnipkgError::NotFound(package.to_path_buf()));
    }
    if !has_package_extension(package) {
        warn!(package = %package.display(), "file doesn't have .unitypackage extension");
    }
    run_with_layout(package, &Layout::for_package(package), policy)
}

pub fn run_with_layout(package: &Path, layout: &Layout, policy: Policy) -> Result<Stats> {
    let mut stats = Stats::default();
    fs::create_dir_all(&layout.assets)?;

    info!("step 1: extracting package structure");
    stats.archive_files = unpack(package, &layout.scratch)?;

    info!("step 2: reconstructing file structure");
    let repo = FsPackageRepo::new(OpenParams {
        scratch_dir: layout.scratch.clone(),
    })?;
    materialize_all(&repo, &layout.assets, policy, &mut stats)?;
    remove_scratch(&layout.scratch);

    info!("step 3: organizing files into categories");
    organize(layout, policy, &mut stats)?;
    Ok(stats)
}

fn remove_scratch(dir: &Path) {
    if let Err(e) = fs::remove_dir_all(dir) {
        debug!(dir = %dir.display(), "scratch cleanup failed: {e}");
    }
}
