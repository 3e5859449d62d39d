// unipkg_core/src/repo.rs
use crate::domain::{Guid, PackageEntry};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct OpenParams {
    /// Directory the raw archive was unpacked into.
    pub scratch_dir: std::path::PathBuf,
}

/// Source of identifier directories, in a stable order.
pub trait PackageRepo {
    fn identifiers(&self) -> Result<Vec<Guid>>;

    fn read_entry(&self, id: Guid) -> Result<PackageEntry>;
}
