use std::collections::BTreeMap;

use crate::domain::{Guid, PackageEntry};
use crate::error::{Result, UnipkgError};
use crate::repo::PackageRepo;

/// Entries held in memory, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct InMemRepo {
    pub by_id: BTreeMap<Guid, PackageEntry>,
}

impl InMemRepo {
    pub fn from_entries(entries: impl IntoIterator<Item = PackageEntry>) -> Self {
        Self {
            by_id: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }
}

impl PackageRepo for InMemRepo {
    fn identifiers(&self) -> Result<Vec<Guid>> {
        Ok(self.by_id.keys().copied().collect())
    }

    fn read_entry(&self, id: Guid) -> Result<PackageEntry> {
        self.by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| UnipkgError::Format(format!("no entry for {id}")))
    }
}
