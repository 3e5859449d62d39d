use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Replace files that already exist at a destination.
    pub overwrite: bool,
    /// Leave out Unity-internal files (.meta, .prefab, Editor scripts, ...).
    pub raw_only: bool,
}
