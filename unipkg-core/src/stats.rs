use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Regular files unpacked from the archive into scratch.
    pub archive_files: u64,
    pub extracted: u64,
    /// Staging files left alone because they already existed.
    pub skipped: u64,
    /// Category copies left alone because their destination already existed.
    pub organize_skipped: u64,
    pub models: u64,
    pub textures: u64,
    pub icons: u64,
    pub excluded: u64,
}

impl Stats {
    pub fn organized(&self) -> u64 {
        self.models + self.textures + self.icons
    }
}
