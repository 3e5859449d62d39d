//! Step 3: copy recognizable assets out of the staging tree into flat
//! category folders.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::Category;
use crate::error::Result;
use crate::layout::Layout;
use crate::policy::Policy;
use crate::stats::Stats;
use crate::util::sanitize::extension_of;

pub const MODEL_EXTENSION: &str = ".fbx";
pub const TEXTURE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".webp", ".tga", ".dds"];

// GoGo Locomotion ships hundreds of menu sprites nobody wants as textures.
const EXCLUDED_FAMILY: &str = "gogo";
const ICONS_DIR: &str = "Icons";

pub fn is_excluded_family(rel: &str) -> bool {
    rel.to_ascii_lowercase().contains(EXCLUDED_FAMILY)
}

pub fn is_icon(rel: &str) -> bool {
    if is_excluded_family(rel) {
        return false;
    }
    let segments: Vec<&str> = rel.split(['/', '\\']).collect();
    let Some((_, dirs)) = segments.split_last() else {
        return false;
    };
    dirs.iter().any(|d| d.eq_ignore_ascii_case(ICONS_DIR))
}

/// Category for a path relative to the staging root.
pub fn classify(rel: &str) -> Category {
    let Some(ext) = extension_of(rel) else {
        return Category::Unclassified;
    };
    if ext == MODEL_EXTENSION {
        return Category::Model;
    }
    if !TEXTURE_EXTENSIONS.contains(&ext.as_str()) {
        return Category::Unclassified;
    }
    if is_excluded_family(rel) {
        Category::Excluded
    } else if is_icon(rel) {
        Category::Icon
    } else {
        Category::Texture
    }
}

struct Organizer<'a> {
    layout: &'a Layout,
    policy: Policy,
    // destinations handed out during this pass
    claimed: HashSet<PathBuf>,
}

impl Organizer<'_> {
    fn place(&mut self, src: &Path, category: Category, stats: &mut Stats) -> Result<()> {
        let Some(dir) = self.layout.category_dir(category) else {
            return Ok(());
        };
        let Some(base) = src.file_name() else {
            return Ok(());
        };
        let mut dest = dir.join(base);

        if dest.exists() && !self.policy.overwrite {
            let renamed = category != Category::Model && self.claimed.contains(&dest);
            if !renamed {
                // left over from an earlier run
                self.claimed.insert(dest.clone());
                debug!(dest = %dest.display(), "exists, skipping");
                stats.organize_skipped += 1;
                return Ok(());
            }
            let parent = src
                .parent()
                .and_then(Path::file_name)
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
            dest = dir.join(format!("{parent}_{}", base.to_string_lossy()));
            if dest.exists() {
                debug!(dest = %dest.display(), "renamed destination exists, skipping");
                stats.organize_skipped += 1;
                return Ok(());
            }
        }

        fs::copy(src, &dest)?;
        self.claimed.insert(dest);
        match category {
            Category::Model => stats.models += 1,
            Category::Texture => stats.textures += 1,
            Category::Icon => stats.icons += 1,
            Category::Excluded | Category::Unclassified => {}
        }
        Ok(())
    }
}

/// Walk the staging tree once and copy every model, texture and icon.
pub fn organize(layout: &Layout, policy: Policy, stats: &mut Stats) -> Result<()> {
    for dir in [&layout.models, &layout.textures, &layout.icons] {
        fs::create_dir_all(dir)?;
    }
    let mut org = Organizer {
        layout,
        policy,
        claimed: HashSet::new(),
    };

    for entry in WalkDir::new(&layout.assets).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(&layout.assets) else {
            continue;
        };
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        match classify(&rel) {
            Category::Unclassified => {}
            Category::Excluded => stats.excluded += 1,
            category => org.place(entry.path(), category, stats)?,
        }
    }
    Ok(())
}
