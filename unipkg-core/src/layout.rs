use std::path::{Path, PathBuf};

use crate::domain::Category;

pub const PACKAGE_EXTENSION: &str = "unitypackage";

/// Output directories for one package, all siblings of the package file.
#[derive(Clone, Debug)]
pub struct Layout {
    /// `<name>_temp`: raw archive contents.
    pub scratch: PathBuf,
    /// `<name>`
    pub output: PathBuf,
    /// `<name>/Extracted Unity/Assets`
    pub assets: PathBuf,
    pub models: PathBuf,
    pub textures: PathBuf,
    pub icons: PathBuf,
}

impl Layout {
    pub fn for_package(package: &Path) -> Self {
        let parent = package
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = package
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let output = parent.join(&name);
        Self {
            scratch: parent.join(format!("{name}_temp")),
            assets: output.join("Extracted Unity").join("Assets"),
            models: output.join("Models"),
            textures: output.join("Textures"),
            icons: output.join("Icons"),
            output,
        }
    }

    pub fn category_dir(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Model => Some(&self.models),
            Category::Texture => Some(&self.textures),
            Category::Icon => Some(&self.icons),
            Category::Excluded | Category::Unclassified => None,
        }
    }
}

pub fn has_package_extension(package: &Path) -> bool {
    package
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(PACKAGE_EXTENSION))
}
