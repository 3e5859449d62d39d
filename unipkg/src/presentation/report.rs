use std::path::Path;

use unipkg_core::Stats;
use unipkg_core::error::{Result, UnipkgError};

pub fn print_text(stats: &Stats, output: &Path) {
    println!("\nExtraction complete!");
    println!("  Raw files extracted: {}", stats.extracted);
    if stats.skipped > 0 {
        println!("  Files skipped (already exist): {}", stats.skipped);
    }
    println!("\nOrganized files:");
    println!("  Models/ (.fbx): {} files", stats.models);
    println!("  Textures/ (.png, .jpg, etc.): {} files", stats.textures);
    println!("  Icons/ (menu sprites): {} files", stats.icons);
    if stats.organize_skipped > 0 {
        println!(
            "  Copies skipped (destination exists): {}",
            stats.organize_skipped
        );
    }
    println!("\nOutput structure: {}", output.display());
    println!("  - Models/ (FBX model files)");
    println!("  - Textures/ (texture files)");
    println!("  - Icons/ (menu sprites)");
    println!("  - Extracted Unity/ (complete Unity project structure, for reference)");
}

pub fn print_json(stats: &Stats) -> Result<()> {
    let s = serde_json::to_string_pretty(stats)
        .map_err(|e| UnipkgError::Format(format!("report encode: {e}")))?;
    println!("{s}");
    Ok(())
}
