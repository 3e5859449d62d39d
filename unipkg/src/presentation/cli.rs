use clap::Parser;
use std::path::PathBuf;
use unipkg_core::Policy;

#[derive(Parser, Debug)]
#[command(author, version, about = "Unpack a .unitypackage and sort its models, textures and icons", long_about = None)]
pub struct Cli {
    /// The .unitypackage file to unpack
    pub package: PathBuf,

    /// Overwrite existing files (default: skip existing files)
    #[arg(long)]
    pub overwrite: bool,

    /// Only extract raw usable files (FBX, PNG, JPG, ...), skip Unity internal files
    #[arg(long = "raw-only")]
    pub raw_only: bool,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn policy(&self) -> Policy {
        Policy {
            overwrite: self.overwrite,
            raw_only: self.raw_only,
        }
    }
}
