use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{info, warn};

use crate::error::Result;
use crate::util::sanitize::safe_join;

const PROGRESS_EVERY: u64 = 100;

/// Decompress a `.unitypackage` into `scratch`, regular files only.
/// Returns the number of files written.
pub fn unpack(package: &Path, scratch: &Path) -> Result<u64> {
    let f = File::open(package)?;
    unpack_from(BufReader::with_capacity(0x10000, f), scratch)
}

pub fn unpack_from<R: Read>(src: R, scratch: &Path) -> Result<u64> {
    fs::create_dir_all(scratch)?;
    let mut tar = Archive::new(GzDecoder::new(src));
    let mut written = 0u64;

    for entry in tar.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path()?.to_string_lossy().into_owned();
        let Some(outp) = safe_join(scratch, &name) else {
            warn!(entry = %name, "skipping archive entry with unsafe path");
            continue;
        };
        if let Some(parent) = outp.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&outp)?;
        io::copy(&mut entry, &mut out)?;

        written += 1;
        if written % PROGRESS_EVERY == 0 {
            info!("unpacked {written} files from package");
        }
    }
    Ok(written)
}
