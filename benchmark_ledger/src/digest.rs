//!
//! The watched files digest.
//!

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha3::Digest;

/// The size of chunks the watched files are streamed in.
pub const CHUNK_SIZE: usize = 64 * 1024;

///
/// Computes the SHA3-256 digest of the files' contents, concatenated in the given order.
///
/// Returns an empty string if no files are given, which disables change detection.
///
pub fn digest<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<String> {
    if paths.is_empty() {
        return Ok(String::new());
    }

    let mut hasher = sha3::Sha3_256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    for path in paths.iter() {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|error| anyhow::anyhow!("Watched file {path:?} opening: {error}"))?;
        loop {
            let size = file
                .read(buffer.as_mut_slice())
                .map_err(|error| anyhow::anyhow!("Watched file {path:?} reading: {error}"))?;
            if size == 0 {
                break;
            }
            hasher.update(&buffer[..size]);
        }
    }
    Ok(hex::encode(hasher.finalize()))
}
