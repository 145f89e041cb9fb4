use crate::core::RecipeResult;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming hashes.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file as 64 lowercase hex characters.
///
/// The file is read in fixed-size chunks so arbitrarily large artifacts
/// never have to fit in memory.
pub fn sha256_file(path: &Path) -> RecipeResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
