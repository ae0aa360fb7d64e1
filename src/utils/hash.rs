use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use sha2::{Sha256, Digest};

use crate::constants::HASH_BUFFER_SIZE;

/// Calculate the SHA-256 digest of a file as lowercase hex.
pub fn calculate_sha256(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; HASH_BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
