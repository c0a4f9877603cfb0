use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use vip8_core::{MAX_ROM_SIZE, RomTooLarge};

#[derive(Debug, Error)]
pub enum RomError {
    #[error("could not read rom {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    TooLarge(#[from] RomTooLarge),
}

/// Reads a rom from disk, refusing anything that would not fit in ram.
/// Checked up front so a bad file never disturbs the running program
pub fn read_rom(path: &Path) -> Result<Vec<u8>, RomError> {
    let bytes = fs::read(path).map_err(|source| RomError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() > MAX_ROM_SIZE {
        return Err(RomTooLarge {
            size: bytes.len(),
            max_size: MAX_ROM_SIZE,
        }
        .into());
    }
    Ok(bytes)
}
