//! Initialize mood journal use case

use crate::error::Result;
use crate::infrastructure::JsonFileStore;
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = JsonFileStore::new(path.to_path_buf());
    store.initialize()?;

    println!("Initialized goodday mood journal at {}", path.display());

    Ok(())
}
