use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use qccalc_core::Entry;

const DEFAULT_DIR_NAME: &str = ".qccalc";
const DEFAULT_FILE_NAME: &str = "entries.json";

/// `~/.qccalc/entries.json`
pub fn default_entries_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME))
}

/// Reads a JSON array of entries.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(anyhow!("Entries file not found: {}", path.display()));
    }
    let file = File::open(path)
        .with_context(|| format!("Could not open {}", path.display()))?;
    let reader = BufReader::new(file);
    let entries: Vec<Entry> = serde_json::from_reader(reader)
        .with_context(|| format!("Could not parse entries in {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded entries");
    Ok(entries)
}
