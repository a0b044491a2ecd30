// engine_core/src/storage/rules_config.rs
use std::fs;
use std::path::Path;
use log::{error, info, warn};
use ron::ser::{to_string_pretty, PrettyConfig};
use crate::storage::storage_error::StorageError;
use crate::tiles::tile_rules::TileRules;

/// Saves tile rules as a .ron file, creating parent folders as needed.
pub fn save_tile_rules(path: &Path, rules: &TileRules) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let ron = to_string_pretty(rules, PrettyConfig::default())?;
    fs::write(path, ron).map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

/// Reads tile rules from a .ron file. Missing fields take their defaults.
pub fn load_tile_rules(path: &Path) -> Result<TileRules, StorageError> {
    let txt = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let rules: TileRules = ron::from_str(&txt)?;
    info!(
        "Loaded tile rules '{}': {} solid type(s), {} autotiled type(s).",
        path.display(),
        rules.solid_types.len(),
        rules.autotile_types.len()
    );
    Ok(rules)
}

/// Reads tile rules, falling back to the defaults if the file is absent or broken.
pub fn load_tile_rules_or_default(path: &Path) -> TileRules {
    match load_tile_rules(path) {
        Ok(rules) => rules,
        Err(StorageError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!("No tile rules at '{}', using defaults.", path.display());
            TileRules::default()
        }
        Err(e) => {
            error!("Error loading tile rules: {e}.");
            TileRules::default()
        }
    }
}
