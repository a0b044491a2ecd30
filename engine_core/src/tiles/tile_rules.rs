// engine_core/src/tiles/tile_rules.rs
use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::tiles::autotile::AutotileTable;

/// Static tile category configuration.
///
/// Built once at startup (or read from the rules .ron) and passed by
/// reference to the queries that need it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileRules {
    /// Categories that block movement.
    pub solid_types: BTreeSet<String>,
    /// Categories whose variant is derived from their neighbours.
    pub autotile_types: BTreeSet<String>,
    pub autotile_table: AutotileTable,
}

impl TileRules {
    pub fn is_solid(&self, tile_type: &str) -> bool {
        self.solid_types.contains(tile_type)
    }

    pub fn is_autotiled(&self, tile_type: &str) -> bool {
        self.autotile_types.contains(tile_type)
    }
}

impl Default for TileRules {
    fn default() -> Self {
        let terrain: BTreeSet<String> = ["grass", "stone"].into_iter().map(String::from).collect();
        Self {
            solid_types: terrain.clone(),
            autotile_types: terrain,
            autotile_table: AutotileTable::default(),
        }
    }
}
