// engine_core/src/tiles/autotile.rs
use std::collections::BTreeMap;
use glam::IVec2;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::tiles::{grid_pos::GridPos, tile_rules::TileRules, tilemap::TileMap};

/// Cardinal direction to a neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Cell offset for this direction. Y grows downwards.
    pub const fn offset(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Up => 0b0100,
            Direction::Down => 0b1000,
        }
    }
}

/// Set of cardinal directions that hold a same-type neighbour.
///
/// Stored as a bitmask, so two sets built from the same directions in any
/// order compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Adjacency(u8);

impl Adjacency {
    pub fn from_directions<I: IntoIterator<Item = Direction>>(directions: I) -> Self {
        let mut adjacency = Adjacency::default();
        for direction in directions {
            adjacency.insert(direction);
        }
        adjacency
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Directions in the set, in canonical order.
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.contains(*direction))
            .collect()
    }
}

/// One table entry as it appears in the rules file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutotileRule {
    pub neighbors: Vec<Direction>,
    pub variant: usize,
}

/// Lookup from a neighbour set to the variant drawn for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AutotileRule>", into = "Vec<AutotileRule>")]
pub struct AutotileTable {
    entries: BTreeMap<Adjacency, usize>,
}

impl AutotileTable {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Adds or replaces the variant for a neighbour set.
    pub fn insert(&mut self, adjacency: Adjacency, variant: usize) {
        self.entries.insert(adjacency, variant);
    }

    /// Returns `None` when the set has no entry.
    pub fn variant_for(&self, adjacency: Adjacency) -> Option<usize> {
        self.entries.get(&adjacency).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AutotileTable {
    /// Edge and corner pieces of a nine-slice tileset.
    fn default() -> Self {
        use Direction::*;

        let mut table = AutotileTable::new();
        table.insert(Adjacency::from_directions([Right, Down]), 0);
        table.insert(Adjacency::from_directions([Right, Down, Left]), 1);
        table.insert(Adjacency::from_directions([Left, Down]), 2);
        table.insert(Adjacency::from_directions([Left, Up, Down]), 3);
        table.insert(Adjacency::from_directions([Left, Up]), 4);
        table.insert(Adjacency::from_directions([Left, Up, Right]), 5);
        table.insert(Adjacency::from_directions([Right, Up]), 6);
        table.insert(Adjacency::from_directions([Right, Up, Down]), 7);
        table.insert(Adjacency::from_directions([Right, Left, Down, Up]), 8);
        table
    }
}

impl From<Vec<AutotileRule>> for AutotileTable {
    // Later rules for the same neighbour set win.
    fn from(rules: Vec<AutotileRule>) -> Self {
        let mut table = AutotileTable::new();
        for rule in rules {
            table.insert(Adjacency::from_directions(rule.neighbors), rule.variant);
        }
        table
    }
}

impl From<AutotileTable> for Vec<AutotileRule> {
    fn from(table: AutotileTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(adjacency, variant)| AutotileRule {
                neighbors: adjacency.directions(),
                variant,
            })
            .collect()
    }
}

impl TileMap {
    /// Directions around `pos` that hold a tile of `tile_type`.
    pub fn same_type_neighbors(&self, pos: GridPos, tile_type: &str) -> Adjacency {
        Adjacency::from_directions(Direction::ALL.into_iter().filter(|direction| {
            self.get_tile(pos.offset(direction.offset()))
                .is_some_and(|neighbor| neighbor.tile_type == tile_type)
        }))
    }

    /// Re-derive the variant of every autotiled grid tile from its neighbours.
    ///
    /// Tiles whose neighbour set has no table entry keep their variant.
    /// Returns the number of tiles whose variant changed.
    pub fn autotile(&mut self, rules: &TileRules) -> usize {
        if rules.autotile_table.is_empty() {
            debug!("Autotile table is empty, skipping pass.");
            return 0;
        }

        let updates: Vec<(GridPos, usize)> = self
            .tiles
            .iter()
            .filter(|(_, tile)| rules.is_autotiled(&tile.tile_type))
            .filter_map(|(pos, tile)| {
                let adjacency = self.same_type_neighbors(*pos, &tile.tile_type);
                let variant = rules.autotile_table.variant_for(adjacency)?;
                (variant != tile.variant).then_some((*pos, variant))
            })
            .collect();

        for (pos, variant) in &updates {
            if let Some(tile) = self.tiles.get_mut(pos) {
                tile.variant = *variant;
            }
        }

        debug!("Autotile pass changed {} tile variant(s).", updates.len());
        updates.len()
    }
}
