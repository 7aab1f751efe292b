//! Wall autotiling.
//!
//! Each wall cell is replaced by one of sixteen tile symbols chosen from
//! which of its four orthogonal neighbors are also walls. Everything that
//! isn't a wall is copied through untouched.

use moveit_types::{EncodedLevel, LevelMetadata, LevelOutcome, LevelRecord, Neighbors, WallTile};

/// Wall marker in Move-it level sets.
pub const DEFAULT_WALL: char = '#';
/// Largest level the TIC-80 screen can show, in cells.
pub const MAX_WIDTH: usize = 20;
pub const MAX_HEIGHT: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub wall: char,
    pub max_width: usize,
    pub max_height: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            wall: DEFAULT_WALL,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Autotiler {
    options: EncodeOptions,
}

impl Autotiler {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Whether a level of this size goes into the table at all.
    pub fn fits(&self, metadata: &LevelMetadata) -> bool {
        metadata.width <= self.options.max_width && metadata.height <= self.options.max_height
    }

    /// Encode one level, or omit it if it is larger than the size limit.
    pub fn encode_level(&self, record: &LevelRecord) -> LevelOutcome {
        if !self.fits(&record.metadata) {
            log::debug!(
                "{}x{} level exceeds {}x{}",
                record.width(),
                record.height(),
                self.options.max_width,
                self.options.max_height
            );
            return LevelOutcome::Omitted;
        }
        LevelOutcome::Included(EncodedLevel::new(
            record.metadata,
            encode_grid(record, self.options.wall),
        ))
    }
}

/// Flatten the grid row-major, replacing each wall with its tile symbol.
pub fn encode_grid(record: &LevelRecord, wall: char) -> String {
    let mut tiles = String::with_capacity(record.grid.iter().map(Vec::len).sum());
    for (row, cells) in record.grid.iter().enumerate() {
        for (col, &c) in cells.iter().enumerate() {
            if c == wall {
                let neighbors = neighbors_at(record, row, col, wall);
                tiles.push(WallTile::from_neighbors(neighbors).symbol());
            } else {
                tiles.push(c);
            }
        }
    }
    tiles
}

/// Adjacency mask for the cell at `(row, col)`. Cells outside the grid
/// count as non-wall.
pub fn neighbors_at(record: &LevelRecord, row: usize, col: usize, wall: char) -> Neighbors {
    let is_wall = |r: Option<usize>, c: Option<usize>| match (r, c) {
        (Some(r), Some(c)) => record.cell(r, c) == Some(wall),
        _ => false,
    };
    Neighbors::from_flags(
        is_wall(row.checked_sub(1), Some(col)),
        is_wall(row.checked_add(1), Some(col)),
        is_wall(Some(row), col.checked_sub(1)),
        is_wall(Some(row), col.checked_add(1)),
    )
}
