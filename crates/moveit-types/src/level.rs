use serde::Serialize;

/// The four integers heading every level in a Move-it level set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LevelMetadata {
    pub width: usize,
    pub height: usize,
    /// Par time in seconds.
    pub target_time: u32,
    /// Par move count.
    pub target_moves: u32,
}

impl LevelMetadata {
    pub const fn new(width: usize, height: usize, target_time: u32, target_moves: u32) -> Self {
        Self {
            width,
            height,
            target_time,
            target_moves,
        }
    }

    /// Number of cells in the grid, saturating at `usize::MAX`.
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// One parsed level: metadata plus a `height` x `width` character grid.
///
/// The level parser guarantees `grid.len() == height` and that every row has
/// `width` cells. Records built by hand are not re-checked; lookups outside
/// the grid simply return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelRecord {
    pub metadata: LevelMetadata,
    pub grid: Vec<Vec<char>>,
}

impl LevelRecord {
    pub fn new(metadata: LevelMetadata, grid: Vec<Vec<char>>) -> Self {
        Self { metadata, grid }
    }

    /// Build a record from row strings, deriving width and height from them.
    pub fn from_rows(rows: &[&str], target_time: u32, target_moves: u32) -> Self {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let width = grid.first().map_or(0, Vec::len);
        let metadata = LevelMetadata::new(width, grid.len(), target_time, target_moves);
        Self { metadata, grid }
    }

    pub fn width(&self) -> usize {
        self.metadata.width
    }

    pub fn height(&self) -> usize {
        self.metadata.height
    }

    /// Character at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row)?.get(col).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_derives_dimensions() {
        let rec = LevelRecord::from_rows(&["#.#", "..."], 7, 3);
        assert_eq!(rec.metadata, LevelMetadata::new(3, 2, 7, 3));
        assert_eq!(rec.metadata.area(), 6);
    }

    #[test]
    fn area_saturates() {
        assert_eq!(LevelMetadata::new(usize::MAX, 2, 0, 0).area(), usize::MAX);
    }

    #[test]
    fn cell_lookup() {
        let rec = LevelRecord::from_rows(&["#.", ".@"], 0, 0);
        assert_eq!(rec.cell(0, 0), Some('#'));
        assert_eq!(rec.cell(1, 1), Some('@'));
        assert_eq!(rec.cell(2, 0), None);
        assert_eq!(rec.cell(0, 2), None);
    }
}
