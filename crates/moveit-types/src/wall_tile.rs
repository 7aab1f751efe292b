use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

use crate::Neighbors;

/// Autotile variants for wall cells, written to the level table as `a`..`p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum WallTile {
    /// No wall neighbors.
    Isolated = 0,
    /// Down only.
    CapTop = 1,
    /// Right only.
    CapLeft = 2,
    /// Up only.
    CapBottom = 3,
    /// Left only.
    CapRight = 4,
    /// Up and left.
    CornerBottomRight = 5,
    /// Down and left.
    CornerTopRight = 6,
    /// Down and right.
    CornerTopLeft = 7,
    /// Up and right.
    CornerBottomLeft = 8,
    /// Left and right.
    Horizontal = 9,
    /// Up and down.
    Vertical = 10,
    /// Up, left and right.
    TeeUp = 11,
    /// Up, down and right.
    TeeRight = 12,
    /// Down, left and right.
    TeeDown = 13,
    /// Up, down and left.
    TeeLeft = 14,
    /// All four.
    Cross = 15,
}

/// Tile for each adjacency mask, indexed by [`Neighbors::index`].
const BY_MASK: [WallTile; Neighbors::COMBINATIONS] = [
    WallTile::Isolated,          // ----
    WallTile::CapLeft,           // ---R
    WallTile::CapRight,          // --L-
    WallTile::Horizontal,        // --LR
    WallTile::CapTop,            // -D--
    WallTile::CornerTopLeft,     // -D-R
    WallTile::CornerTopRight,    // -DL-
    WallTile::TeeDown,           // -DLR
    WallTile::CapBottom,         // U---
    WallTile::CornerBottomLeft,  // U--R
    WallTile::CornerBottomRight, // U-L-
    WallTile::TeeUp,             // U-LR
    WallTile::Vertical,          // UD--
    WallTile::TeeRight,          // UD-R
    WallTile::TeeLeft,           // UDL-
    WallTile::Cross,             // UDLR
];

impl WallTile {
    pub const fn from_neighbors(neighbors: Neighbors) -> Self {
        BY_MASK[neighbors.index()]
    }

    /// The character used for this tile in the output table.
    pub const fn symbol(self) -> char {
        (b'a' + self as u8) as char
    }
}
