pub mod encoded;
pub mod level;
pub mod neighbors;
pub mod wall_tile;

pub use encoded::{EncodedLevel, LevelOutcome};
pub use level::{LevelMetadata, LevelRecord};
pub use neighbors::Neighbors;
pub use wall_tile::WallTile;
