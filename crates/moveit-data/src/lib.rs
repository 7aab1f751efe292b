pub mod autotile;
pub mod cart_script;
pub mod convert;
pub mod level_parser;
pub mod table;

pub use autotile::{Autotiler, EncodeOptions};
pub use convert::{Conversion, convert_levels};
pub use level_parser::{LevelParseError, parse_levels};
