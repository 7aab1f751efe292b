use moveit_types::LevelOutcome;

use crate::autotile::{Autotiler, EncodeOptions};
use crate::level_parser::{LevelParseError, parse_levels};
use crate::table::render_table;

/// A rendered level table plus what was left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub table: String,
    pub included: usize,
    /// 0-based source positions of levels dropped for size.
    pub omitted: Vec<usize>,
}

impl Conversion {
    /// Number of levels read from the input.
    pub fn parsed(&self) -> usize {
        self.included + self.omitted.len()
    }
}

/// Parse a level set, autotile every level that fits and render the table.
///
/// Omitted levels leave no placeholder, so levels after them shift down in
/// the output table.
pub fn convert_levels(input: &str, options: &EncodeOptions) -> Result<Conversion, LevelParseError> {
    let records = parse_levels(input)?;
    let tiler = Autotiler::new(*options);

    let mut levels = Vec::with_capacity(records.len());
    let mut omitted = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match tiler.encode_level(record) {
            LevelOutcome::Included(level) => levels.push(level),
            LevelOutcome::Omitted => {
                log::info!(
                    "omitting level {} ({}x{}): larger than {}x{}",
                    index + 1,
                    record.width(),
                    record.height(),
                    options.max_width,
                    options.max_height
                );
                omitted.push(index);
            }
        }
    }

    Ok(Conversion {
        table: render_table(&levels),
        included: levels.len(),
        omitted,
    })
}
