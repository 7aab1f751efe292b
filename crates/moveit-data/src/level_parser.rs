//! Parser for the Move-it, Main! level set format.
//!
//! The format is line-oriented and has no blank-line tolerance:
//!
//! ```text
//! <level count>
//! <separator, ignored>
//! <width> <height> <target time> <target moves>
//! <height rows of width characters>
//! ...
//! ```

use moveit_types::{LevelMetadata, LevelRecord};
use winnow::ascii::{dec_uint, space0, space1};
use winnow::combinator::{delimited, preceded};
use winnow::prelude::*;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelParseError {
    #[error("empty input: expected a level count")]
    MissingLevelCount,
    #[error("line {line}: expected a level count, got: {text:?}")]
    InvalidLevelCount { line: usize, text: String },
    #[error("line {line}: input ended while reading level {level}, expected {expected}")]
    UnexpectedEof {
        line: usize,
        level: usize,
        expected: &'static str,
    },
    #[error("line {line}: {msg}")]
    InvalidMetadata { line: usize, msg: String },
    #[error("line {line}: level is {width}x{height}, both dimensions must be at least 1")]
    EmptyDimension {
        line: usize,
        width: usize,
        height: usize,
    },
    #[error("line {line}: row is {found} characters wide, expected {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

const MAX_RESERVE: usize = 1024;

/// Cursor over input lines that remembers 1-based line numbers.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let text = self.lines.next()?;
        self.line += 1;
        Some((self.line, text))
    }

    fn expect(
        &mut self,
        level: usize,
        expected: &'static str,
    ) -> Result<(usize, &'a str), LevelParseError> {
        self.next_line().ok_or(LevelParseError::UnexpectedEof {
            line: self.line + 1,
            level,
            expected,
        })
    }

    fn remaining(self) -> usize {
        self.lines.count()
    }
}

/// Parse a whole level set, preserving source order.
///
/// Every structural expectation (line counts, integer fields, row widths) is
/// checked; the first violation is returned and no records are kept.
pub fn parse_levels(input: &str) -> Result<Vec<LevelRecord>, LevelParseError> {
    let mut cursor = LineCursor::new(input);

    let (line, count_text) = cursor
        .next_line()
        .ok_or(LevelParseError::MissingLevelCount)?;
    let count_text = count_text.trim();
    let count: usize = count_text
        .parse()
        .map_err(|_| LevelParseError::InvalidLevelCount {
            line,
            text: count_text.to_string(),
        })?;
    log::debug!("level set declares {count} levels");

    // Counts and heights are untrusted; don't let them drive huge allocations.
    let mut levels = Vec::with_capacity(count.min(MAX_RESERVE));
    for level in 1..=count {
        cursor.expect(level, "a separator line")?;
        let (line, text) = cursor.expect(level, "a metadata line")?;
        let metadata = parse_metadata(text, line)?;

        let mut grid = Vec::with_capacity(metadata.height.min(MAX_RESERVE));
        for _ in 0..metadata.height {
            let (line, text) = cursor.expect(level, "a grid row")?;
            let row: Vec<char> = text.trim_end().chars().collect();
            if row.len() != metadata.width {
                return Err(LevelParseError::RowWidth {
                    line,
                    expected: metadata.width,
                    found: row.len(),
                });
            }
            grid.push(row);
        }
        levels.push(LevelRecord::new(metadata, grid));
    }

    let trailing = cursor.remaining();
    if trailing > 0 {
        log::debug!("ignoring {trailing} lines after level {count}");
    }

    Ok(levels)
}

/// `width height target_time target_moves`, whitespace separated.
fn metadata_fields(input: &mut &str) -> ModalResult<LevelMetadata> {
    let (width, height, target_time, target_moves) = delimited(
        space0,
        (
            dec_uint,
            preceded(space1, dec_uint),
            preceded(space1, dec_uint),
            preceded(space1, dec_uint),
        ),
        space0,
    )
    .parse_next(input)?;
    Ok(LevelMetadata::new(width, height, target_time, target_moves))
}

fn parse_metadata(text: &str, line: usize) -> Result<LevelMetadata, LevelParseError> {
    let metadata = metadata_fields
        .parse(text)
        .map_err(|e| LevelParseError::InvalidMetadata {
            line,
            msg: format!(
                "expected `width height time moves`, got {text:?} (column {})",
                e.offset() + 1
            ),
        })?;
    if metadata.width == 0 || metadata.height == 0 {
        return Err(LevelParseError::EmptyDimension {
            line,
            width: metadata.width,
            height: metadata.height,
        });
    }
    Ok(metadata)
}
