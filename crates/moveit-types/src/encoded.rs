use std::fmt;

use serde::Serialize;

use crate::LevelMetadata;

/// A level ready for the output table: metadata plus the autotiled grid
/// flattened row-major into a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedLevel {
    pub metadata: LevelMetadata,
    pub tiles: String,
}

impl EncodedLevel {
    pub fn new(metadata: LevelMetadata, tiles: String) -> Self {
        Self { metadata, tiles }
    }
}

/// Formats as the Lua literal `{w,h,t,m,"tiles"}`.
impl fmt::Display for EncodedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metadata;
        write!(
            f,
            "{{{},{},{},{},\"{}\"}}",
            m.width, m.height, m.target_time, m.target_moves, self.tiles
        )
    }
}

/// Result of encoding one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LevelOutcome {
    Included(EncodedLevel),
    /// Too large for the runtime's screen; left out of the table.
    Omitted,
}

impl LevelOutcome {
    pub fn into_included(self) -> Option<EncodedLevel> {
        match self {
            Self::Included(level) => Some(level),
            Self::Omitted => None,
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_literal() {
        let level = EncodedLevel::new(LevelMetadata::new(3, 1, 10, 5), "a.@".into());
        assert_eq!(level.to_string(), "{3,1,10,5,\"a.@\"}");
    }

    #[test]
    fn empty_tiles_are_still_included() {
        let outcome = LevelOutcome::Included(EncodedLevel::new(
            LevelMetadata::new(0, 0, 0, 0),
            String::new(),
        ));
        assert!(!outcome.is_omitted());
        assert_eq!(outcome.into_included().map(|l| l.tiles), Some(String::new()));
        assert!(LevelOutcome::Omitted.into_included().is_none());
    }
}
