//! Lua table output.

use moveit_types::EncodedLevel;

const OPEN: &str = "{\n";
const INDENT: &str = "  ";
const CLOSE: char = '}';

/// Render levels as a Lua table literal, one level per line.
///
/// ```text
/// {
///   {w,h,t,m,"..."},
/// }
/// ```
pub fn render_table(levels: &[EncodedLevel]) -> String {
    let mut out = String::from(OPEN);
    for level in levels {
        out.push_str(INDENT);
        out.push_str(&level.to_string());
        out.push_str(",\n");
    }
    out.push(CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use moveit_types::LevelMetadata;

    fn level(w: usize, tiles: &str) -> EncodedLevel {
        EncodedLevel::new(LevelMetadata::new(w, 1, 30, 12), tiles.into())
    }

    #[test]
    fn empty_table() {
        assert_eq!(render_table(&[]), "{\n}");
    }

    #[test]
    fn levels_in_order() {
        let table = render_table(&[level(2, "ce"), level(1, "@")]);
        assert_eq!(table, "{\n  {2,1,30,12,\"ce\"},\n  {1,1,30,12,\"@\"},\n}");
    }
}
