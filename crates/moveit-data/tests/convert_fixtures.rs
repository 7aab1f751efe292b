//! End-to-end conversion of the level set fixtures in `tests/fixtures`.

use moveit_data::{EncodeOptions, convert_levels, parse_levels};
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    let path = Path::new(FIXTURES_DIR).join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("read {}", path.display()))
}

#[test]
fn level_set_converts_to_expected_table() {
    let input = fixture("levels.txt");
    let conv = convert_levels(&input, &EncodeOptions::default()).expect("convert levels.txt");
    assert_eq!(conv.table, fixture("levels.lua"));
}

#[test]
fn oversized_level_is_the_only_one_missing() {
    let input = fixture("levels.txt");
    let records = parse_levels(&input).expect("parse levels.txt");
    assert_eq!(records.len(), 4);

    let conv = convert_levels(&input, &EncodeOptions::default()).expect("convert levels.txt");
    assert_eq!(conv.omitted, vec![1]);
    assert_eq!(conv.included, records.len() - 1);
    assert_eq!(conv.table.lines().filter(|l| l.starts_with("  {")).count(), 3);
}

#[test]
fn output_rows_have_width_times_height_tiles() {
    let input = fixture("levels.txt");
    let conv = convert_levels(&input, &EncodeOptions::default()).expect("convert levels.txt");
    for line in conv.table.lines().filter(|l| l.starts_with("  {")) {
        let body = line.trim().trim_start_matches('{').trim_end_matches("},");
        let mut fields = body.splitn(5, ',');
        let w: usize = fields.next().unwrap().parse().unwrap();
        let h: usize = fields.next().unwrap().parse().unwrap();
        let tiles = fields.nth(2).unwrap().trim_matches('"');
        assert_eq!(tiles.chars().count(), w * h, "{line}");
    }
}

#[test]
fn raising_the_limit_keeps_every_level() {
    let input = fixture("levels.txt");
    let options = EncodeOptions {
        max_width: 21,
        ..EncodeOptions::default()
    };
    let conv = convert_levels(&input, &options).expect("convert levels.txt");
    assert!(conv.omitted.is_empty());
    assert!(conv.table.contains("{21,1,99,99,\".....................\"},"));
}
