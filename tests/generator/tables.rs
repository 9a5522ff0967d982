use std::path::{Path, PathBuf};

use casemap_gen::parser::{parse_file, parse_str};
use casemap_gen::{CaseMapping, GenError, RecordDefect};

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/UnicodeData.sample.txt")
}

fn pairs(mappings: impl Iterator<Item = CaseMapping>) -> Vec<(u32, u32)> {
    mappings.map(|m| (m.from, m.to)).collect()
}

#[test]
fn sample_tables_follow_field_placement() {
    let parsed = parse_file(&sample_path()).unwrap();
    assert_eq!(parsed.records, 14);

    assert_eq!(
        pairs(parsed.tables.lower_to_upper.iter()),
        vec![
            (0x0061, 0x0041),
            (0x0062, 0x0042),
            (0x0131, 0x0049),
            (0x01C5, 0x01C4),
            (0x01C6, 0x01C4),
            (0x10428, 0x10400),
        ]
    );
    assert_eq!(
        pairs(parsed.tables.upper_to_lower.iter()),
        vec![
            (0x0041, 0x0061),
            (0x0042, 0x0062),
            (0x0130, 0x0069),
            (0x01C4, 0x01C6),
            (0x01C5, 0x01C6),
            (0x1E9E, 0x00DF),
            (0x10400, 0x10428),
        ]
    );
}

#[test]
fn capital_letter_record_only_maps_down() {
    let parsed = parse_str("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n").unwrap();
    assert!(parsed.tables.lower_to_upper.is_empty());
    assert_eq!(pairs(parsed.tables.upper_to_lower.iter()), vec![(0x0041, 0x0061)]);
}

#[test]
fn small_letter_record_only_maps_up() {
    let parsed = parse_str("0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;\n").unwrap();
    assert!(parsed.tables.upper_to_lower.is_empty());
    assert_eq!(pairs(parsed.tables.lower_to_upper.iter()), vec![(0x0061, 0x0041)]);
}

#[test]
fn table_sizes_match_qualifying_records() {
    let text = std::fs::read_to_string(sample_path()).unwrap();
    let with_upper = text
        .lines()
        .filter(|l| l.split(';').nth(12).map_or(false, |f| !f.is_empty()))
        .count();
    let with_lower = text
        .lines()
        .filter(|l| l.split(';').nth(13).map_or(false, |f| !f.is_empty()))
        .count();

    let parsed = parse_str(&text).unwrap();
    assert_eq!(parsed.tables.lower_to_upper.len(), with_upper);
    assert_eq!(parsed.tables.upper_to_lower.len(), with_lower);
}

#[test]
fn identity_mapping_survives() {
    let parsed = parse_str("01F0;X;Ll;0;L;;;;;N;;;01F0;01F0;\n").unwrap();
    assert_eq!(parsed.tables.lower_to_upper.get(0x01F0), Some(0x01F0));
    assert_eq!(parsed.tables.upper_to_lower.get(0x01F0), Some(0x01F0));
}

#[test]
fn five_field_line_is_fatal() {
    let err = parse_str("0041;LATIN CAPITAL LETTER A;Lu;0;L\n").unwrap_err();
    match err {
        GenError::MalformedRecord { line, defect, .. } => {
            assert_eq!(line, 1);
            assert_eq!(defect, RecordDefect::TooFewFields { found: 5, expected: 14 });
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
