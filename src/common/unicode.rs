// UnicodeData.txt layout, see https://www.unicode.org/reports/tr44/#UnicodeData.txt
// Only the code point and the two simple case mapping fields are consumed.

use super::types::CodePoint;

pub const FIELD_SEPARATOR: char = ';';
pub const FIELD_CODE_POINT: usize = 0;
pub const FIELD_SIMPLE_UPPERCASE: usize = 12;
pub const FIELD_SIMPLE_LOWERCASE: usize = 13;
pub const MIN_FIELDS: usize = FIELD_SIMPLE_LOWERCASE + 1;

const MAX_HEX_DIGITS: usize = 8;

/// Parses bare hex (no `0x`, no sign) into a code point.
pub fn parse_code_point(text: &str) -> Option<CodePoint> {
    if text.is_empty() || text.len() > MAX_HEX_DIGITS {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}

/// Prefixes source hex text for emission; the digits are kept as written.
pub fn hex_literal(text: &str) -> String {
    format!("0x{text}")
}
