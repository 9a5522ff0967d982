use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::types::{CodePoint, HexField, UnicodeRecord};
use crate::common::unicode::{
    parse_code_point, FIELD_CODE_POINT, FIELD_SEPARATOR, FIELD_SIMPLE_LOWERCASE,
    FIELD_SIMPLE_UPPERCASE, MIN_FIELDS,
};
use crate::error::{GenError, RecordDefect, Result};
use crate::tables::CaseTables;

type LineResult<T> = std::result::Result<T, RecordDefect>;

/// Tables built from one input plus how many records fed them.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub tables: CaseTables,
    pub records: usize,
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str, line_no: usize) -> LineResult<Option<UnicodeRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(RecordDefect::TooFewFields {
            found: fields.len(),
            expected: MIN_FIELDS,
        });
    }

    let code_point = required_field(&fields, FIELD_CODE_POINT)?;
    let simple_uppercase = optional_field(&fields, FIELD_SIMPLE_UPPERCASE)?;
    let simple_lowercase = optional_field(&fields, FIELD_SIMPLE_LOWERCASE)?;

    Ok(Some(UnicodeRecord {
        line: line_no,
        code_point,
        simple_uppercase,
        simple_lowercase,
    }))
}

fn required_field(fields: &[&str], index: usize) -> LineResult<HexField> {
    let text = fields[index];
    match parse_code_point(text) {
        Some(value) => Ok(HexField {
            value,
            text: text.to_string(),
        }),
        None => Err(RecordDefect::InvalidHex {
            field: index,
            text: text.to_string(),
        }),
    }
}

fn optional_field(fields: &[&str], index: usize) -> LineResult<Option<HexField>> {
    if fields[index].is_empty() {
        return Ok(None);
    }
    required_field(fields, index).map(Some)
}

/// Reads UnicodeData.txt formatted text. `path` is only used in diagnostics.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<ParsedInput> {
    let mut parsed = ParsedInput::default();
    let mut seen: HashMap<CodePoint, usize> = HashMap::new();
    let mut blank = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| GenError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let malformed = |defect: RecordDefect| GenError::MalformedRecord {
            path: path.to_path_buf(),
            line: line_no,
            defect,
        };

        let Some(record) = parse_line(&line, line_no).map_err(malformed)? else {
            blank += 1;
            continue;
        };
        let code_point = record.code_point.value;
        if let Some(&first_line) = seen.get(&code_point) {
            return Err(malformed(RecordDefect::DuplicateCodePoint {
                code_point,
                first_line,
            }));
        }
        seen.insert(code_point, line_no);

        parsed.tables.add(&record);
        parsed.records += 1;
    }

    log::debug!(
        "{}: {} records, {} blank lines skipped",
        path.display(),
        parsed.records,
        blank
    );
    Ok(parsed)
}

pub fn parse_file(path: &Path) -> Result<ParsedInput> {
    let file = File::open(path).map_err(|source| GenError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}

pub fn parse_str(text: &str) -> Result<ParsedInput> {
    parse_reader(text.as_bytes(), Path::new("<memory>"))
}
