use std::io;
use std::path::PathBuf;

use crate::common::types::{CodePoint, GeneratorStatus};

/// What is wrong with a single UnicodeData.txt line.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum RecordDefect {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { found: usize, expected: usize },
    #[error("field {field} is not a hex code point: {text:?}")]
    InvalidHex { field: usize, text: String },
    #[error("code point {code_point:04X} already defined on line {first_line}")]
    DuplicateCodePoint { code_point: CodePoint, first_line: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum GenError {
    #[error("cannot read input {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: malformed record: {defect}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        defect: RecordDefect,
    },
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("rendering failed")]
    Render(#[from] std::fmt::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenError {
    pub fn status(&self) -> GeneratorStatus {
        match self {
            Self::InputNotFound { .. } => GeneratorStatus::InputNotFound,
            Self::MalformedRecord { .. } => GeneratorStatus::MalformedRecord,
            Self::OutputWriteFailure { .. } => GeneratorStatus::OutputWriteFailure,
            Self::Render(_) => GeneratorStatus::RenderFailure,
            Self::Config(_) => GeneratorStatus::InvalidConfig,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
