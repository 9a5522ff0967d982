mod common;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod parser;
pub mod render;
pub mod tables;

pub use crate::common::types::*;
pub use crate::common::unicode;
pub use crate::config::{GeneratorConfig, OutputFormat};
pub use crate::error::{GenError, RecordDefect};
pub use crate::generator::{CaseMapGenerator, GenerationSummary};
pub use crate::tables::{CaseTable, CaseTables};
