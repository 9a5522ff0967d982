use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::parser::{self, ParsedInput};
use crate::render::Renderer;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationSummary {
    pub records: usize,
    pub lower_to_upper: usize,
    pub upper_to_lower: usize,
}

impl GenerationSummary {
    fn from_parsed(parsed: &ParsedInput) -> Self {
        Self {
            records: parsed.records,
            lower_to_upper: parsed.tables.lower_to_upper.len(),
            upper_to_lower: parsed.tables.upper_to_lower.len(),
        }
    }
}

pub struct CaseMapGenerator {
    config: GeneratorConfig,
}

impl CaseMapGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Parses the input, renders it and replaces the output file. Nothing is
    /// written unless every step before the final rename succeeded.
    pub fn run(&self) -> Result<GenerationSummary> {
        let parsed = parser::parse_file(&self.config.input)?;
        let summary = GenerationSummary::from_parsed(&parsed);
        log::debug!(
            "lower_to_upper: {} entries, upper_to_lower: {} entries",
            summary.lower_to_upper,
            summary.upper_to_lower
        );

        let text = self.config.renderer().render_to_string(&parsed.tables)?;
        write_atomic(&self.config.output, text.as_bytes())?;

        log::info!(
            "wrote {} ({} records, {} lower->upper, {} upper->lower)",
            self.config.output.display(),
            summary.records,
            summary.lower_to_upper,
            summary.upper_to_lower
        );
        Ok(summary)
    }

    /// Renders without touching the filesystem.
    pub fn render_with(renderer: &dyn Renderer, input: &str) -> Result<String> {
        let parsed = parser::parse_str(input)?;
        Ok(renderer.render_to_string(&parsed.tables)?)
    }
}

/// Writes `bytes` to a sibling temp file and renames it over `path`. The temp
/// file is removed on any failure, so `path` is either the old file or the
/// complete new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let fail = |source: std::io::Error| GenError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|err| fail(err.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
