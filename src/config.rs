use std::path::{Path, PathBuf};

use crate::common::types::LogLevel;
use crate::error::{GenError, Result};
use crate::render::{CppRenderer, Renderer, RustRenderer};

pub const ENV_INPUT: &str = "CASEMAP_INPUT";
pub const ENV_OUTPUT: &str = "CASEMAP_OUTPUT";
pub const ENV_FORMAT: &str = "CASEMAP_FORMAT";
pub const ENV_LOG: &str = "CASEMAP_LOG";

const DEFAULT_INPUT: &str = "data/UnicodeData.txt";
const DEFAULT_OUTPUT: &str = "core/vca/case_mappings.cpp";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Cpp,
    Rust,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" => Some(Self::Cpp),
            "rust" | "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    pub fn for_output(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("rs") => Self::Rust,
            _ => Self::Cpp,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub generator_name: String,
    pub log_level: LogLevel,
}

impl Default for GeneratorConfig {
    /// Paths are fixed relative to this crate's own directory.
    fn default() -> Self {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self {
            input: root.join(DEFAULT_INPUT),
            output: root.join(DEFAULT_OUTPUT),
            format: OutputFormat::Cpp,
            generator_name: env!("CARGO_PKG_NAME").to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        Self {
            input: input.into(),
            format: OutputFormat::for_output(&output),
            output,
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(input) = lookup(ENV_INPUT) {
            config.input = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = PathBuf::from(output);
        }
        config.format = match lookup(ENV_FORMAT) {
            Some(name) => OutputFormat::from_name(&name)
                .ok_or_else(|| GenError::Config(format!("{ENV_FORMAT}: unknown format {name:?}")))?,
            None => OutputFormat::for_output(&config.output),
        };
        if let Some(name) = lookup(ENV_LOG) {
            config.log_level = LogLevel::from_name(&name)
                .ok_or_else(|| GenError::Config(format!("{ENV_LOG}: unknown level {name:?}")))?;
        }
        Ok(config)
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self.format {
            OutputFormat::Cpp => Box::new(CppRenderer::new(self.generator_name.clone())),
            OutputFormat::Rust => Box::new(RustRenderer::new(self.generator_name.clone())),
        }
    }
}
