use std::fmt::{self, Write};

use super::{disclaimer, Renderer, LOWER_TO_UPPER_ACCESSOR, UPPER_TO_LOWER_ACCESSOR};
use crate::common::unicode::hex_literal;
use crate::tables::{CaseTable, CaseTables};

/// Emits a Rust module with one lazily built `HashMap` per direction.
#[derive(Debug, Clone)]
pub struct RustRenderer {
    pub generator_name: String,
}

impl RustRenderer {
    pub fn new(generator_name: impl Into<String>) -> Self {
        Self {
            generator_name: generator_name.into(),
        }
    }

    fn render_accessor(&self, out: &mut String, name: &str, table: &CaseTable) -> fmt::Result {
        writeln!(out, "pub fn {name}() -> &'static HashMap<u32, u32> {{")?;
        writeln!(out, "    static MAP: OnceLock<HashMap<u32, u32>> = OnceLock::new();")?;
        writeln!(out, "    MAP.get_or_init(|| {{")?;
        writeln!(out, "        HashMap::from([")?;
        for (from, to) in table.spelled() {
            writeln!(
                out,
                "            ({}, {}),",
                hex_literal(from),
                hex_literal(to)
            )?;
        }
        writeln!(out, "        ])")?;
        writeln!(out, "    }})")?;
        writeln!(out, "}}")
    }
}

impl Renderer for RustRenderer {
    fn render(&self, tables: &CaseTables, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", disclaimer(&self.generator_name))?;
        writeln!(out)?;
        writeln!(out, "use std::collections::HashMap;")?;
        writeln!(out, "use std::sync::OnceLock;")?;
        writeln!(out)?;
        self.render_accessor(out, LOWER_TO_UPPER_ACCESSOR, &tables.lower_to_upper)?;
        writeln!(out)?;
        self.render_accessor(out, UPPER_TO_LOWER_ACCESSOR, &tables.upper_to_lower)
    }
}
