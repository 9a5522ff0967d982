use std::fmt::{self, Write};

use super::{disclaimer, Renderer, LOWER_TO_UPPER_ACCESSOR, UPPER_TO_LOWER_ACCESSOR};
use crate::common::unicode::hex_literal;
use crate::tables::{CaseTable, CaseTables};

pub const DEFAULT_HEADER: &str = "case_mappings.h";
pub const DEFAULT_NAMESPACE: &str = "vca";
const MAP_TYPE: &str = "std::unordered_map<Char, Char>";

/// Emits a C++ translation unit defining both accessors declared in the
/// companion header.
#[derive(Debug, Clone)]
pub struct CppRenderer {
    pub generator_name: String,
    pub header: String,
    pub namespace: String,
}

impl CppRenderer {
    pub fn new(generator_name: impl Into<String>) -> Self {
        Self {
            generator_name: generator_name.into(),
            header: DEFAULT_HEADER.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    fn render_accessor(&self, out: &mut String, name: &str, table: &CaseTable) -> fmt::Result {
        writeln!(out, "const {MAP_TYPE}&")?;
        writeln!(out, "{name}()")?;
        writeln!(out, "{{")?;
        writeln!(out, "    static const {MAP_TYPE} map{{")?;
        for (from, to) in table.spelled() {
            writeln!(
                out,
                "        {{{}, {}}},",
                hex_literal(from),
                hex_literal(to)
            )?;
        }
        writeln!(out, "    }};")?;
        writeln!(out, "    return map;")?;
        writeln!(out, "}}")
    }
}

impl Renderer for CppRenderer {
    fn render(&self, tables: &CaseTables, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", disclaimer(&self.generator_name))?;
        writeln!(out, "#include \"{}\"", self.header)?;
        writeln!(out)?;
        writeln!(out, "namespace {}", self.namespace)?;
        writeln!(out, "{{")?;
        writeln!(out)?;
        self.render_accessor(out, LOWER_TO_UPPER_ACCESSOR, &tables.lower_to_upper)?;
        writeln!(out)?;
        self.render_accessor(out, UPPER_TO_LOWER_ACCESSOR, &tables.upper_to_lower)?;
        writeln!(out)?;
        writeln!(out, "}} // namespace {}", self.namespace)
    }
}
