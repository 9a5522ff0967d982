//! Turns parsed case tables into source text.
//!
//! Rendering never touches the filesystem; the generator writes whatever a
//! [`Renderer`] produced. Output is a pure function of the tables, so the same
//! input always yields the same bytes.

use std::fmt;

use crate::tables::CaseTables;

mod cpp;
mod rust;

pub use cpp::CppRenderer;
pub use rust::RustRenderer;

pub const LOWER_TO_UPPER_ACCESSOR: &str = "lower_to_upper_map";
pub const UPPER_TO_LOWER_ACCESSOR: &str = "upper_to_lower_map";

pub trait Renderer {
    fn render(&self, tables: &CaseTables, out: &mut String) -> fmt::Result;

    fn render_to_string(&self, tables: &CaseTables) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render(tables, &mut out)?;
        Ok(out)
    }
}

pub(crate) fn disclaimer(generator_name: &str) -> String {
    format!("// Auto-generated via {generator_name}. Do not edit by hand!")
}
