//! Core data types: colors, definitions, and the named-color table.

mod color;
mod table;

pub use color::Color;
pub use table::{compare, natural_cmp, ColorDef, ColorTable};
