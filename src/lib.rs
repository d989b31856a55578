//! mkcolors - color definition compiler
//!
//! A library for compiling a compact textual color-definition language
//! into Android color resources, asset-catalog bundles, and HTML previews.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod parser;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use generate::{
    generate_android, generate_assets, generate_html, Artifact, Format, Options,
};
pub use parser::parse;
pub use types::{Color, ColorDef, ColorTable};
