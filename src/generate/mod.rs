//! Output generators.
//!
//! Each generator is a pure function from a resolved color table to an
//! [`Artifact`]. Generators enumerate the table through the ordering
//! policy and abort on the first resolution error; there is no partial
//! output.

mod android;
mod assets;
mod html;
pub mod naming;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::types::ColorTable;

pub use android::generate_android;
pub use assets::generate_assets;
pub use html::generate_html;

/// Options shared by all generators.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Optional prefix prepended to every emitted color name.
    pub prefix: Option<String>,
}

/// The fixed set of output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Android `colors.xml` resource file.
    Android,
    /// Asset-catalog directory bundle.
    Assets,
    /// HTML preview page.
    Html,
}

impl Format {
    /// File extension used when deriving an output name from the input.
    pub fn default_extension(self) -> &'static str {
        match self {
            Format::Android => "xml",
            Format::Assets => "xcassets",
            Format::Html => "html",
        }
    }

    /// Run the generator for this format.
    pub fn generate(self, table: &ColorTable, options: &Options) -> Result<Artifact> {
        match self {
            Format::Android => generate_android(table, options),
            Format::Assets => generate_assets(table, options),
            Format::Html => generate_html(table, options),
        }
    }
}

/// An abstract generator output before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// A single text blob.
    File(String),
    /// A named tree of nested artifacts, iterated in deterministic order.
    Directory(BTreeMap<String, Artifact>),
}

impl Artifact {
    /// Borrow the file contents, if this is a file.
    pub fn as_file(&self) -> Option<&str> {
        match self {
            Artifact::File(contents) => Some(contents),
            Artifact::Directory(_) => None,
        }
    }

    /// Look up a child artifact by name, if this is a directory.
    pub fn child(&self, name: &str) -> Option<&Artifact> {
        match self {
            Artifact::File(_) => None,
            Artifact::Directory(children) => children.get(name),
        }
    }
}
