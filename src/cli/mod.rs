pub mod build;
pub mod completions;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// mkcolors - color definition compiler
#[derive(Parser, Debug)]
#[command(name = "mkcolors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a color list into a platform artifact
    Build(build::BuildArgs),

    /// Parse and resolve color lists without generating output
    Validate(validate::ValidateArgs),

    /// Create a starter color list
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
