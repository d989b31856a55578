//! Init command implementation.
//!
//! Writes a starter color list demonstrating the dialect.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Error, Result};
use crate::output::{display_path, Printer};

const STARTER_FILENAME: &str = "colors.txt";

const STARTER: &str = "\
background      #fff
textPrimary     rgb(32, 32, 32)
textSecondary   white(128)
accent          hsv(210\u{00b0}, 192, 255)
overlay         rgba(0, 0, 0, 50%)
button/label    @textPrimary
";

/// Create a starter color list
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the list in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing colors.txt
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let path = args.path.join(STARTER_FILENAME);

    if path.exists() && !args.force {
        return Err(Error::Io {
            path,
            message: format!("{} already exists", STARTER_FILENAME),
        });
    }

    fs::write(&path, STARTER).map_err(|e| Error::Io {
        path: path.clone(),
        message: format!("Failed to write starter list: {}", e),
    })?;

    printer.success("Created", &display_path(&path));

    Ok(())
}
