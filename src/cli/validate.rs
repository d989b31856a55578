//! Validate command implementation.
//!
//! Parses each file and resolves every entry, surfacing syntax errors,
//! duplicate names, and broken or cyclic references without writing any
//! output.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Error, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse;

/// Parse and resolve color lists without generating output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Color lists to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let source = fs::read_to_string(file).map_err(|e| Error::Io {
            path: file.clone(),
            message: format!("Failed to read input: {}", e),
        })?;

        let table = parse(&source)?;
        for (name, _) in table.sorted() {
            table.resolve(name)?;
        }

        printer.status(
            "Validated",
            &format!(
                "{} ({})",
                display_path(file),
                plural(table.len(), "color", "colors")
            ),
        );
    }

    printer.success(
        "Finished",
        &plural(args.files.len(), "file", "files"),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn validate_source(source: &str) -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colors.txt");
        fs::write(&path, source).unwrap();

        run(
            ValidateArgs { files: vec![path] },
            &Printer::new(),
        )
    }

    #[test]
    fn test_valid_list_passes() {
        validate_source("base #fff\nlink @base\n").unwrap();
    }

    #[test]
    fn test_cycle_is_reported() {
        let err = validate_source("a @b\nb @a\n").unwrap_err();
        assert!(matches!(err, Error::CyclicReference(_)));
    }

    #[test]
    fn test_missing_reference_is_reported() {
        let err = validate_source("a @z\n").unwrap_err();
        assert!(matches!(err, Error::MissingReference(name) if name == "z"));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = validate_source("a notacolor\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1 }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = run(
            ValidateArgs {
                files: vec![PathBuf::from("/nonexistent/colors.txt")],
            },
            &Printer::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
