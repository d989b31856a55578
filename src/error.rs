use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mkcolors operations
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    #[diagnostic(code(mkcolors::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(mkcolors::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Syntax error on line {line}")]
    #[diagnostic(
        code(mkcolors::parse),
        help("expected `name value`, where value is a hex color, rgb()/rgba(), white(), hsv()/hsva(), or a @reference")
    )]
    Syntax { line: u32 },

    #[error("Duplicate color name: {0}")]
    #[diagnostic(
        code(mkcolors::parse),
        help("each color name may only be defined once")
    )]
    DuplicateColorName(String),

    #[error("Missing reference: {0}")]
    #[diagnostic(
        code(mkcolors::resolve),
        help("a @reference names a color that is not defined in the list")
    )]
    MissingReference(String),

    #[error("Cyclic reference: {0}")]
    #[diagnostic(
        code(mkcolors::resolve),
        help("reference chains must eventually reach a literal color")
    )]
    CyclicReference(String),

    #[error("Config error: {message}")]
    #[diagnostic(code(mkcolors::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot write a directory artifact to standard output")]
    #[diagnostic(
        code(mkcolors::output),
        help("asset catalogs are directory trees; pass --output with a path instead of -")
    )]
    CannotWriteTreeToStdout,
}

pub type Result<T> = std::result::Result<T, Error>;
