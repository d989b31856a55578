//! Build command implementation.
//!
//! Parses a color list and writes the generated artifact to a file,
//! directory tree, or standard output.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generate::{Artifact, Format, Options};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse;
use crate::types::{ColorDef, ColorTable};

/// Compile a color list into a platform artifact
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input color list (use - for stdin)
    #[arg(required = true)]
    pub input: String,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<FormatArg>,

    /// Prefix for emitted color names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output path (use - for stdout; default derives from the input name)
    #[arg(long, short)]
    pub output: Option<String>,

    /// List resolved colors on stdout after parsing
    #[arg(long)]
    pub dump: bool,
}

/// Command-line spelling of the output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Android,
    Assets,
    Html,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Android => Format::Android,
            FormatArg::Assets => Format::Assets,
            FormatArg::Html => Format::Html,
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = Config::discover(Path::new("."))?;

    let format = args
        .format
        .map(Format::from)
        .or(config.format)
        .unwrap_or(Format::Assets);

    let options = Options {
        prefix: args.prefix.or(config.prefix),
    };

    let source = read_input(&args.input)?;
    let table = parse(&source)?;

    if args.dump {
        dump(&table)?;
    }

    let artifact = format.generate(&table, &options)?;

    let config_output = config.output.map(|p| p.display().to_string());
    match destination(&args.input, args.output.or(config_output), format) {
        None => write_stdout(&artifact)?,
        Some(path) => {
            write_artifact(&artifact, &path)?;
            printer.success(
                "Generated",
                &format!(
                    "{} ({})",
                    display_path(&path),
                    plural(table.len(), "color", "colors")
                ),
            );
        }
    }

    Ok(())
}

/// List every entry in sorted order with its resolved color.
fn dump(table: &ColorTable) -> Result<()> {
    for (name, def) in table.sorted() {
        let resolved = table.resolve(name)?;
        match def {
            ColorDef::Literal(_) => println!("{name}: {resolved}"),
            ColorDef::Reference(referenced) => {
                println!("{name} (@{referenced}): {resolved}")
            }
        }
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    fs::read_to_string(input).map_err(|e| Error::Io {
        path: PathBuf::from(input),
        message: format!("Failed to read input: {}", e),
    })
}

/// Pick the output destination; `None` means standard output.
///
/// Default is the input file name with the format's extension. Reading
/// from stdin defaults to writing to stdout.
fn destination(input: &str, output: Option<String>, format: Format) -> Option<PathBuf> {
    match output.as_deref() {
        Some("-") => None,
        Some(path) => Some(PathBuf::from(path)),
        None if input == "-" => None,
        None => Some(PathBuf::from(input).with_extension(format.default_extension())),
    }
}

fn write_stdout(artifact: &Artifact) -> Result<()> {
    match artifact {
        Artifact::File(contents) => {
            print!("{contents}");
            Ok(())
        }
        Artifact::Directory(_) => Err(Error::CannotWriteTreeToStdout),
    }
}

/// Persist an artifact to disk. Directory artifacts replace any existing
/// tree at the destination wholesale.
pub fn write_artifact(artifact: &Artifact, path: &Path) -> Result<()> {
    match artifact {
        Artifact::File(contents) => fs::write(path, contents).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write output: {}", e),
        }),
        Artifact::Directory(children) => {
            if path.exists() {
                fs::remove_dir_all(path).map_err(|e| Error::Io {
                    path: path.to_path_buf(),
                    message: format!("Failed to replace output directory: {}", e),
                })?;
            }
            fs::create_dir_all(path).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
            for (name, child) in children {
                write_artifact(child, &path.join(name))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_destination_defaults_to_input_stem() {
        assert_eq!(
            destination("colors.txt", None, Format::Android),
            Some(PathBuf::from("colors.xml"))
        );
        assert_eq!(
            destination("theme/colors.txt", None, Format::Assets),
            Some(PathBuf::from("theme/colors.xcassets"))
        );
    }

    #[test]
    fn test_destination_stdin_defaults_to_stdout() {
        assert_eq!(destination("-", None, Format::Html), None);
    }

    #[test]
    fn test_destination_dash_output_is_stdout() {
        assert_eq!(destination("colors.txt", Some("-".into()), Format::Html), None);
    }

    #[test]
    fn test_destination_explicit_path() {
        assert_eq!(
            destination("colors.txt", Some("out.html".into()), Format::Html),
            Some(PathBuf::from("out.html"))
        );
    }

    #[test]
    fn test_write_stdout_rejects_directory() {
        let artifact = Artifact::Directory(Default::default());
        assert!(matches!(
            write_stdout(&artifact),
            Err(Error::CannotWriteTreeToStdout)
        ));
    }

    #[test]
    fn test_write_artifact_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colors.xml");
        write_artifact(&Artifact::File("<resources/>\n".into()), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<resources/>\n");
    }

    #[test]
    fn test_write_artifact_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colors.xcassets");

        let mut group = std::collections::BTreeMap::new();
        group.insert("Contents.json".to_string(), Artifact::File("{}".into()));
        let mut root = std::collections::BTreeMap::new();
        root.insert("Contents.json".to_string(), Artifact::File("{}".into()));
        root.insert("Red.colorset".to_string(), Artifact::Directory(group));

        write_artifact(&Artifact::Directory(root), &path).unwrap();

        assert!(path.join("Contents.json").is_file());
        assert!(path.join("Red.colorset").join("Contents.json").is_file());
    }

    #[test]
    fn test_write_artifact_replaces_existing_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");
        fs::create_dir_all(path.join("stale")).unwrap();

        write_artifact(&Artifact::Directory(Default::default()), &path).unwrap();
        assert!(!path.join("stale").exists());
    }

    #[test]
    fn test_run_builds_android_xml() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.txt");
        let output = dir.path().join("colors.xml");
        fs::write(&input, "accent #ff0000\nlink @accent\n").unwrap();

        let args = BuildArgs {
            input: input.display().to_string(),
            format: Some(FormatArg::Android),
            prefix: None,
            output: Some(output.display().to_string()),
            dump: false,
        };

        run(args, &Printer::new()).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<color name=\"accent\">#FF0000</color>"));
        assert!(xml.contains("<color name=\"link\">@color/accent</color>"));
    }

    #[test]
    fn test_run_errors_on_missing_reference() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.txt");
        fs::write(&input, "ghostly @ghost\n").unwrap();

        let args = BuildArgs {
            input: input.display().to_string(),
            format: Some(FormatArg::Html),
            prefix: None,
            output: Some(dir.path().join("out.html").display().to_string()),
            dump: false,
        };

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, Error::MissingReference(name) if name == "ghost"));
    }
}
