use clap::Parser;
use miette::Result;
use mkcolors::cli::{Cli, Commands};
use mkcolors::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => mkcolors::cli::build::run(args, &printer)?,
        Commands::Validate(args) => mkcolors::cli::validate::run(args, &printer)?,
        Commands::Init(args) => mkcolors::cli::init::run(args, &printer)?,
        Commands::Completions(args) => mkcolors::cli::completions::run(args)?,
    }

    Ok(())
}
