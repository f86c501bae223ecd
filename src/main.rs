mod categories;
mod cli;
mod display;
mod error;
mod models;
mod prompt;
mod registry;
mod renderer;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dtop")]
#[command(about = "Create desktop entry files for GNU/Linux, interactively", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the version and check for updates
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    version: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version and check for updates
    #[command(visible_alias = "v")]
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => cli::version::run(),
        None if cli.version => cli::version::run(),
        None => cli::create::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
