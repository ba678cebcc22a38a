mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{blocks, init, serve, templates, InitArgs, ServeArgs, TemplatesArgs};

/// Folio CLI - portfolio page builder
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the builder HTTP API
    Serve(ServeArgs),

    /// Write a default folio.config.json
    Init(InitArgs),

    /// List portfolio templates
    Templates(TemplatesArgs),

    /// List the block palette
    Blocks,
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Serve(args) => serve(args, &cwd),
        Command::Init(args) => init(args, &cwd),
        Command::Templates(args) => templates(args),
        Command::Blocks => blocks(),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
