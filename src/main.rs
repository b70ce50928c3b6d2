//! Arithmetic snippets CLI
//!
//! Umbrella binary exposing both programs as subcommands.

use clap::Parser;
use snippets::commands::Commands;
use snippets::{cli, common::logging};

#[derive(Parser)]
#[command(name = "snippets", about = "Fibonacci printer and simple-interest calculator")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = cli::dispatch(cli.command, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
