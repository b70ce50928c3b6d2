//! Calculates simple interest (5000.00 at 5.5% for 2 years by default).

use clap::Parser;
use snippets::commands::InterestArgs;
use snippets::{cli, common::logging};

#[derive(Parser)]
#[command(name = "simple-interest", about = "Calculate simple interest")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: InterestArgs,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = cli::run_interest(cli.args, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
