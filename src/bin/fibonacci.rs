//! Prints the first N Fibonacci numbers (10 by default).

use clap::Parser;
use snippets::commands::FibonacciArgs;
use snippets::{cli, common::logging};

#[derive(Parser)]
#[command(name = "fibonacci", about = "Print the Fibonacci series")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: FibonacciArgs,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = cli::run_fibonacci(cli.args, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
