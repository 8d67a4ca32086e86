use clap::Parser;
use dirsort::cli::{Cli, run_cli};
use dirsort::output::OutputFormatter;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli.target, cli.dry_run) {
        OutputFormatter::error(&e.to_string());
        process::exit(1);
    }
}
