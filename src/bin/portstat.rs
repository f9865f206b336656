use clap::Parser;
use colored::Colorize;
use portstat_core::error::Result;
use portstat_core::exit::PortstatExit;
use portstat_core::report;

/// Prints one JSON line with the working tree's C code lines, Rust code
/// lines, and `unsafe` occurrence count.
#[derive(Parser)]
#[command(name = "portstat", version, about)]
struct Cli {}

fn main() -> PortstatExit {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => PortstatExit::Success,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            PortstatExit::from(&e)
        }
    }
}

fn run() -> Result<()> {
    let summary = report::run()?;
    println!("{}", summary.render()?);
    Ok(())
}
