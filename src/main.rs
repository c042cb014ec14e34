mod cli;
mod logging;

use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gregory::{CalendarDate, Generator, Sink};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let end = match cli.end {
        Some(end) => end,
        None => CalendarDate::today().context("today's date is outside the supported years")?,
    };

    let generator = Generator::from_config(&cli.config(end))?;

    let mut sink = Sink::open(cli.output.as_deref()).with_context(|| match &cli.output {
        Some(path) => format!("failed to open {}", path.display()),
        None => "failed to open stdout".to_owned(),
    })?;

    if !cli.quiet {
        eprintln!("{}", generator.estimate());
        if cli.delay > 0 {
            eprintln!("You have {} seconds to abort...", cli.delay);
            thread::sleep(Duration::from_secs(cli.delay));
        }
        eprintln!("Started!");
    }

    generator.run(&mut sink)?;

    if !cli.quiet {
        eprintln!("Done!");
    }
    Ok(())
}
