mod cli;
mod commands;

use std::io::{self, BufWriter};

use clap::Parser;
use log::LevelFilter;

fn main() {
    let args = cli::Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match args.command {
        cli::Commands::Revcomp { fasta } => commands::revcomp(&fasta, &mut out),
        cli::Commands::Orf { fasta } => commands::orf(&fasta, &mut out),
        cli::Commands::Translate { fasta } => commands::translate(&fasta, &mut out),
        cli::Commands::Analyze { fasta, format } => commands::analyze(&fasta, format, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
