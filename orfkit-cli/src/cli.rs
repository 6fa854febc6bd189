use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Find and translate the longest ORF of FASTA records", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the reverse complement of each record
    Revcomp {
        /// Input FASTA file
        fasta: String,
    },

    /// Print the longest ORF of each record (blank line when there is none)
    Orf {
        /// Input FASTA file
        fasta: String,
    },

    /// Print the protein translation of each record's longest ORF
    Translate {
        /// Input FASTA file
        fasta: String,
    },

    /// Report length, longest ORF and protein for each record
    Analyze {
        /// Input FASTA file
        fasta: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}
