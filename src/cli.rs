use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a FASTA/plain-text sequence for a nucleotide motif and bin the hits
    Scan {
        /// Path to the sequence file (FASTA or plain text, plain or gzipped)
        sequence_file: String,

        /// Motif to search for, e.g. ATG (case-insensitive)
        motif: String,

        /// Width of the aggregation bins in bases (default: 100)
        #[arg(long, default_value = "100")]
        bin_size: usize,

        /// Output directory for the hits/bins/plot files
        #[arg(short = 'o', long = "output")]
        output_dir: Option<String>,

        /// Skip rendering the SVG histogram
        #[arg(long)]
        no_plot: bool,
    },
}
