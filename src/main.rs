mod cli;
mod commands;
mod config;
mod error;
mod export;
mod motif_scan;
mod utils;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Scan {
            sequence_file,
            motif,
            bin_size,
            output_dir,
            no_plot,
        } => commands::scan::run(sequence_file, motif, bin_size, output_dir, no_plot),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
