use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use niffler::get_reader;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::export::formats::{bins, hits};
use crate::export::ScanExport;
use crate::motif_scan::run_scan;
use crate::utils::histogram_plotter;

pub fn run(
    sequence_file: String,
    motif: String,
    bin_size: usize,
    output_dir: Option<String>,
    no_plot: bool,
) -> Result<()> {
    let config = Config::load();
    let output_dir = output_dir.unwrap_or(config.output_dir);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Scanning {} for {}", sequence_file, motif));

    let raw_text = read_sequence_file(Path::new(&sequence_file))
        .with_context(|| format!("failed to read {}", sequence_file))?;

    let started = Instant::now();
    let result = run_scan(&raw_text, &motif, bin_size)?;
    let elapsed = started.elapsed();

    spinner.finish_and_clear();

    // Exports happen only after the whole pipeline has succeeded, so a
    // validation failure never leaves partial files behind.
    let out = Path::new(&output_dir);
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", output_dir))?;

    hits::write_hits(&out.join("hits.csv"), &result.motif, &result.hits)?;
    bins::write_bins(&out.join("bins.csv"), &result.bins)?;

    let export = ScanExport::from_result(&result, bin_size, elapsed.as_millis() as u64);
    export.write_json(&out.join("summary.json"))?;

    if !no_plot {
        histogram_plotter::write_histogram(
            &result.bins,
            result.motif.as_str(),
            &out.join("motif_plot.svg"),
        )?;
    }

    let first_positions: Vec<usize> = result
        .hits
        .iter()
        .take(config.positions_shown)
        .map(|p| p + 1)
        .collect();

    println!("Sequence length: {}", result.sequence_length);
    println!("Occurrences of {}: {}", result.motif, result.hits.len());
    println!("First positions (1-based): {:?}", first_positions);
    println!("Elapsed: {:.2?}", elapsed);
    println!("Results written to {}", output_dir);

    Ok(())
}

/// Reads the whole input file, decompressing transparently when it is
/// gzip/bzip2 compressed. Existence and readability failures surface here;
/// content validation is the loader's job.
fn read_sequence_file(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let (mut reader, _compression) = get_reader(Box::new(file))?;

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
