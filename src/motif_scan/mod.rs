mod binning;
mod loader;
mod matcher;
mod types;

pub use binning::aggregate;
pub use loader::load_sequence;
pub use matcher::find_hits;
pub use types::{Bin, Motif, Sequence, VALID_ALPHABET};

use crate::error::ScanError;

/// Everything a single analysis run produces. Value object, recomputed fresh
/// on every run; the same inputs always yield an identical result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub header: Option<String>,
    pub sequence_length: usize,
    pub motif: Motif,
    /// 0-based start offsets, ascending, overlapping occurrences included.
    pub hits: Vec<usize>,
    pub bins: Vec<Bin>,
}

/// Runs the full load -> match -> aggregate pipeline on raw file text.
///
/// Pure function of its inputs: no file system access, no display. Callers
/// own reading the input file and writing any exports.
pub fn run_scan(raw_text: &str, motif: &str, bin_size: usize) -> Result<ScanResult, ScanError> {
    let sequence = load_sequence(raw_text)?;
    let motif = Motif::parse(motif)?;
    let hits = find_hits(&sequence, &motif);
    let bins = aggregate(sequence.len(), &hits, bin_size)?;

    Ok(ScanResult {
        header: sequence.header().map(str::to_string),
        sequence_length: sequence.len(),
        motif,
        hits,
        bins,
    })
}
