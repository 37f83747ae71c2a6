use crate::motif_scan::types::{Motif, Sequence};

/// Finds every occurrence of `motif` in `sequence`, overlapping ones
/// included: each start index in `[0, n - m]` whose window equals the motif
/// is a hit, so consecutive hits may sit closer together than the motif
/// length. Offsets are 0-based and ascending by construction.
///
/// A motif longer than the sequence yields no hits rather than an error.
pub fn find_hits(sequence: &Sequence, motif: &Motif) -> Vec<usize> {
    let seq = sequence.as_bytes();
    let pat = motif.as_bytes();

    if pat.len() > seq.len() {
        return Vec::new();
    }

    seq.windows(pat.len())
        .enumerate()
        .filter(|(_, window)| *window == pat)
        .map(|(i, _)| i)
        .collect()
}
