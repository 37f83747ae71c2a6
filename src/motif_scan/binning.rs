use crate::error::ScanError;
use crate::motif_scan::types::Bin;

/// Partitions `[0, sequence_length)` into `ceil(sequence_length / bin_size)`
/// half-open segments and counts the hits landing in each.
///
/// The histogram is dense: every bin is present even with a zero count, which
/// downstream plotting relies on. The final bin may be narrower than
/// `bin_size`. Counts are conserved: they sum to `hits.len()`.
pub fn aggregate(
    sequence_length: usize,
    hits: &[usize],
    bin_size: usize,
) -> Result<Vec<Bin>, ScanError> {
    if bin_size == 0 {
        return Err(ScanError::InvalidParameter(
            "bin size must be a positive integer".to_string(),
        ));
    }
    if sequence_length == 0 {
        return Err(ScanError::InvalidParameter(
            "sequence length must be at least 1".to_string(),
        ));
    }

    let n_bins = sequence_length.div_ceil(bin_size);
    let mut counts = vec![0u64; n_bins];

    for &pos in hits {
        debug_assert!(pos < sequence_length, "hit offset {} out of range", pos);
        counts[pos / bin_size] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| Bin {
            index,
            start: index * bin_size + 1,
            end: ((index + 1) * bin_size).min(sequence_length),
            count,
        })
        .collect())
}
