use thiserror::Error;

/// Validation failures raised by the scan pipeline.
///
/// Every variant is fail-fast: the offending component returns it unmodified
/// and no partial results are produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Raw text or the derived sequence has zero usable characters.
    #[error("no sequence characters found in input")]
    EmptyInput,

    /// Sequence or motif contains characters outside {A,C,G,T,N}.
    /// `offending` holds the sorted distinct set for diagnostics.
    #[error("{what} contains characters outside the ACGTN alphabet: {offending}")]
    InvalidAlphabet {
        what: &'static str,
        offending: String,
    },

    /// Zero bin size, zero sequence length, or an empty motif.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ScanError {
    pub(crate) fn invalid_alphabet(what: &'static str, bad: impl IntoIterator<Item = char>) -> Self {
        let mut offending: Vec<char> = bad.into_iter().collect();
        offending.sort_unstable();
        offending.dedup();
        ScanError::InvalidAlphabet {
            what,
            offending: offending.into_iter().collect(),
        }
    }
}
