use crate::error::ScanError;
use crate::motif_scan::types::Sequence;

/// Parses raw file text into a validated sequence.
///
/// A first line starting with `>` is treated as the FASTA header and excluded
/// from the body; every remaining line is concatenated with internal
/// whitespace removed, then upper-cased and validated against {A,C,G,T,N}.
/// File access is the caller's concern; an empty or blank input string is
/// rejected here regardless of where it came from.
pub fn load_sequence(raw: &str) -> Result<Sequence, ScanError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let mut lines = text.lines();
    let mut header = None;

    let first = lines.next().unwrap_or_default();
    let mut body = String::with_capacity(text.len());

    if let Some(rest) = first.strip_prefix('>') {
        header = Some(rest.trim().to_string());
    } else {
        push_stripped(&mut body, first);
    }

    for line in lines {
        push_stripped(&mut body, line);
    }

    Sequence::new(body.to_uppercase(), header)
}

fn push_stripped(body: &mut String, line: &str) {
    body.extend(line.chars().filter(|c| !c.is_whitespace()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_header_is_split_off() {
        let seq = load_sequence(">chrM test record\nACGT\nACGT").unwrap();
        assert_eq!(seq.header(), Some("chrM test record"));
        assert_eq!(seq.as_str(), "ACGTACGT");
    }

    #[test]
    fn test_plain_text_has_no_header() {
        let seq = load_sequence("acgt\nNNNN").unwrap();
        assert_eq!(seq.header(), None);
        assert_eq!(seq.as_str(), "ACGTNNNN");
    }

    #[test]
    fn test_internal_whitespace_is_stripped() {
        let seq = load_sequence("AC GT\n\n  TT AA  \n").unwrap();
        assert_eq!(seq.as_str(), "ACGTTTAA");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(load_sequence("   \n \t ").unwrap_err(), ScanError::EmptyInput);
    }

    #[test]
    fn test_header_only_input_is_empty() {
        assert_eq!(load_sequence(">just a header\n").unwrap_err(), ScanError::EmptyInput);
    }

    #[test]
    fn test_alphabet_rejection_carries_sorted_offenders() {
        let err = load_sequence("ACGTXACGTY\nX").unwrap_err();
        assert_eq!(
            err,
            ScanError::InvalidAlphabet {
                what: "sequence",
                offending: "XY".to_string()
            }
        );
    }

    #[test]
    fn test_second_record_marker_fails_validation() {
        // Multi-record FASTA is unsupported; the second `>` lands in the body
        // and trips the alphabet check.
        assert!(matches!(
            load_sequence(">r1\nACGT\n>r2\nTTTT"),
            Err(ScanError::InvalidAlphabet { what: "sequence", .. })
        ));
    }
}
