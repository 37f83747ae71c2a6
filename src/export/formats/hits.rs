use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::motif_scan::Motif;

/// Writes the ordered hit list as a flat CSV with a header row. Positions are
/// 1-based for reporting; each row is labelled with the motif it matched.
pub fn write_hits(path: &Path, motif: &Motif, hits: &[usize]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "motif,start_1")?;
    for &pos in hits {
        writeln!(writer, "{},{}", motif, pos + 1)?;
    }

    writer.flush()
}
