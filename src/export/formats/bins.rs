use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::motif_scan::Bin;

/// Writes the dense bin table as a flat CSV with a header row. Every bin
/// index appears, zero counts included; `start`/`end` are 1-based inclusive.
pub fn write_bins(path: &Path, bins: &[Bin]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "bin_index,start,end,count")?;
    for bin in bins {
        writeln!(writer, "{},{},{},{}", bin.index, bin.start, bin.end, bin.count)?;
    }

    writer.flush()
}
