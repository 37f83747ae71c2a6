pub mod formats;

use chrono::{DateTime, Utc};
use serde::de::{Deserialize as DeserializeTrait, Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::motif_scan::{Bin, ScanResult};

/// Root structure for the JSON run summary written next to the tabular
/// exports. Captures enough provenance (tool version, timestamp, inputs) to
/// reproduce the run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanExport {
    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    pub motif: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_header: Option<String>,
    pub sequence_length: usize,
    pub bin_size: usize,
    pub total_hits: usize,
    pub elapsed_ms: u64,

    pub bins: Vec<Bin>,
}

impl ScanExport {
    pub fn from_result(result: &ScanResult, bin_size: usize, elapsed_ms: u64) -> Self {
        Self {
            version: "1".to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            motif: result.motif.to_string(),
            sequence_header: result.header.clone(),
            sequence_length: result.sequence_length,
            bin_size,
            total_hits: result.hits.len(),
            elapsed_ms,
            bins: result.bins.clone(),
        }
    }

    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}
