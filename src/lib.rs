pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod motif_scan;
pub mod utils;

// Re-export main API
pub use error::ScanError;
pub use motif_scan::{run_scan, ScanResult};
