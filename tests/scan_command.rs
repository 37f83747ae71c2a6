use std::fs;
use std::io::Write;

use motifscan_tools::commands::scan;
use motifscan_tools::export::ScanExport;

// On-disk behavior of the scan command: export file layout, exact header
// rows, and the no-partial-output guarantee on validation failure.

#[test]
fn scan_writes_all_export_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("seq.fa");
    fs::write(&input, ">h\nATGATG\n").expect("write input");

    let out_dir = dir.path().join("out");
    scan::run(
        input.to_string_lossy().into_owned(),
        "ATG".to_string(),
        3,
        Some(out_dir.to_string_lossy().into_owned()),
        false,
    )
    .expect("scan should succeed");

    let hits = fs::read_to_string(out_dir.join("hits.csv")).expect("hits.csv written");
    assert_eq!(hits, "motif,start_1\nATG,1\nATG,4\n");

    let bins = fs::read_to_string(out_dir.join("bins.csv")).expect("bins.csv written");
    assert_eq!(bins, "bin_index,start,end,count\n0,1,3,1\n1,4,6,1\n");

    let summary = fs::read_to_string(out_dir.join("summary.json")).expect("summary.json written");
    let export: ScanExport = serde_json::from_str(&summary).expect("summary parses back");
    assert_eq!(export.motif, "ATG");
    assert_eq!(export.sequence_header.as_deref(), Some("h"));
    assert_eq!(export.sequence_length, 6);
    assert_eq!(export.total_hits, 2);
    assert_eq!(export.bins.len(), 2);

    let svg = fs::read_to_string(out_dir.join("motif_plot.svg")).expect("plot written");
    assert!(svg.starts_with("<?xml"), "plot should be an SVG document");
    assert!(svg.contains("Motif ATG"));
}

#[test]
fn no_plot_flag_skips_the_svg() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("seq.txt");
    fs::write(&input, "ACGTACGT\n").expect("write input");

    let out_dir = dir.path().join("out");
    scan::run(
        input.to_string_lossy().into_owned(),
        "ACG".to_string(),
        4,
        Some(out_dir.to_string_lossy().into_owned()),
        true,
    )
    .expect("scan should succeed");

    assert!(out_dir.join("hits.csv").exists());
    assert!(out_dir.join("bins.csv").exists());
    assert!(!out_dir.join("motif_plot.svg").exists());
}

#[test]
fn gzipped_input_is_read_transparently() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("seq.fa.gz");

    let file = fs::File::create(&input).expect("create gz input");
    let mut writer = niffler::get_writer(
        Box::new(file),
        niffler::compression::Format::Gzip,
        niffler::compression::Level::One,
    )
    .expect("gzip writer");
    writer.write_all(b">gz record\nATGATGATG\n").expect("write gz input");
    drop(writer);

    let out_dir = dir.path().join("out");
    scan::run(
        input.to_string_lossy().into_owned(),
        "ATG".to_string(),
        3,
        Some(out_dir.to_string_lossy().into_owned()),
        true,
    )
    .expect("gzipped scan should succeed");

    let hits = fs::read_to_string(out_dir.join("hits.csv")).expect("hits.csv written");
    assert_eq!(hits, "motif,start_1\nATG,1\nATG,4\nATG,7\n");
}

#[test]
fn validation_failure_leaves_no_partial_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("bad.fa");
    fs::write(&input, ">bad\nACGTXXXX\n").expect("write input");

    let out_dir = dir.path().join("out");
    let err = scan::run(
        input.to_string_lossy().into_owned(),
        "ATG".to_string(),
        3,
        Some(out_dir.to_string_lossy().into_owned()),
        false,
    )
    .expect_err("invalid sequence must fail the run");

    assert!(err.to_string().contains('X'), "message should name the offender");
    assert!(
        !out_dir.exists(),
        "no output directory or files on a failed run"
    );
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out_dir = dir.path().join("out");

    let err = scan::run(
        dir.path().join("nope.fa").to_string_lossy().into_owned(),
        "ATG".to_string(),
        3,
        Some(out_dir.to_string_lossy().into_owned()),
        false,
    )
    .expect_err("missing file must fail");

    assert!(err.to_string().contains("failed to read"));
    assert!(!out_dir.exists());
}
