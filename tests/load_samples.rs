//! Loading timing files from disk.

use std::fs;

use puzzle_timing::{load_samples, Error, InputFormat, SampleLabel, TimingSample};
use tempfile::tempdir;

#[test]
fn headered_csv_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timing_results.txt");

    let expected = vec![
        TimingSample::new("2x2", 0.0),
        TimingSample::new("3x3", 0.25),
        TimingSample::new("4x4", 2.0),
        TimingSample::new("5x5", 132688.0),
        TimingSample::new("6x6", 1.75),
    ];
    let mut contents = String::from("Dimension,Average Time (ms)\n");
    for sample in &expected {
        contents.push_str(&format!("{},{:.2}\n", sample.label, sample.elapsed));
    }
    fs::write(&path, contents).unwrap();

    let samples = load_samples(&path, InputFormat::HeaderedCsv).unwrap();
    assert_eq!(samples, expected);
}

#[test]
fn whitespace_file_round_trips_in_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("execution_times.txt");

    let expected = [(5, 0.125), (2, 0.0), (9, 42.5), (3, 0.000125)];
    let contents = expected
        .iter()
        .map(|(size, time)| format!("{} {:.6}\n", size, time))
        .collect::<String>();
    fs::write(&path, contents).unwrap();

    let samples = load_samples(&path, InputFormat::Whitespace).unwrap();
    assert_eq!(samples.len(), expected.len());
    for (sample, &(size, time)) in samples.iter().zip(expected.iter()) {
        assert_eq!(sample.label, SampleLabel::Size(size));
        assert_eq!(sample.elapsed, time);
    }
}

#[test]
fn header_only_file_is_empty_not_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timing_results.txt");
    fs::write(&path, "dimension,avg_time\n").unwrap();

    assert!(load_samples(&path, InputFormat::HeaderedCsv).unwrap().is_empty());
}

#[test]
fn malformed_line_aborts_the_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("execution_times.txt");
    fs::write(&path, "2 0.0000\n3 0.0000\n4 fast\n5 1.0\n").unwrap();

    match load_samples(&path, InputFormat::Whitespace) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error_naming_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    match load_samples(&path, InputFormat::Whitespace) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}
