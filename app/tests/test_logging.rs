//! FILENAME: tests/test_logging.rs
//! Integration test for the unified log file. The logger is process-global,
//! so everything runs inside a single test.

mod common;

use common::TestHarness;
use fanout_lib::{logging, Config};
use log::LevelFilter;

#[test]
fn test_unified_log_file_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fanout.log");
    let config = Config {
        log_file: path.clone(),
        log_level: LevelFilter::Debug,
        ..Config::default()
    };

    let initialized = logging::init(&config).unwrap();
    assert_eq!(initialized, path);
    assert_eq!(logging::get_log_path(), Some(path.clone()));

    // A second logger cannot be installed.
    assert!(logging::init(&config).is_err());

    let mut harness = TestHarness::new();
    harness.multi(16, true, None).unwrap();
    log::trace!("filtered out at debug level");

    let kept = logging::sort_log_file().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), kept);

    let seqs: Vec<u64> = lines
        .iter()
        .map(|line| line.split('|').next().unwrap().parse().unwrap())
        .collect();
    assert!(seqs.windows(2).all(|pair| pair[0] < pair[1]));

    for line in &lines {
        assert_eq!(line.split('|').count(), 4, "malformed line {}", line);
    }
    assert!(lines.iter().any(|line| line.contains("|I|CMD|ENTER run_multi")));
    assert!(lines.iter().any(|line| line.contains("|I|CMD|EXIT run_multi 16 results")));
    assert!(lines.iter().any(|line| line.contains("|D|engine::batch|")));
    assert!(!content.contains("filtered out"));
}
