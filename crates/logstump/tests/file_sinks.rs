use std::fs;

use logstump::{Config, Level, LogError, Logger};

#[test]
fn writing_to_file_works() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testOpeningAndWritingToLogfiles.log");
    let mut logger = Logger::new(Level::Error);
    logger.init([&path], false, false, Level::Debug).unwrap();
    logger.write("Test: ", format_args!("Writing to file works like a charm.")).unwrap();
    logger.close().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Test: Writing to file works like a charm.\n",
    );
}

#[test]
fn every_file_receives_the_same_lines() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.log");
    let b = dir.path().join("b.log");
    let config = Config::new(Level::Warn).file(&a).file(&b);
    let mut logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.sink_count(), 2);
    logger.error(format_args!("disk {} full", "/dev/sda1")).unwrap();
    logger.warn(format_args!("retrying in {}s", 5)).unwrap();
    logger.info(format_args!("not shown")).unwrap();
    logger.close().unwrap();
    let expected = "Error: disk /dev/sda1 full\nWarning: retrying in 5s\n";
    assert_eq!(fs::read_to_string(&a).unwrap(), expected);
    assert_eq!(fs::read_to_string(&b).unwrap(), expected);
}

#[test]
fn from_config_fails_on_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(Level::Info)
        .files([dir.path().join("ok.log"), dir.path().join("missing").join("no.log")]);
    let err = Logger::from_config(&config).unwrap_err();
    assert_eq!(err.failures().len(), 1);
    assert!(err.failures()[0].sink.ends_with("no.log"));
}

#[test]
fn init_truncates_and_reinit_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    let mut logger = Logger::default();
    logger.init([&path], false, false, Level::Info).unwrap();
    logger.info(format_args!("first run")).unwrap();
    logger.close().unwrap();
    assert_eq!(logger.sink_count(), 0);

    logger.init([&path], false, false, Level::Info).unwrap();
    assert_eq!(logger.sink_count(), 1);
    logger.info(format_args!("second run")).unwrap();
    logger.close().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Info: second run\n");
}

#[test]
fn colored_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.log");
    let mut logger = Logger::default();
    logger.init([&path], false, true, Level::Debug).unwrap();
    logger.error(format_args!("This should be red.")).unwrap();
    logger.warn(format_args!("This should be yellow.")).unwrap();
    logger.info(format_args!("This should be standard.")).unwrap();
    logger.debug(format_args!("This should be green.")).unwrap();
    logger.close().unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, [
        "\x1b[31mError: This should be red.\x1b[0m",
        "\x1b[33mWarning: This should be yellow.\x1b[0m",
        "Info: This should be standard.\x1b[0m",
        "\x1b[32mDebug: This should be green.\x1b[0m",
    ]);
}

#[test]
fn unopenable_path_is_reported_and_others_still_work() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.log");
    let bad = dir.path().join("missing").join("bad.log");
    let mut logger = Logger::default();
    let err = logger.init([&bad, &good], false, false, Level::Error).unwrap_err();
    let LogError::Open(failures) = &err else {
        panic!("expected open error, got {err:?}");
    };
    assert_eq!(failures.len(), 1);
    assert!(failures[0].sink.ends_with("bad.log"));
    assert_eq!(logger.level(), Level::Error);
    assert_eq!(logger.sink_count(), 1);
    logger.error(format_args!("x")).unwrap();
    logger.close().unwrap();
    assert_eq!(fs::read_to_string(&good).unwrap(), "Error: x\n");
}

#[test]
fn threshold_can_be_changed_between_calls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mode.log");
    let mut logger = Logger::default();
    logger.init([&path], false, false, Level::Error).unwrap();
    for threshold in Level::ALL {
        logger.set_level(threshold);
        for level in Level::ALL {
            logger.log(level, format_args!("{threshold}/{level}")).unwrap();
        }
    }
    logger.close().unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    // 1 + 2 + 3 + 4 lines
    assert_eq!(contents.lines().count(), 10);
    assert!(contents.starts_with("Error: error/error\nError: warn/error\nWarning: warn/warn\n"));
    assert!(!contents.contains("Debug: info/debug"));
    assert!(contents.ends_with("Debug: debug/debug\n"));
}
