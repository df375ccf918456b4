use std::fs;

use flyout::logging::{init_file_logger, LevelFilter, LoggingError};
use flyout::Dropdown;

// One test: the global logger can only be installed once per process.
#[test]
fn test_file_logger_records_transitions() {
    let dir = std::env::temp_dir().join(format!("flyout-logging-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("flyout.log");

    let missing = dir.join("missing").join("flyout.log");
    assert!(matches!(
        init_file_logger(&missing, LevelFilter::Debug),
        Err(LoggingError::Io(_))
    ));

    init_file_logger(&path, LevelFilter::Debug).unwrap();

    let dropdown = Dropdown::new("Logged").id("logged");
    dropdown.toggle();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[dropdown] logged -> Open"), "log was: {contents}");

    assert!(matches!(
        init_file_logger(dir.join("second.log"), LevelFilter::Info),
        Err(LoggingError::AlreadyInitialized(_))
    ));

    fs::remove_dir_all(&dir).ok();
}
