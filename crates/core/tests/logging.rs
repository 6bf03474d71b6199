use srcmodel_core::LoggingConfig;
use srcmodel_core::logging::init_logging;

#[test]
fn test_init_logging_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        directory: dir.path().join("logs"),
        component: "srcmodel-test".to_string(),
        filter: "debug".to_string(),
        to_stderr: false,
    };

    let guard = init_logging(&config).unwrap();
    assert!(config.directory.is_dir());
    tracing::info!("logging ready");

    // the global subscriber can only be installed once per process
    assert!(init_logging(&config).is_err());
    drop(guard);
}
