use pagebar_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_reports_subscriber_error() {
    let _logger = Logger::builder()
        .name("pagebar-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("pagebar-init-twice-second")
        .level(LevelFilter::DEBUG)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error, got {err}");
}
