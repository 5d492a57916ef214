use pagebar_logger::{LogSettings, Logger};

#[test]
fn default_settings_install_console_logger_without_guard() {
    let logger = Logger::from_settings("pagebar-console-only", &LogSettings::default())
        .expect("default settings should initialize");

    tracing::info!(slots = 3, "composed sidebar");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
