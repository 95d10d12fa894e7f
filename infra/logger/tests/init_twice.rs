use serial_test::serial;
use techdeck_logger::{Logger, LoggerError};

#[test]
#[serial]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder("integration-init-twice").init().expect("first init should succeed");

    let err = Logger::builder("integration-init-twice-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error");
}

#[test]
#[serial]
fn output_less_logger_is_rejected_before_install() {
    let err = Logger::builder("integration-no-output")
        .console(false)
        .init()
        .expect_err("no output must fail");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
