#![expect(missing_docs, reason = "test")]

use std::sync::LazyLock;

use log::LevelFilter;
use microlog::logger::DebugLogger;
use microlog_std::WriterLog;

static LOGGER: LazyLock<DebugLogger<WriterLog<Vec<u8>>>> =
    LazyLock::new(|| DebugLogger::new(WriterLog::new(Vec::new()), LevelFilter::Warn));

static OTHER: DebugLogger<microlog_std::Log> = DebugLogger::new(microlog_std::Log, LevelFilter::Trace);

#[test]
fn log_facade_reaches_the_writer() {
    LazyLock::force(&LOGGER).install().unwrap();
    assert!(OTHER.install().is_err(), "only one global logger can be installed");
    assert_eq!(log::max_level(), LevelFilter::Warn);

    log::error!(target: "arena", "needed {} bytes", 2048);
    log::info!(target: "arena", "filtered");
    log::warn!(target: "arena", "{}", "x".repeat(70));

    let written = LOGGER.backend().take_writer();
    assert_eq!(
        String::from_utf8(written).unwrap(),
        format!("ERROR arena: needed 2048 bytes\r\nWARN arena: {}\r\n", "x".repeat(70))
    );
}
