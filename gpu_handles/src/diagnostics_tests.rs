//! Unit tests for diagnostics.rs
//!
//! Tests logger replacement and the gpu_* macros.

use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity};
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Test logger that captures entries coming from one source
struct TestLogger {
    source: &'static str,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new(source: &'static str) -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { source, entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == self.source {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let (logger, entries) = TestLogger::new("test::diagnostics");
    Diagnostics::set_logger(logger);

    Diagnostics::log(LogSeverity::Info, "test::diagnostics", "hello".to_string());
    Diagnostics::log(LogSeverity::Warn, "test::diagnostics", "careful".to_string());

    let captured = entries.lock().unwrap().clone();
    Diagnostics::reset_logger();

    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);
}

#[test]
#[serial]
fn test_log_detailed_records_location() {
    let (logger, entries) = TestLogger::new("test::detailed");
    Diagnostics::set_logger(logger);

    crate::gpu_error!("test::detailed", "failed with code {}", 7);

    let captured = entries.lock().unwrap().clone();
    Diagnostics::reset_logger();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "failed with code 7");
    assert!(captured[0].file.unwrap().ends_with("diagnostics_tests.rs"));
    assert!(captured[0].line.is_some());
}

#[test]
#[serial]
fn test_macros_map_to_severities() {
    let (logger, entries) = TestLogger::new("test::macros");
    Diagnostics::set_logger(logger);

    crate::gpu_trace!("test::macros", "t");
    crate::gpu_debug!("test::macros", "d");
    crate::gpu_info!("test::macros", "i");
    crate::gpu_warn!("test::macros", "w");

    let severities: Vec<LogSeverity> = entries.lock().unwrap().iter().map(|e| e.severity).collect();
    Diagnostics::reset_logger();

    assert_eq!(
        severities,
        vec![LogSeverity::Trace, LogSeverity::Debug, LogSeverity::Info, LogSeverity::Warn]
    );
}

#[test]
#[serial]
fn test_log_and_return_error_passes_error_through() {
    let (logger, entries) = TestLogger::new("test::errors");
    Diagnostics::set_logger(logger);

    let err = Diagnostics::log_and_return_error("test::errors", Error::OutOfMemory);

    let captured = entries.lock().unwrap().clone();
    Diagnostics::reset_logger();

    assert!(matches!(err, Error::OutOfMemory));
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "Out of GPU memory");
}
