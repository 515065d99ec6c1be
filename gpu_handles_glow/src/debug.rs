/// GL debug output - routes KHR_debug messages into the gpu_handles logger
///
/// Messages are logged with a severity matching the GL severity and counted
/// in lock-free statistics.

use colored::*;
use glow::HasContext;
use gpu_handles::gpu::log::LogSeverity;
use gpu_handles::gpu::{Error, Result};
use gpu_handles::{gpu_error, gpu_warn, gpu_info, gpu_trace};
use std::sync::atomic::{AtomicU32, Ordering};

const SOURCE: &str = "gpu::glow::debug";

/// Global debug message statistics
static DEBUG_STATS: DebugStatsTracker = DebugStatsTracker::new();

/// Number of debug messages received, per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugStats {
    pub errors: u32,
    pub warnings: u32,
    pub info: u32,
    pub notifications: u32,
}

impl DebugStats {
    pub fn total(&self) -> u32 {
        self.errors + self.warnings + self.info + self.notifications
    }
}

struct DebugStatsTracker {
    errors: AtomicU32,
    warnings: AtomicU32,
    info: AtomicU32,
    notifications: AtomicU32,
}

impl DebugStatsTracker {
    const fn new() -> Self {
        Self {
            errors: AtomicU32::new(0),
            warnings: AtomicU32::new(0),
            info: AtomicU32::new(0),
            notifications: AtomicU32::new(0),
        }
    }

    fn record(&self, severity: LogSeverity) {
        let counter = match severity {
            LogSeverity::Error => &self.errors,
            LogSeverity::Warn => &self.warnings,
            LogSeverity::Info => &self.info,
            LogSeverity::Debug | LogSeverity::Trace => &self.notifications,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self) -> DebugStats {
        DebugStats {
            errors: self.errors.load(Ordering::Relaxed),
            warnings: self.warnings.load(Ordering::Relaxed),
            info: self.info.load(Ordering::Relaxed),
            notifications: self.notifications.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.errors.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.info.store(0, Ordering::Relaxed);
        self.notifications.store(0, Ordering::Relaxed);
    }
}

/// Log severity for a GL debug severity
pub(crate) fn classify(gl_severity: u32) -> LogSeverity {
    match gl_severity {
        glow::DEBUG_SEVERITY_HIGH => LogSeverity::Error,
        glow::DEBUG_SEVERITY_MEDIUM => LogSeverity::Warn,
        glow::DEBUG_SEVERITY_LOW => LogSeverity::Info,
        _ => LogSeverity::Trace,
    }
}

fn type_name(gl_type: u32) -> &'static str {
    match gl_type {
        glow::DEBUG_TYPE_ERROR => "error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined behavior",
        glow::DEBUG_TYPE_PORTABILITY => "portability",
        glow::DEBUG_TYPE_PERFORMANCE => "performance",
        glow::DEBUG_TYPE_MARKER => "marker",
        _ => "other",
    }
}

pub(crate) fn handle_message(_source: u32, gl_type: u32, id: u32, gl_severity: u32, message: &str) {
    let severity = classify(gl_severity);
    DEBUG_STATS.record(severity);

    match severity {
        LogSeverity::Error => gpu_error!(SOURCE, "[{}] #{} {}", type_name(gl_type), id, message),
        LogSeverity::Warn => gpu_warn!(SOURCE, "[{}] #{} {}", type_name(gl_type), id, message),
        LogSeverity::Info => gpu_info!(SOURCE, "[{}] #{} {}", type_name(gl_type), id, message),
        LogSeverity::Debug | LogSeverity::Trace => {
            gpu_trace!(SOURCE, "[{}] #{} {}", type_name(gl_type), id, message)
        }
    }
}

/// Install the debug message callback on `gl`
///
/// # Errors
///
/// `Error::InitializationFailed` if the context does not expose KHR_debug.
pub(crate) fn install(gl: &mut glow::Context) -> Result<()> {
    if !gl.supports_debug() {
        return Err(Error::InitializationFailed(
            "GL context does not support KHR_debug".to_string(),
        ));
    }

    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(|source, gl_type, id, severity, message| {
            handle_message(source, gl_type, id, severity, message)
        });
    }

    gpu_info!(SOURCE, "GL debug output enabled");
    Ok(())
}

/// Get debug message statistics since start or the last reset
pub fn get_debug_stats() -> DebugStats {
    DEBUG_STATS.get()
}

/// Reset debug message statistics
pub fn reset_debug_stats() {
    DEBUG_STATS.reset();
}

/// Print a colored summary of the debug message statistics
pub fn print_debug_stats_report() {
    let stats = DEBUG_STATS.get();
    println!("{}", "=== GL debug output ===".bold());
    println!("  {} {}", "errors:       ".red(), stats.errors);
    println!("  {} {}", "warnings:     ".yellow(), stats.warnings);
    println!("  {} {}", "info:         ".green(), stats.info);
    println!("  {} {}", "notifications:".bright_black(), stats.notifications);
    if stats.errors == 0 && stats.warnings == 0 {
        println!("  {}", "clean".green().bold());
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
