//! Test-only logger that records what the current thread logs.
//!
//! Records are kept per thread, so parallel tests never see each other's
//! output.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, Log, Metadata, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Captured {
    pub level: Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = Captured {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        };
        RECORDS.with(|r| r.borrow_mut().push(captured));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Runs `f` and returns its result with everything it logged on this thread.
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let records = RECORDS.with(|r| r.take());
    (out, records)
}

/// Only the `Warn` records.
pub(crate) fn warnings(records: &[Captured]) -> Vec<&Captured> {
    records.iter().filter(|r| r.level == Level::Warn).collect()
}
