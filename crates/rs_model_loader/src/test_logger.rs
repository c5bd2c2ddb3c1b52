//! Captures log records per test thread.

use std::{cell::RefCell, sync::Once};

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(vec![]);
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let content = format!("{}", record.args());
        RECORDS.with(|records| records.borrow_mut().push((record.level(), content)));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

pub fn clear() {
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn warnings() -> Vec<String> {
    records_of(log::Level::Warn)
}

pub fn errors() -> Vec<String> {
    records_of(log::Level::Error)
}

fn records_of(level: log::Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, content)| content.clone())
            .collect()
    })
}
