use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where the UI sends recoverable failures. Reporting never aborts the
/// caller; what an `Error` means for the process is up to the owner.
pub trait ErrorSink {
    fn report(&self, severity: Severity, message: &str);
}

impl<T: ErrorSink + ?Sized> ErrorSink for Rc<T> {
    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message);
    }
}

/// Forwards to the `log` facade and latches a shutdown request on `Error`.
#[derive(Debug, Default)]
pub struct LogSink {
    shutdown_requested: Cell<bool>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested.get()
    }
}

impl ErrorSink for LogSink {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error => {
                log::error!("{}", message);
                self.shutdown_requested.set(true);
            }
        }
    }
}
