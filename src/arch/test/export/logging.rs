use core::fmt;
use core::fmt::Write;
use std::boxed::Box;
use std::print;
use crate::logging::{Logger, Severity, set_logger};

pub struct StdoutLogger;

impl fmt::Write for StdoutLogger {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);

        Ok(())
    }
}

impl Logger for StdoutLogger {
    fn log(&mut self, severity: Severity, args: fmt::Arguments) {
        let (color, severity_str) = match severity {
            Severity::Debug => ("\x1b[90m", "debug"),
            Severity::Info => ("\x1b[37m", "info"),
            Severity::Notice => ("\x1b[97m", "notice"),
            Severity::Warning => ("\x1b[93m", "warning"),
            Severity::Error => ("\x1b[31m", "error"),
            Severity::Critical => ("\x1b[1;31m", "critic."),
            Severity::Alert => ("\x1b[1;97;41m", "ALERT"),
            Severity::Emergency => ("\x1b[1;93;41m", "EMERG."),
        };

        let _ = write!(self, "{}{:>7}: ", color, severity_str);
        let _ = self.write_fmt(args);
        let _ = write!(self, "\x1b[0m\n");
    }
}

#[ctor::ctor]
fn init() {
    set_logger(Box::leak(Box::new(StdoutLogger)));
}
