//! Where `print` output goes.
//!
//! The CLI writes to stdout; tests and embedding hosts capture into a
//! buffer. Dispatch is a closed enum rather than a trait object.

use std::sync::Arc;

use parking_lot::Mutex;

/// Captures printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return everything captured so far and empty the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

pub enum PrintHandler {
    Stdout,
    Buffer(BufferPrintHandler),
    /// Discards output.
    Silent,
}

impl PrintHandler {
    pub fn println(&self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(buffer) => buffer.println(line),
            PrintHandler::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.output(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    pub fn take(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.take(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

/// Print handler shared between a session and the code holding its output.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
