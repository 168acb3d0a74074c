//! Print handler for configurable output.
//!
//! `print`/`println` output is the only externally visible artifact of a
//! run, so it is routed through a handler that can be swapped out:
//! - `StdoutPrintHandler`: the program's standard output (default)
//! - `BufferPrintHandler`: capture for test assertions
//!
//! Enum dispatch instead of a trait object keeps this frequently-used path
//! statically dispatched.

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print output destination.
pub enum PrintHandler {
    /// Write to stdout.
    Stdout(StdoutPrintHandler),
    /// Capture to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout(h) => h.println(msg),
            PrintHandler::Buffer(h) => h.println(msg),
        }
    }

    /// Get captured output.
    ///
    /// Returns the empty string for the stdout handler, which does not
    /// capture.
    pub fn get_output(&self) -> String {
        match self {
            PrintHandler::Stdout(_) => String::new(),
            PrintHandler::Buffer(h) => h.get_output(),
        }
    }
}

/// Create a stdout print handler.
pub fn stdout_handler() -> PrintHandler {
    PrintHandler::Stdout(StdoutPrintHandler)
}

/// Create a buffer print handler for output capture.
pub fn buffer_handler() -> PrintHandler {
    PrintHandler::Buffer(BufferPrintHandler::new())
}
