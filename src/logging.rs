//! Console Logging
//!
//! `tracing` subscriber whose output goes to the browser devtools console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let max_level = parse_level(level);
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

#[derive(Clone, Copy)]
struct ConsoleMakeWriter;

/// Buffers one formatted event and flushes it as a single console call
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO, buffer: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { level: *meta.level(), buffer: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = wasm_bindgen::JsValue::from_str(line.trim_end());
        if self.level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if self.level > Level::INFO {
            web_sys::console::debug_1(&message);
        } else {
            web_sys::console::log_1(&message);
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
