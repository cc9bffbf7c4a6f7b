// logging.rs - Run log file support

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

/// Optional append-mode run log. When no path is given every call is a
/// no-op, so callers never branch on whether logging is enabled.
pub struct RunLog {
    writer: Option<BufWriter<std::fs::File>>,
}

impl RunLog {
    /// Open the log file (append mode) and write the run header.
    pub fn open(path: Option<&str>, command_line: &str) -> Result<Self, String> {
        let Some(path) = path else {
            return Ok(Self { writer: None });
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Failed to open log file '{}': {}", path, e))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "# Command: {}", command_line)
            .map_err(|e| format!("Log write error: {}", e))?;
        writeln!(
            writer,
            "# Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
        .map_err(|e| format!("Log write error: {}", e))?;
        writeln!(
            writer,
            "# {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .map_err(|e| format!("Log write error: {}", e))?;

        Ok(Self {
            writer: Some(writer),
        })
    }

    /// No-op log for runs without a log file.
    pub fn none() -> Self {
        Self { writer: None }
    }

    /// Append one line to the log.
    pub fn record(&mut self, line: &str) -> Result<(), String> {
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}", line).map_err(|e| format!("Log write error: {}", e))?;
        }
        Ok(())
    }

    /// Flush pending log output.
    pub fn flush(&mut self) -> Result<(), String> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush().map_err(|e| format!("Log flush error: {}", e))?;
        }
        Ok(())
    }
}
