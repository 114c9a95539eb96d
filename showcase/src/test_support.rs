//! Test-only helpers for capturing demo output.

use std::io::{self, Write};

use anyhow::Result;

/// Split captured output into owned lines (without terminators).
pub fn lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run a demo against an in-memory buffer and return its lines.
pub fn capture<F>(demo: F) -> Result<Vec<String>>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut out = Vec::new();
    demo(&mut out)?;
    Ok(lines(&out))
}

/// Separator line made of `width` slashes.
pub fn separator(width: usize) -> String {
    "/".repeat(width)
}

/// Writer that rejects every write.
pub struct ClosedWriter;

impl Write for ClosedWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "writer closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
