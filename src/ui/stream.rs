use std::io::{self, Write};

use super::Spinner;

/// Writes streamed chunks to a sink, stopping the spinner on the first one.
///
/// Chunk callbacks cannot fail, so the first write error is kept and
/// returned by [`finish`](Self::finish).
pub struct StreamPrinter<'a, W: Write> {
    out: W,
    spinner: &'a Spinner,
    wrote_any: bool,
    error: Option<io::Error>,
}

impl<'a> StreamPrinter<'a, io::Stdout> {
    pub fn stdout(spinner: &'a Spinner) -> Self {
        Self::new(io::stdout(), spinner)
    }
}

impl<'a, W: Write> StreamPrinter<'a, W> {
    pub const fn new(out: W, spinner: &'a Spinner) -> Self {
        Self {
            out,
            spinner,
            wrote_any: false,
            error: None,
        }
    }

    pub fn write(&mut self, chunk: &str) {
        if !self.wrote_any {
            self.spinner.stop();
            self.wrote_any = true;
        }

        if self.error.is_none()
            && let Err(e) = self
                .out
                .write_all(chunk.as_bytes())
                .and_then(|()| self.out.flush())
        {
            self.error = Some(e);
        }
    }

    /// Stops the spinner, ends the output line and reports any write error.
    pub fn finish(mut self) -> io::Result<W> {
        self.spinner.stop();
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.wrote_any {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(self.out)
    }
}
