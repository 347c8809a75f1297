use std::io::{self, Write};

use crate::calibrator::Bounds;

/// Receives the running extremes after every folded sample.
pub trait Progress {
    fn update(&mut self, iteration: usize, bounds: &Bounds) -> io::Result<()>;

    /// Called once when sampling stops, before the offset is reported.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rewrites a single terminal line in place for each update.
pub struct ConsoleProgress<W: Write> {
    out: W,
    last_width: usize,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_width: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn update(&mut self, _iteration: usize, bounds: &Bounds) -> io::Result<()> {
        let line = bounds.to_string();
        // pad over leftovers from a longer previous line
        let pad = self.last_width.saturating_sub(line.len());
        write!(self.out, "{}{:pad$}\r", line, "", pad = pad)?;
        self.last_width = line.len();
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Sends progress to the log instead of the terminal.
#[derive(Debug)]
pub struct TracingProgress {
    every: usize,
}

impl TracingProgress {
    /// Log one line per `every` samples.
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Progress for TracingProgress {
    fn update(&mut self, iteration: usize, bounds: &Bounds) -> io::Result<()> {
        if iteration % self.every == 0 {
            tracing::info!(
                iteration,
                min = %bounds.min,
                max = %bounds.max,
                offset = %bounds.offset(),
                "Calibration progress"
            );
        }
        Ok(())
    }
}
