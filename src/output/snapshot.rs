//! Position snapshot output
//!
//! The rendering side of the original system is a consumer that reads a
//! snapshot of positions; here that consumer is a CSV writer. Rows are
//! index-aligned with construction order so downstream plotting can track
//! individual beads across snapshots.

use std::io::{self, Write};

/// Writes `step,index,x,y` rows, header once per writer.
pub struct SnapshotWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Append one snapshot of the given positions at `step`.
    pub fn write(&mut self, step: usize, positions: &[(f64, f64)]) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "step,index,x,y")?;
            self.header_written = true;
        }
        for (i, (x, y)) in positions.iter().enumerate() {
            writeln!(self.out, "{},{},{},{}", step, i, x, y)?;
        }
        self.out.flush()
    }
}
