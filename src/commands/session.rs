use std::io::{self, BufRead, Write};

use crate::domain::{Polygon, Tokens};
use crate::input::RawLines;

use super::{CommandError, CommandTable, Reply};

/// Counters for a finished command run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub executed: usize,
    pub failed: usize,
}

/// Owns the polygon collection for the whole run and answers commands
/// against it one line at a time
pub struct Session {
    polygons: Vec<Polygon>,
    table: CommandTable,
}

impl Session {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self::with_table(polygons, CommandTable::standard())
    }

    pub fn with_table(polygons: Vec<Polygon>, table: CommandTable) -> Self {
        Self { polygons, table }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Execute one command line, `None` if the line is blank
    ///
    /// Tokens left over after the handler has read its arguments are ignored.
    pub fn execute_line(&mut self, line: &str) -> Option<Result<Reply, CommandError>> {
        let mut tokens = Tokens::new(line);
        let keyword = tokens.next()?;
        Some(self.table.dispatch(&mut self.polygons, keyword, &mut tokens))
    }

    /// Answer every command in `input`, one output line per command
    ///
    /// Command failures are written as diagnostics and never stop the run;
    /// only I/O errors on either stream do. Bytes that are not UTF-8 are
    /// decoded lossily, so they reach the handlers as unknown tokens.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<RunStats> {
        let mut stats = RunStats::default();

        for (index, bytes) in RawLines::new(input).enumerate() {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            let Some(result) = self.execute_line(&line) else {
                continue;
            };
            stats.executed += 1;

            match result {
                Ok(reply) => {
                    tracing::debug!(line = index + 1, command = line.trim(), %reply, "command answered");
                    writeln!(output, "{}", reply)?;
                }
                Err(err) => {
                    stats.failed += 1;
                    tracing::debug!(line = index + 1, command = line.trim(), error = %err, "command rejected");
                    writeln!(output, "{}", err.diagnostic())?;
                }
            }
        }

        output.flush()?;
        Ok(stats)
    }
}
