//! Polygon source ingestion

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::domain::{ParseError, Polygon};

/// A polygon line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: ParseError,
}

/// Polygons read from a source, in input order
#[derive(Debug, Default)]
pub struct LoadedPolygons {
    pub polygons: Vec<Polygon>,
    pub skipped: Vec<SkippedLine>,
}

/// Byte lines of a reader with `\n` or `\r\n` removed
///
/// Unlike [`BufRead::lines`] the bytes are not required to be UTF-8, so one
/// undecodable line cannot end the iteration. Only read errors are returned.
pub struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Parse polygon definitions, one per line
///
/// # Algorithm
/// 1. Blank lines are ignored
/// 2. Each other line is parsed on its own; trailing tokens after the last
///    coordinate pair are ignored
/// 3. A line that fails to parse, including one that is not UTF-8, is
///    recorded and skipped, and reading resumes on the next line
pub fn read_polygons<R: BufRead>(reader: R) -> io::Result<LoadedPolygons> {
    let mut loaded = LoadedPolygons::default();

    for (index, bytes) in RawLines::new(reader).enumerate() {
        let bytes = bytes?;
        let parsed = match std::str::from_utf8(&bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.parse::<Polygon>(),
            Err(_) => Err(ParseError::InvalidEncoding),
        };

        match parsed {
            Ok(polygon) => loaded.polygons.push(polygon),
            Err(reason) => {
                tracing::warn!(line = index + 1, %reason, "skipping malformed polygon");
                loaded.skipped.push(SkippedLine {
                    line: index + 1,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        polygons = loaded.polygons.len(),
        skipped = loaded.skipped.len(),
        "polygon source loaded"
    );
    Ok(loaded)
}

/// Open and parse a polygon file
pub fn load_polygons(path: &Path) -> io::Result<LoadedPolygons> {
    let file = File::open(path)?;
    read_polygons(BufReader::new(file))
}
