use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::polar::table::{PolarRow, PolarTable};

// ---------------------------------------------------------------------------
// Tabulated polar reader (XFLR5/XFoil-style export)
// ---------------------------------------------------------------------------

/// Header/metadata lines before the data block.
pub const HEADER_LINES: usize = 11;

/// Read a whitespace-delimited polar table.
///
/// The first [`HEADER_LINES`] lines are skipped, blank lines are ignored,
/// and every cell that fails to parse as a number becomes NaN rather than
/// an error. Columns past the ten the analysis uses are discarded.
pub fn read_polar<R: BufRead>(reader: R, name: impl Into<String>) -> io::Result<PolarTable> {
    let mut rows = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i < HEADER_LINES {
            continue;
        }
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.is_empty() {
            continue;
        }

        let num = |idx: usize| -> f64 {
            cells
                .get(idx)
                .and_then(|c| c.parse().ok())
                .unwrap_or(f64::NAN)
        };

        rows.push(PolarRow {
            alpha: num(0),
            cl: num(1),
            cd: num(2),
            cdp: num(3),
            cm: num(4),
            top_xtr: num(5),
            bot_xtr: num(6),
            cpmin: num(7),
            chinge: num(8),
            xcp: num(9),
        });
    }

    Ok(PolarTable::new(name, rows))
}

/// Read a polar file, deriving the airfoil's display name from its name.
pub fn read_polar_file(path: &str) -> io::Result<PolarTable> {
    let name = airfoil_name(path);
    let file = std::fs::File::open(path)?;
    read_polar(BufReader::new(file), name)
}

/// Display name for a polar file: the stem, truncated at the `_T1` analysis
/// marker when present ("CLARK Y AIRFOIL_T1_Re2.392_..." -> "CLARK Y AIRFOIL").
pub fn airfoil_name(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("airfoil");
    match stem.find("_T1") {
        Some(idx) => stem[..idx].to_string(),
        None => stem.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
