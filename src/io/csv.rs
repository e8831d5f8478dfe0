use std::io::{self, Write};

use crate::polar::metrics::DerivedPolarRow;
use crate::polar::table::PolarTable;
use crate::sizing::GeometryPoint;

/// Write the geometry sweep to CSV.
///
/// Columns: speed, wing_area, span, chord, reynolds
pub fn write_sweep<W: Write>(writer: &mut W, points: &[GeometryPoint]) -> io::Result<()> {
    writeln!(writer, "speed,wing_area,span,chord,reynolds")?;
    for p in points {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.0}",
            p.speed, p.wing_area, p.span, p.chord, p.reynolds
        )?;
    }
    Ok(())
}

/// Write the geometry sweep to a CSV file at the given path.
pub fn write_sweep_file(path: &str, points: &[GeometryPoint]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_sweep(&mut file, points)
}

/// Write one airfoil's polar plus its derived metrics to CSV.
///
/// Columns: alpha, cl, cd, cm, l_over_d, endurance
/// Rows with unusable drag carry NaN in the derived columns.
pub fn write_polar_metrics<W: Write>(
    writer: &mut W,
    table: &PolarTable,
    derived: &[DerivedPolarRow],
) -> io::Result<()> {
    writeln!(writer, "alpha,cl,cd,cm,l_over_d,endurance")?;
    for (row, d) in table.rows.iter().zip(derived) {
        writeln!(
            writer,
            "{:.3},{:.4},{:.5},{:.4},{:.3},{:.3}",
            row.alpha, row.cl, row.cd, row.cm, d.l_over_d, d.endurance
        )?;
    }
    Ok(())
}

/// Write polar metrics CSV to a file at the given path.
pub fn write_polar_metrics_file(
    path: &str,
    table: &PolarTable,
    derived: &[DerivedPolarRow],
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_polar_metrics(&mut file, table, derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar::metrics::derive_metrics;
    use crate::polar::table::PolarRow;

    #[test]
    fn sweep_csv_has_header_and_rows() {
        let points = vec![
            GeometryPoint { speed: 20.0, wing_area: 18.7, span: 13.7, chord: 1.37, reynolds: 1.9e6 },
            GeometryPoint { speed: 50.0, wing_area: 3.0, span: 5.5, chord: 0.55, reynolds: 1.7e6 },
        ];

        let mut buf = Vec::new();
        write_sweep(&mut buf, &points).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("speed,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("20.0000,"));
    }

    #[test]
    fn metrics_csv_matches_row_count() {
        let table = PolarTable::new(
            "t",
            vec![PolarRow {
                alpha: 2.0,
                cl: 0.4,
                cd: 0.01,
                cdp: 0.008,
                cm: -0.05,
                top_xtr: 0.6,
                bot_xtr: 1.0,
                cpmin: -0.6,
                chinge: 0.0,
                xcp: 0.28,
            }],
        );
        let derived = derive_metrics(&table);

        let mut buf = Vec::new();
        write_polar_metrics(&mut buf, &table, &derived).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("alpha,"));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("40.000")); // L/D column
    }
}
