use crate::polar::table::PolarTable;

// ---------------------------------------------------------------------------
// Derived per-row metrics
// ---------------------------------------------------------------------------

/// Quantities derived row-wise from a polar.
///
/// Both are NaN when the drag coefficient is non-positive or either input
/// coefficient is non-finite; maximum-seeking scans must filter, never
/// coerce these to zero.
#[derive(Debug, Clone, Copy)]
pub struct DerivedPolarRow {
    pub alpha: f64,     // deg
    pub l_over_d: f64,  // cl / cd
    pub endurance: f64, // cl^3 / cd^2
}

/// Compute the derived-metric sequence parallel to the table's rows.
pub fn derive_metrics(table: &PolarTable) -> Vec<DerivedPolarRow> {
    table
        .rows
        .iter()
        .map(|r| {
            let usable = r.cd > 0.0 && r.cd.is_finite() && r.cl.is_finite();
            let (l_over_d, endurance) = if usable {
                (r.cl / r.cd, r.cl.powi(3) / (r.cd * r.cd))
            } else {
                (f64::NAN, f64::NAN)
            };
            DerivedPolarRow { alpha: r.alpha, l_over_d, endurance }
        })
        .collect()
}

/// Maximum finite L/D and the alpha where it occurs.
pub fn max_l_over_d(derived: &[DerivedPolarRow]) -> Option<(f64, f64)> {
    derived
        .iter()
        .filter(|d| d.l_over_d.is_finite())
        .max_by(|a, b| {
            a.l_over_d
                .partial_cmp(&b.l_over_d)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|d| (d.alpha, d.l_over_d))
}

/// Maximum finite, strictly positive endurance parameter and its alpha.
/// None when no row qualifies (e.g. every cd was non-positive).
pub fn max_endurance(derived: &[DerivedPolarRow]) -> Option<(f64, f64)> {
    derived
        .iter()
        .filter(|d| d.endurance.is_finite() && d.endurance > 0.0)
        .max_by(|a, b| {
            a.endurance
                .partial_cmp(&b.endurance)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|d| (d.alpha, d.endurance))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
