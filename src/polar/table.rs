// ---------------------------------------------------------------------------
// Tabulated airfoil polar
// ---------------------------------------------------------------------------

/// One polar table row. Cells the source file could not parse are NaN.
#[derive(Debug, Clone, Copy)]
pub struct PolarRow {
    pub alpha: f64,   // angle of attack, deg
    pub cl: f64,      // lift coefficient
    pub cd: f64,      // total drag coefficient
    pub cdp: f64,     // profile drag coefficient
    pub cm: f64,      // moment coefficient
    pub top_xtr: f64, // upper-surface transition location
    pub bot_xtr: f64, // lower-surface transition location
    pub cpmin: f64,   // minimum pressure coefficient
    pub chinge: f64,  // hinge moment coefficient
    pub xcp: f64,     // center-of-pressure location
}

/// One airfoil's polar: rows ordered by increasing angle of attack.
#[derive(Debug, Clone)]
pub struct PolarTable {
    pub name: String,
    pub rows: Vec<PolarRow>,
}

impl PolarTable {
    pub fn new(name: impl Into<String>, rows: Vec<PolarRow>) -> Self {
        PolarTable { name: name.into(), rows }
    }

    /// Maximum finite lift coefficient and the alpha where it occurs.
    pub fn max_cl(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter(|r| r.cl.is_finite())
            .max_by(|a, b| a.cl.partial_cmp(&b.cl).unwrap_or(std::cmp::Ordering::Equal))
            .map(|r| (r.alpha, r.cl))
    }

    /// Longest leading run of rows with finite, non-decreasing cl.
    ///
    /// Interpolating cl back to alpha is only well defined while cl grows
    /// with alpha; real polars break that near stall. This is the region the
    /// operating-point search is allowed to use.
    pub fn pre_stall(&self) -> &[PolarRow] {
        let mut end = 0;
        let mut prev_cl = f64::NEG_INFINITY;
        for row in &self.rows {
            if !row.cl.is_finite() || !row.alpha.is_finite() || row.cl < prev_cl {
                break;
            }
            prev_cl = row.cl;
            end += 1;
        }
        &self.rows[..end]
    }

    /// Whether the whole table satisfies the monotonic-cl precondition.
    pub fn cl_is_monotonic(&self) -> bool {
        self.pre_stall().len() == self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
