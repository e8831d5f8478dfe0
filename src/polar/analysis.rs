use crate::config::{AircraftConfig, G0};
use crate::polar::metrics::{self, DerivedPolarRow};
use crate::polar::table::PolarTable;
use crate::sizing::Sizing;

// ---------------------------------------------------------------------------
// Linear interpolation with boundary clamp
// ---------------------------------------------------------------------------

/// Interpolate `points` (sorted ascending by x) at `x`.
///
/// Outside the sampled range the nearest boundary value is returned; callers
/// that need strict bounds-checking validate separately. Exact at sample
/// points.
fn interp_clamped(points: &[(f64, f64)], x: f64) -> f64 {
    let (x_first, y_first) = match points.first() {
        Some(&p) => p,
        None => return f64::NAN,
    };
    let &(x_last, y_last) = points.last().expect("non-empty");

    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 == x0 {
                return y0;
            }
            let t = (x - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    y_last
}

// ---------------------------------------------------------------------------
// Cruise conditions shared by every airfoil's analysis
// ---------------------------------------------------------------------------

/// Read-only sizing outputs the polar analysis needs.
#[derive(Debug, Clone, Copy)]
pub struct CruiseConditions {
    pub takeoff_weight: f64,    // N
    pub cruise_wing_area: f64,  // m^2
    pub air_density: f64,       // kg/m^3
    pub section_cl_target: f64,
}

impl CruiseConditions {
    pub fn from_sizing(sizing: &Sizing, cfg: &AircraftConfig) -> Self {
        CruiseConditions {
            takeoff_weight: sizing.budget.takeoff_mass * G0,
            cruise_wing_area: sizing.cruise_point().wing_area,
            air_density: cfg.air_density,
            section_cl_target: sizing.section_cl_target,
        }
    }
}

// ---------------------------------------------------------------------------
// Operating point at the target section lift coefficient
// ---------------------------------------------------------------------------

/// Where a polar meets the target section cl, and the L/D it pays there.
#[derive(Debug, Clone, Copy)]
pub struct OperatingPoint {
    pub alpha: f64,    // deg
    pub l_over_d: f64,
}

/// Locate the angle of attack where cl equals `target_cl`, then the L/D at
/// that alpha, both by clamped linear interpolation.
///
/// Precondition: cl non-decreasing with alpha; only the table's monotonic
/// pre-stall prefix is searched, so post-stall rows never corrupt the
/// inversion. Targets outside the prefix's cl range clamp to its boundary.
/// None when the table has no usable prefix.
pub fn operating_point(
    table: &PolarTable,
    derived: &[DerivedPolarRow],
    target_cl: f64,
) -> Option<OperatingPoint> {
    let prefix = table.pre_stall();
    if prefix.is_empty() {
        return None;
    }

    let cl_to_alpha: Vec<(f64, f64)> = prefix.iter().map(|r| (r.cl, r.alpha)).collect();
    let alpha = interp_clamped(&cl_to_alpha, target_cl);

    let ld_series: Vec<(f64, f64)> = derived
        .iter()
        .filter(|d| d.alpha.is_finite() && d.l_over_d.is_finite())
        .map(|d| (d.alpha, d.l_over_d))
        .collect();
    let l_over_d = interp_clamped(&ld_series, alpha);

    Some(OperatingPoint { alpha, l_over_d })
}

// ---------------------------------------------------------------------------
// Climb performance from the endurance-parameter extremum
// ---------------------------------------------------------------------------

/// Best-climb estimate for one airfoil under the shared cruise conditions.
#[derive(Debug, Clone, Copy)]
pub struct ClimbPerformance {
    pub endurance_max: f64, // cl^3/cd^2 at its maximum
    pub alpha: f64,         // deg, where the maximum occurs
    pub climb_rate: f64,    // m/s
}

/// Maximum rate of climb from the cl^3/cd^2 extremum:
/// RC = sqrt( (W/S) * (2/rho) * (1/E_max) ), the speed at which minimum
/// required power balances available climb power.
///
/// None when no row has a finite, positive endurance parameter.
pub fn climb_performance(
    derived: &[DerivedPolarRow],
    conditions: &CruiseConditions,
) -> Option<ClimbPerformance> {
    let (alpha, endurance_max) = metrics::max_endurance(derived)?;
    let wing_loading = conditions.takeoff_weight / conditions.cruise_wing_area;
    let climb_rate =
        (wing_loading * (2.0 / conditions.air_density) * (1.0 / endurance_max)).sqrt();

    Some(ClimbPerformance { endurance_max, alpha, climb_rate })
}

// ---------------------------------------------------------------------------
// Per-airfoil comparison record
// ---------------------------------------------------------------------------

/// Everything the comparison reports about one airfoil.
/// Records are independent across airfoils; extrema pairs are (alpha, value).
#[derive(Debug, Clone)]
pub struct AirfoilReport {
    pub name: String,
    pub max_l_over_d: Option<(f64, f64)>,
    pub max_cl: Option<(f64, f64)>,
    pub operating_point: Option<OperatingPoint>,
    pub climb: Option<ClimbPerformance>,
}

/// Analyze one airfoil: derive metrics, then the operating point and climb
/// estimate that consume them.
pub fn analyze(table: &PolarTable, conditions: &CruiseConditions) -> AirfoilReport {
    let derived = metrics::derive_metrics(table);

    AirfoilReport {
        name: table.name.clone(),
        max_l_over_d: metrics::max_l_over_d(&derived),
        max_cl: table.max_cl(),
        operating_point: operating_point(table, &derived, conditions.section_cl_target),
        climb: climb_performance(&derived, conditions),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar::metrics::derive_metrics;
    use crate::polar::table::PolarRow;

    fn row(alpha: f64, cl: f64, cd: f64) -> PolarRow {
        PolarRow {
            alpha,
            cl,
            cd,
            cdp: cd,
            cm: -0.05,
            top_xtr: 1.0,
            bot_xtr: 1.0,
            cpmin: 0.0,
            chinge: 0.0,
            xcp: 0.25,
        }
    }

    fn conditions() -> CruiseConditions {
        CruiseConditions {
            takeoff_weight: 425.0 * 9.81,
            cruise_wing_area: 3.0,
            air_density: 1.1117,
            section_cl_target: 0.5,
        }
    }

    #[test]
    fn target_between_rows_interpolates_linearly() {
        // (2deg, cl 0.40, L/D 40) and (4deg, cl 0.60, L/D 50): target 0.50
        // sits halfway, so alpha = 3 deg and L/D = 45.
        let table = PolarTable::new("t", vec![row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012)]);
        let derived = derive_metrics(&table);
        let op = operating_point(&table, &derived, 0.5).unwrap();
        assert!((op.alpha - 3.0).abs() < 1e-9, "alpha = {}", op.alpha);
        assert!((op.l_over_d - 45.0).abs() < 1e-9, "L/D = {}", op.l_over_d);
    }

    #[test]
    fn target_at_a_sample_point_is_exact() {
        let table = PolarTable::new(
            "t",
            vec![row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012), row(6.0, 0.80, 0.016)],
        );
        let derived = derive_metrics(&table);
        let op = operating_point(&table, &derived, 0.60).unwrap();
        assert!((op.alpha - 4.0).abs() < 1e-12);
        assert!((op.l_over_d - 0.60 / 0.012).abs() < 1e-9);
    }

    #[test]
    fn target_outside_range_clamps_to_boundary() {
        let table = PolarTable::new("t", vec![row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012)]);
        let derived = derive_metrics(&table);

        let low = operating_point(&table, &derived, 0.1).unwrap();
        assert!((low.alpha - 2.0).abs() < 1e-12);

        let high = operating_point(&table, &derived, 0.9).unwrap();
        assert!((high.alpha - 4.0).abs() < 1e-12);
    }

    #[test]
    fn post_stall_rows_do_not_corrupt_the_inversion() {
        let table = PolarTable::new(
            "stalling",
            vec![
                row(2.0, 0.40, 0.01),
                row(4.0, 0.60, 0.012),
                row(6.0, 0.50, 0.03), // stalled: cl falls back through 0.5
            ],
        );
        let derived = derive_metrics(&table);
        let op = operating_point(&table, &derived, 0.5).unwrap();
        assert!((op.alpha - 3.0).abs() < 1e-9, "must use the pre-stall branch");
    }

    #[test]
    fn empty_table_has_no_operating_point() {
        let table = PolarTable::new("empty", vec![]);
        let derived = derive_metrics(&table);
        assert!(operating_point(&table, &derived, 0.5).is_none());
    }

    #[test]
    fn climb_rate_matches_formula() {
        let table = PolarTable::new("t", vec![row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012)]);
        let derived = derive_metrics(&table);
        let cond = conditions();
        let climb = climb_performance(&derived, &cond).unwrap();

        let e_max = 0.60f64.powi(3) / (0.012f64 * 0.012);
        assert!((climb.endurance_max - e_max).abs() < 1e-9);
        assert!((climb.alpha - 4.0).abs() < 1e-12);

        let expected = ((cond.takeoff_weight / cond.cruise_wing_area)
            * (2.0 / cond.air_density)
            * (1.0 / e_max))
            .sqrt();
        assert!((climb.climb_rate - expected).abs() < 1e-9);
    }

    #[test]
    fn climb_is_undefined_when_drag_is_never_positive() {
        let table = PolarTable::new("broken", vec![row(2.0, 0.4, 0.0), row(4.0, 0.6, -0.01)]);
        let derived = derive_metrics(&table);
        assert!(climb_performance(&derived, &conditions()).is_none());
    }

    #[test]
    fn climb_is_invariant_under_row_permutation() {
        let rows = vec![row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012), row(0.0, 0.20, 0.009)];
        let mut shuffled = rows.clone();
        shuffled.rotate_left(1);

        let cond = conditions();
        let a = climb_performance(&derive_metrics(&PolarTable::new("a", rows)), &cond).unwrap();
        let b =
            climb_performance(&derive_metrics(&PolarTable::new("b", shuffled)), &cond).unwrap();
        assert!((a.climb_rate - b.climb_rate).abs() < 1e-12);
        assert!((a.alpha - b.alpha).abs() < 1e-12);
    }

    #[test]
    fn analyze_fills_every_statistic() {
        let table = PolarTable::new(
            "CLARK Y",
            vec![row(0.0, 0.20, 0.009), row(2.0, 0.40, 0.01), row(4.0, 0.60, 0.012)],
        );
        let report = analyze(&table, &conditions());

        assert_eq!(report.name, "CLARK Y");
        let (ld_alpha, ld) = report.max_l_over_d.unwrap();
        assert!((ld - 50.0).abs() < 1e-9);
        assert!((ld_alpha - 4.0).abs() < 1e-12);
        let (cl_alpha, cl) = report.max_cl.unwrap();
        assert!((cl - 0.60).abs() < 1e-12);
        assert!((cl_alpha - 4.0).abs() < 1e-12);
        assert!(report.operating_point.is_some());
        assert!(report.climb.is_some());
    }
}
