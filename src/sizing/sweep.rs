use crate::config::{AircraftConfig, ConfigError, G0};
use crate::sizing::mass::MassBudget;

// ---------------------------------------------------------------------------
// Candidate-speed sweep
// ---------------------------------------------------------------------------

/// Ascending candidate speeds from a stall-adjacent floor up to cruise,
/// both bounds inclusive.
#[derive(Debug, Clone)]
pub struct SpeedSweep {
    speeds: Vec<f64>, // m/s
}

impl SpeedSweep {
    /// Evenly spaced speeds over `[lower, upper]`.
    pub fn linspace(lower: f64, upper: f64, samples: usize) -> Result<Self, ConfigError> {
        if !(lower > 0.0) || !(upper > lower) {
            return Err(ConfigError::BadSweepBounds { lower, upper });
        }
        if samples < 2 {
            return Err(ConfigError::SweepTooShort(samples));
        }

        let step = (upper - lower) / (samples - 1) as f64;
        let mut speeds: Vec<f64> = (0..samples).map(|i| lower + step * i as f64).collect();
        speeds[samples - 1] = upper; // exact upper bound, no accumulation error
        Ok(SpeedSweep { speeds })
    }

    pub fn from_config(cfg: &AircraftConfig) -> Result<Self, ConfigError> {
        Self::linspace(cfg.speed_min, cfg.speed_max, cfg.speed_samples)
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// The upper bound, by construction the cruise speed.
    pub fn cruise_speed(&self) -> f64 {
        *self.speeds.last().expect("sweep has at least 2 samples")
    }
}

// ---------------------------------------------------------------------------
// Wing geometry per candidate speed
// ---------------------------------------------------------------------------

/// One sweep sample: the wing that carries the takeoff weight at this speed.
#[derive(Debug, Clone, Copy)]
pub struct GeometryPoint {
    pub speed: f64,    // m/s
    pub wing_area: f64, // m^2
    pub span: f64,     // m
    pub chord: f64,    // m, mean geometric chord
    pub reynolds: f64,
}

/// Wing geometry required for level flight at one speed.
///
/// From the lift balance m*g = CL * 0.5 * rho * V^2 * S, solved for S;
/// span and chord follow from the aspect ratio (b^2 = S*AR, c^2 = S/AR).
pub fn geometry_at(speed: f64, budget: &MassBudget, cfg: &AircraftConfig) -> GeometryPoint {
    let weight = budget.takeoff_mass * G0;
    let q_dyn = 0.5 * cfg.air_density * speed * speed;
    let wing_area = weight / (cfg.cruise_cl * q_dyn);
    let span = (wing_area * cfg.aspect_ratio).sqrt();
    let chord = (wing_area / cfg.aspect_ratio).sqrt();
    let reynolds = cfg.air_density * speed * chord / cfg.dynamic_viscosity;

    GeometryPoint { speed, wing_area, span, chord, reynolds }
}

/// Map the whole sweep to geometry points.
/// Pure and order-independent; each sample depends only on its own speed.
pub fn sweep_geometry(
    sweep: &SpeedSweep,
    budget: &MassBudget,
    cfg: &AircraftConfig,
) -> Vec<GeometryPoint> {
    sweep
        .speeds()
        .iter()
        .map(|&v| geometry_at(v, budget, cfg))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    fn fixture() -> (SpeedSweep, MassBudget, AircraftConfig) {
        let cfg = presets::light_utility();
        let budget = MassBudget::from_config(&cfg).unwrap();
        let sweep = SpeedSweep::from_config(&cfg).unwrap();
        (sweep, budget, cfg)
    }

    #[test]
    fn linspace_hits_both_bounds() {
        let sweep = SpeedSweep::linspace(10.0, 50.0, 5).unwrap();
        assert_eq!(sweep.speeds().len(), 5);
        assert!((sweep.speeds()[0] - 10.0).abs() < 1e-12);
        assert!((sweep.cruise_speed() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_rejects_degenerate_input() {
        assert!(SpeedSweep::linspace(50.0, 10.0, 5).is_err());
        assert!(SpeedSweep::linspace(0.0, 10.0, 5).is_err());
        assert!(SpeedSweep::linspace(10.0, 50.0, 1).is_err());
    }

    #[test]
    fn area_matches_lift_balance_at_50ms() {
        let (_, budget, cfg) = fixture();
        let p = geometry_at(50.0, &budget, &cfg);
        let expected =
            (budget.takeoff_mass * G0) / (cfg.cruise_cl * 0.5 * cfg.air_density * 50.0 * 50.0);
        assert!(
            (p.wing_area - expected).abs() < 1e-12,
            "area {} does not match lift balance {}",
            p.wing_area,
            expected
        );
    }

    #[test]
    fn area_strictly_decreases_with_speed() {
        let (sweep, budget, cfg) = fixture();
        let points = sweep_geometry(&sweep, &budget, &cfg);
        for pair in points.windows(2) {
            assert!(
                pair[0].wing_area > pair[1].wing_area,
                "area must shrink from {} m/s to {} m/s",
                pair[0].speed,
                pair[1].speed
            );
            assert!(pair[1].wing_area > 0.0);
        }
    }

    #[test]
    fn span_and_chord_are_consistent_with_aspect_ratio() {
        let (sweep, budget, cfg) = fixture();
        for p in sweep_geometry(&sweep, &budget, &cfg) {
            let ar_sq = (p.span * p.span) / (p.chord * p.chord);
            assert!(
                (ar_sq - cfg.aspect_ratio * cfg.aspect_ratio).abs() < 1e-6,
                "span^2/chord^2 = {} but AR^2 = {}",
                ar_sq,
                cfg.aspect_ratio * cfg.aspect_ratio
            );
            // b * c = S as well
            assert!((p.span * p.chord - p.wing_area).abs() < 1e-9);
        }
    }

    #[test]
    fn reynolds_follows_density_speed_chord() {
        let (_, budget, cfg) = fixture();
        let p = geometry_at(20.0, &budget, &cfg);
        let expected = cfg.air_density * 20.0 * p.chord / cfg.dynamic_viscosity;
        assert!((p.reynolds - expected).abs() < 1e-6);
    }
}
