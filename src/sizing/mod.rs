pub mod mass;
pub mod sweep;

pub use mass::MassBudget;
pub use sweep::{geometry_at, sweep_geometry, GeometryPoint, SpeedSweep};

use crate::config::{AircraftConfig, ConfigError};

// ---------------------------------------------------------------------------
// Full sizing pass
// ---------------------------------------------------------------------------

/// Result of one sizing run: mass budget plus the geometry sweep.
/// Immutable once computed; the cruise sample anchors the polar analysis.
#[derive(Debug, Clone)]
pub struct Sizing {
    pub budget: MassBudget,
    pub points: Vec<GeometryPoint>,
    pub section_cl_target: f64,
}

impl Sizing {
    /// Geometry at the sweep's upper bound (the cruise speed).
    pub fn cruise_point(&self) -> &GeometryPoint {
        self.points.last().expect("sweep has at least 2 samples")
    }

    /// Geometry at the sweep's lower bound, where Reynolds number is lowest.
    pub fn slowest_point(&self) -> &GeometryPoint {
        self.points.first().expect("sweep has at least 2 samples")
    }
}

/// Validate the configuration, then run the mass budget and geometry sweep.
/// Configuration errors surface here, before any numbers are produced.
pub fn size(cfg: &AircraftConfig) -> Result<Sizing, ConfigError> {
    cfg.validate()?;

    let budget = MassBudget::from_config(cfg)?;
    let sweep = SpeedSweep::from_config(cfg)?;
    let points = sweep_geometry(&sweep, &budget, cfg);

    Ok(Sizing {
        budget,
        points,
        section_cl_target: cfg.section_cl_target(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
