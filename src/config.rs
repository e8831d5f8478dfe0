use thiserror::Error;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.81; // gravitational acceleration, m/s^2

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Fatal configuration problems, reported before any sizing runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mass fractions leave no payload share: empty {empty} + fuel {fuel} >= 1")]
    InvalidMassFractions { empty: f64, fuel: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("speed sweep bounds must satisfy 0 < lower < upper, got {lower}..{upper} m/s")]
    BadSweepBounds { lower: f64, upper: f64 },
    #[error("speed sweep needs at least 2 samples, got {0}")]
    SweepTooShort(usize),
}

// ---------------------------------------------------------------------------
// Sizing assumptions
// ---------------------------------------------------------------------------

/// Immutable sizing assumptions for one aircraft class.
///
/// Mass fractions are fractions of takeoff mass; the payload fraction is
/// whatever `1 - empty - fuel` leaves over and must stay positive.
#[derive(Debug, Clone)]
pub struct AircraftConfig {
    pub payload_mass: f64,            // kg
    pub empty_mass_fraction: f64,     // of takeoff mass
    pub fuel_mass_fraction: f64,      // of takeoff mass
    pub air_density: f64,             // kg/m^3
    pub dynamic_viscosity: f64,       // Pa*s
    pub aspect_ratio: f64,
    pub cruise_cl: f64,               // aircraft-level cruise lift coefficient
    pub wing_efficiency: f64,         // wing installation factor
    pub interference_efficiency: f64, // 3D-to-2D / interference factor
    pub speed_min: f64,               // m/s, stall-adjacent lower bound
    pub speed_max: f64,               // m/s, cruise speed
    pub speed_samples: usize,
}

impl AircraftConfig {
    /// Check every constraint the sizing equations rely on.
    /// Returns the first violation; nothing downstream clamps silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("payload mass", self.payload_mass),
            ("air density", self.air_density),
            ("dynamic viscosity", self.dynamic_viscosity),
            ("aspect ratio", self.aspect_ratio),
            ("cruise lift coefficient", self.cruise_cl),
            ("wing installation efficiency", self.wing_efficiency),
            ("interference efficiency", self.interference_efficiency),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.payload_fraction() <= 0.0 {
            return Err(ConfigError::InvalidMassFractions {
                empty: self.empty_mass_fraction,
                fuel: self.fuel_mass_fraction,
            });
        }

        if !(self.speed_min > 0.0) || !(self.speed_max > self.speed_min) {
            return Err(ConfigError::BadSweepBounds {
                lower: self.speed_min,
                upper: self.speed_max,
            });
        }
        if self.speed_samples < 2 {
            return Err(ConfigError::SweepTooShort(self.speed_samples));
        }

        Ok(())
    }

    /// Payload share of takeoff mass implied by the empty/fuel fractions.
    pub fn payload_fraction(&self) -> f64 {
        1.0 - self.empty_mass_fraction - self.fuel_mass_fraction
    }

    /// Target airfoil-section lift coefficient.
    ///
    /// The aircraft-level cruise CL is corrected for wing installation, then
    /// for interference/3D effects, to get the 2D value a polar reports.
    pub fn section_cl_target(&self) -> f64 {
        self.cruise_cl / self.wing_efficiency / self.interference_efficiency
    }
}

// ---------------------------------------------------------------------------
// Preset configurations
// ---------------------------------------------------------------------------

pub mod presets {
    use super::AircraftConfig;

    /// 85 kg payload light utility aircraft, ~1100 m density altitude.
    pub fn light_utility() -> AircraftConfig {
        AircraftConfig {
            payload_mass: 85.0,
            empty_mass_fraction: 0.5,
            fuel_mass_fraction: 0.3,
            air_density: 1.1117,
            dynamic_viscosity: 1.8e-5,
            aspect_ratio: 10.0,
            cruise_cl: 0.5,
            wing_efficiency: 0.95,
            interference_efficiency: 0.9,
            speed_min: 50.0 / 3.6,  // 50 km/h takeoff floor
            speed_max: 180.0 / 3.6, // 180 km/h cruise
            speed_samples: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
