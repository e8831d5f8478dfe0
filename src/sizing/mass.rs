use crate::config::{AircraftConfig, ConfigError};

// ---------------------------------------------------------------------------
// Mass budget
// ---------------------------------------------------------------------------

/// Takeoff mass and its components, derived from the fraction model.
///
/// With Wto = Wpay + f_empty*Wto + f_fuel*Wto, takeoff mass follows as
/// Wto = Wpay / (1 - f_empty - f_fuel).
#[derive(Debug, Clone, Copy)]
pub struct MassBudget {
    pub takeoff_mass: f64, // kg
    pub empty_mass: f64,   // kg
    pub fuel_mass: f64,    // kg
    pub payload_mass: f64, // kg
}

impl MassBudget {
    /// Derive the budget from the configured payload mass and fractions.
    /// Pure; fails if the implied payload fraction is non-positive.
    pub fn from_config(cfg: &AircraftConfig) -> Result<Self, ConfigError> {
        let payload_fraction = cfg.payload_fraction();
        if payload_fraction <= 0.0 {
            return Err(ConfigError::InvalidMassFractions {
                empty: cfg.empty_mass_fraction,
                fuel: cfg.fuel_mass_fraction,
            });
        }

        let takeoff_mass = cfg.payload_mass / payload_fraction;
        Ok(MassBudget {
            takeoff_mass,
            empty_mass: cfg.empty_mass_fraction * takeoff_mass,
            fuel_mass: cfg.fuel_mass_fraction * takeoff_mass,
            payload_mass: cfg.payload_mass,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    #[test]
    fn takeoff_mass_from_85kg_payload() {
        // 0.5/0.3 fractions leave 0.2 for payload: 85 / 0.2 = 425 kg
        let budget = MassBudget::from_config(&presets::light_utility()).unwrap();
        assert!((budget.takeoff_mass - 425.0).abs() < 1e-9);
    }

    #[test]
    fn components_sum_to_takeoff_mass() {
        let budget = MassBudget::from_config(&presets::light_utility()).unwrap();
        let sum = budget.empty_mass + budget.fuel_mass + budget.payload_mass;
        assert!(
            (sum - budget.takeoff_mass).abs() < 1e-9,
            "components sum to {} but takeoff mass is {}",
            sum,
            budget.takeoff_mass
        );
    }

    #[test]
    fn sum_holds_for_other_fraction_sets() {
        let mut cfg = presets::light_utility();
        cfg.empty_mass_fraction = 0.62;
        cfg.fuel_mass_fraction = 0.17;
        let budget = MassBudget::from_config(&cfg).unwrap();
        let sum = budget.empty_mass + budget.fuel_mass + budget.payload_mass;
        assert!((sum - budget.takeoff_mass).abs() < 1e-9);
    }

    #[test]
    fn saturated_fractions_fail() {
        let mut cfg = presets::light_utility();
        cfg.empty_mass_fraction = 0.6;
        cfg.fuel_mass_fraction = 0.4;
        assert!(MassBudget::from_config(&cfg).is_err());
    }
}
