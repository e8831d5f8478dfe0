pub mod analysis;
pub mod metrics;
pub mod table;

pub use analysis::{
    analyze, climb_performance, operating_point, AirfoilReport, ClimbPerformance,
    CruiseConditions, OperatingPoint,
};
pub use metrics::{derive_metrics, max_endurance, max_l_over_d, DerivedPolarRow};
pub use table::{PolarRow, PolarTable};
