//! Temperature-corrected climb performance from tabulated aircraft data.
//!
//! Standard-day IAS, rate of climb and fuel-to-altitude tables are interpolated at
//! the density altitude implied by the outside air temperature, then aggregated
//! over climb segments.

pub mod components;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftPerformanceConfig, AircraftSource, AircraftType, ClimbSegment, ConfigError,
    DataBounds, PerformanceData, PerformanceTables, StandardPerformance,
};
pub use systems::{PerformanceCalculator, SegmentDiagnosis};
pub use utils::PerformanceError;
