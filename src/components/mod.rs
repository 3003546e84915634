pub mod aircraft;
pub mod performance;

pub use aircraft::{
    AircraftPerformanceConfig, AircraftSource, AircraftType, ConfigError, PerformanceGrid,
    PerformanceTable, PerformanceTables, RawPerformanceConfig, TableValues,
};
pub use performance::{ClimbSegment, DataBounds, PerformanceData, StandardPerformance};
