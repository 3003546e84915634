mod aircraft;
mod loader;
mod tables;

pub use aircraft::{AircraftPerformanceConfig, AircraftSource, AircraftType};
pub use loader::{ConfigError, RawPerformanceConfig};
pub use tables::{PerformanceGrid, PerformanceTable, PerformanceTables, TableValues};
