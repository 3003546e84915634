pub mod config;

pub use config::{
    AircraftPerformanceConfig, AircraftSource, AircraftType, ConfigError, PerformanceGrid,
    PerformanceTable, PerformanceTables, RawPerformanceConfig, TableValues,
};
