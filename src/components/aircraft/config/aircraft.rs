use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::aircraft::config::{ConfigError, PerformanceTables, RawPerformanceConfig};

/// Climb performance configuration of one aircraft.
///
/// Serde goes through the flat `RawPerformanceConfig` layout, so deserialized
/// tables are validated exactly like a loaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPerformanceConfig", into = "RawPerformanceConfig")]
pub struct AircraftPerformanceConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft represented as an enum e.g. Cessna172 or a custom name.
    pub ac_type: AircraftType,
    /// Climb tables (IAS, ROC, fuel to altitude) over the altitude/weight grid.
    pub tables: PerformanceTables,
}

impl Default for AircraftPerformanceConfig {
    /// The `Cessna172` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::from_programmed(AircraftType::Cessna172)
    }
}

impl AircraftPerformanceConfig {
    /// Creates a new performance configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the tables are built in
    ///              (`Programmed`) or loaded from a YAML file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to
    /// load or its tables are incomplete.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates a configuration for predefined (programmed) types.
    ///
    /// Custom names without a file reuse the built-in trainer tables.
    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna172 => Self {
                name: "Cessna172".to_string(),
                ac_type: AircraftType::Cessna172,
                tables: PerformanceTables::cessna_172(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                tables: PerformanceTables::cessna_172(),
            },
        }
    }

    /// Creates a configuration by reading a YAML file.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!(
            "Loaded climb tables for {} from {}",
            config.name,
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Parses and validates a YAML document in the `RawPerformanceConfig` layout.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawPerformanceConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    fn from_raw_config(raw: RawPerformanceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            name: raw.name.clone(),
            ac_type: AircraftType::Custom(raw.name.clone()),
            tables: PerformanceTables::from_raw(&raw)?,
        })
    }

    pub fn cessna_172() -> Self {
        Self::from_programmed(AircraftType::Cessna172)
    }
}

impl TryFrom<RawPerformanceConfig> for AircraftPerformanceConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPerformanceConfig) -> Result<Self, Self::Error> {
        Self::from_raw_config(raw)
    }
}

impl From<AircraftPerformanceConfig> for RawPerformanceConfig {
    fn from(config: AircraftPerformanceConfig) -> Self {
        RawPerformanceConfig::from_tables(&config.name, &config.tables)
    }
}

/// Source for the performance configuration.
/// Can either be built in (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Cessna172,
    Custom(String),
}
