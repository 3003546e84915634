use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::aircraft::config::tables::{
    invalid, PerformanceGrid, PerformanceTable, PerformanceTables,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid performance configuration: {0}")]
    ValidationError(String),
}

/// Flat YAML layout of an aircraft's climb tables.
///
/// Each table holds one row per altitude, each row one value per weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPerformanceConfig {
    /// Aircraft identification
    pub name: String,

    /// Grid axes
    pub altitudes: Vec<f64>,
    pub weights: Vec<f64>,

    /// Climb indicated airspeed (mph)
    pub ias: Vec<Vec<f64>>,
    /// Rate of climb (fpm)
    pub roc: Vec<Vec<f64>>,
    /// Fuel to altitude (gal)
    pub fuel: Vec<Vec<f64>>,
}

impl PerformanceTables {
    pub fn from_raw(raw: &RawPerformanceConfig) -> Result<Self, ConfigError> {
        let grid = PerformanceGrid::new(raw.altitudes.clone(), raw.weights.clone())?;

        let shape = grid.shape();
        validate_table("ias", &raw.ias, shape)?;
        validate_table("roc", &raw.roc, shape)?;
        validate_table("fuel", &raw.fuel, shape)?;

        PerformanceTables::new(
            grid,
            PerformanceTable::from_rows(&raw.ias)?,
            PerformanceTable::from_rows(&raw.roc)?,
            PerformanceTable::from_rows(&raw.fuel)?,
        )
    }
}

impl RawPerformanceConfig {
    /// Flattens loaded tables back into the YAML layout.
    pub fn from_tables(name: &str, tables: &PerformanceTables) -> Self {
        Self {
            name: name.to_string(),
            altitudes: tables.grid().altitudes().to_vec(),
            weights: tables.grid().weights().to_vec(),
            ias: tables.ias().to_rows(),
            roc: tables.roc().to_rows(),
            fuel: tables.fuel().to_rows(),
        }
    }
}

fn validate_table(
    name: &str,
    rows: &[Vec<f64>],
    (n_altitudes, n_weights): (usize, usize),
) -> Result<(), ConfigError> {
    if rows.len() != n_altitudes {
        return Err(invalid(format!(
            "{} has {} rows but there are {} altitudes",
            name,
            rows.len(),
            n_altitudes
        )));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_weights {
            return Err(invalid(format!(
                "{} row {} has {} values but there are {} weights",
                name,
                i,
                row.len(),
                n_weights
            )));
        }
        if let Some(value) = row.iter().find(|v| !v.is_finite()) {
            return Err(invalid(format!(
                "{} row {} contains non-finite value {}",
                name, i, value
            )));
        }
    }
    Ok(())
}
