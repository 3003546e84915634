use nalgebra::DMatrix;
use tracing::warn;

use crate::components::aircraft::config::ConfigError;
use crate::systems::bilinear_interpolate;
use crate::utils::PerformanceError;

/// Pressure altitudes of the built-in trainer table (ft).
const CESSNA_172_ALTITUDES: [f64; 4] = [0.0, 5000.0, 10000.0, 15000.0];
/// Gross weights of the built-in trainer table (lbs).
const CESSNA_172_WEIGHTS: [f64; 3] = [1700.0, 2000.0, 2300.0];

// Rows are altitudes, columns are weights.
const CESSNA_172_IAS: [[f64; 3]; 4] = [
    [75.0, 77.0, 80.0],
    [73.0, 76.0, 78.0],
    [71.0, 74.0, 77.0],
    [70.0, 73.0, 76.0],
];
const CESSNA_172_ROC: [[f64; 3]; 4] = [
    [1085.0, 840.0, 645.0],
    [825.0, 610.0, 435.0],
    [570.0, 380.0, 230.0],
    [315.0, 155.0, 22.0],
];
const CESSNA_172_FUEL: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.9, 2.2, 2.6],
    [2.9, 3.6, 4.8],
    [4.4, 6.3, 11.5],
];

/// Reference grid shared by every performance table of an aircraft.
///
/// Both axes hold at least two finite, strictly increasing points.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceGrid {
    altitudes: Vec<f64>,
    weights: Vec<f64>,
}

impl PerformanceGrid {
    pub fn new(altitudes: Vec<f64>, weights: Vec<f64>) -> Result<Self, ConfigError> {
        validate_axis("altitudes", &altitudes)?;
        validate_axis("weights", &weights)?;
        Ok(Self { altitudes, weights })
    }

    /// Pressure altitudes (ft).
    pub fn altitudes(&self) -> &[f64] {
        &self.altitudes
    }

    /// Gross weights (lbs).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// `(altitudes, weights)` point counts, the shape every table must have.
    pub fn shape(&self) -> (usize, usize) {
        (self.altitudes.len(), self.weights.len())
    }

    /// Lowest and highest altitude on the grid (ft).
    pub fn altitude_range(&self) -> (f64, f64) {
        axis_range(&self.altitudes)
    }

    /// Lowest and highest weight on the grid (lbs).
    pub fn weight_range(&self) -> (f64, f64) {
        axis_range(&self.weights)
    }

    pub fn contains_altitude(&self, altitude_ft: f64) -> bool {
        let (min, max) = self.altitude_range();
        min <= altitude_ft && altitude_ft <= max
    }

    pub fn contains_weight(&self, weight_lbs: f64) -> bool {
        let (min, max) = self.weight_range();
        min <= weight_lbs && weight_lbs <= max
    }
}

fn axis_range(axis: &[f64]) -> (f64, f64) {
    match (axis.first(), axis.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => (f64::NAN, f64::NAN),
    }
}

pub(super) fn invalid(message: String) -> ConfigError {
    warn!("Rejecting performance config: {}", message);
    ConfigError::ValidationError(message)
}

fn validate_axis(name: &str, axis: &[f64]) -> Result<(), ConfigError> {
    if axis.len() < 2 {
        return Err(invalid(format!(
            "{} needs at least two points, got {}",
            name,
            axis.len()
        )));
    }
    if let Some(value) = axis.iter().find(|v| !v.is_finite()) {
        return Err(invalid(format!("{} contains non-finite value {}", name, value)));
    }
    if let Some(pair) = axis.windows(2).find(|pair| pair[1] <= pair[0]) {
        return Err(invalid(format!(
            "{} must be strictly increasing ({} then {})",
            name, pair[0], pair[1]
        )));
    }
    Ok(())
}

/// A scalar metric tabulated over a [`PerformanceGrid`].
///
/// Values are stored in a matrix indexed by `(altitude index, weight index)`, so an
/// exact grid point is a direct lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTable {
    values: DMatrix<f64>,
}

impl PerformanceTable {
    /// Builds a table from altitude rows of weight columns.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` for an empty, ragged or non-finite table.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if ncols == 0 {
            return Err(invalid("table has no values".to_string()));
        }
        if let Some(i) = rows.iter().position(|row| row.as_ref().len() != ncols) {
            return Err(invalid(format!(
                "table row {} has {} values, expected {}",
                i,
                rows[i].as_ref().len(),
                ncols
            )));
        }
        if rows
            .iter()
            .any(|row| row.as_ref().iter().any(|v| !v.is_finite()))
        {
            return Err(invalid("table contains non-finite values".to_string()));
        }
        Ok(Self::from_rows_unchecked(rows))
    }

    fn from_rows_unchecked<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        Self {
            values: DMatrix::from_fn(nrows, ncols, |r, c| rows[r].as_ref()[c]),
        }
    }

    /// Value stored at a grid point.
    ///
    /// Panics if the indices are outside [`PerformanceTable::shape`].
    pub fn value(&self, altitude_idx: usize, weight_idx: usize) -> f64 {
        self.values[(altitude_idx, weight_idx)]
    }

    /// `(altitudes, weights)` dimensions of the table.
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Altitude rows of weight columns, the layout accepted by `from_rows`.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Bilinearly interpolated value at `(altitude_ft, weight_lbs)`.
    ///
    /// Only reachable through [`PerformanceTables`], which guarantees the table
    /// has the grid's shape.
    fn interpolate(
        &self,
        grid: &PerformanceGrid,
        altitude_ft: f64,
        weight_lbs: f64,
    ) -> Result<f64, PerformanceError> {
        bilinear_interpolate(
            altitude_ft,
            weight_lbs,
            &grid.altitudes,
            &grid.weights,
            |i, j| self.value(i, j),
        )
    }
}

/// The three climb tables of an aircraft, all sharing one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTables {
    grid: PerformanceGrid,
    ias: PerformanceTable,
    roc: PerformanceTable,
    fuel: PerformanceTable,
}

/// Interpolated values of all three tables at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableValues {
    pub ias_mph: f64,
    pub roc_fpm: f64,
    pub fuel_gal: f64,
}

impl PerformanceTables {
    /// Pairs a grid with its climb IAS (mph), rate of climb (fpm) and cumulative
    /// fuel from sea level (gal) tables.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` when a table's shape differs from the grid's.
    pub fn new(
        grid: PerformanceGrid,
        ias: PerformanceTable,
        roc: PerformanceTable,
        fuel: PerformanceTable,
    ) -> Result<Self, ConfigError> {
        for (name, table) in [("ias", &ias), ("roc", &roc), ("fuel", &fuel)] {
            if table.shape() != grid.shape() {
                return Err(invalid(format!(
                    "{} table is {:?} but the grid is {:?}",
                    name,
                    table.shape(),
                    grid.shape()
                )));
            }
        }
        Ok(Self {
            grid,
            ias,
            roc,
            fuel,
        })
    }

    /// Four-seat trainer climb data, 0-15,000 ft and 1,700-2,300 lbs.
    pub fn cessna_172() -> Self {
        Self {
            grid: PerformanceGrid {
                altitudes: CESSNA_172_ALTITUDES.to_vec(),
                weights: CESSNA_172_WEIGHTS.to_vec(),
            },
            ias: PerformanceTable::from_rows_unchecked(&CESSNA_172_IAS),
            roc: PerformanceTable::from_rows_unchecked(&CESSNA_172_ROC),
            fuel: PerformanceTable::from_rows_unchecked(&CESSNA_172_FUEL),
        }
    }

    pub fn grid(&self) -> &PerformanceGrid {
        &self.grid
    }

    /// Climb indicated airspeed (mph).
    pub fn ias(&self) -> &PerformanceTable {
        &self.ias
    }

    /// Rate of climb (fpm).
    pub fn roc(&self) -> &PerformanceTable {
        &self.roc
    }

    /// Cumulative fuel burned climbing from sea level (gal).
    pub fn fuel(&self) -> &PerformanceTable {
        &self.fuel
    }

    /// Interpolates all three tables at `(altitude_ft, weight_lbs)`.
    pub fn interpolate(
        &self,
        altitude_ft: f64,
        weight_lbs: f64,
    ) -> Result<TableValues, PerformanceError> {
        Ok(TableValues {
            ias_mph: self.ias.interpolate(&self.grid, altitude_ft, weight_lbs)?,
            roc_fpm: self.roc.interpolate(&self.grid, altitude_ft, weight_lbs)?,
            fuel_gal: self.fuel.interpolate(&self.grid, altitude_ft, weight_lbs)?,
        })
    }
}

impl Default for PerformanceTables {
    fn default() -> Self {
        Self::cessna_172()
    }
}
