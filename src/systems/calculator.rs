use tracing::debug;

use crate::components::{
    AircraftPerformanceConfig, AircraftSource, ClimbSegment, ConfigError, DataBounds,
    PerformanceData, StandardPerformance,
};
use crate::systems::atmosphere::{
    density_altitude, isa_deviation, isa_temperature, standard_lapse_temperature,
};
use crate::utils::{
    round_to, PerformanceError, CLIMB_RATE_DECIMALS, CLIMB_TIME_DECIMALS, FEET_PER_THOUSAND,
    FUEL_DECIMALS, ISA_LAPSE_RATE_C_PER_1000FT, LAPSE_RATE_DECIMALS, PERFORMANCE_FACTOR_DECIMALS,
    SPEED_DECIMALS, STANDARD_LAPSE_TOLERANCE, TEMPERATURE_DECIMALS,
};

/// Climb performance calculator with temperature correction.
///
/// Holds one aircraft's immutable tables; every query is a pure function of its
/// arguments, so a calculator can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct PerformanceCalculator {
    config: AircraftPerformanceConfig,
}

impl PerformanceCalculator {
    pub fn new(config: AircraftPerformanceConfig) -> Self {
        Self { config }
    }

    pub fn from_source(source: AircraftSource) -> Result<Self, ConfigError> {
        Ok(Self::new(AircraftPerformanceConfig::new(source)?))
    }

    pub fn config(&self) -> &AircraftPerformanceConfig {
        &self.config
    }

    /// Standard-atmosphere performance at a grid-relative point.
    ///
    /// IAS and ROC are rounded to 0.1, fuel to 0.01.
    ///
    /// # Errors
    /// `PerformanceError::OutOfBounds` when the altitude or weight lies outside the
    /// table grid. Standard-day queries are expected to stay on the grid.
    pub fn performance_standard(
        &self,
        altitude_ft: f64,
        weight_lbs: f64,
    ) -> Result<StandardPerformance, PerformanceError> {
        let values = self
            .config
            .tables
            .interpolate(altitude_ft, weight_lbs)?;

        Ok(StandardPerformance {
            ias_mph: round_to(values.ias_mph, SPEED_DECIMALS),
            roc_fpm: round_to(values.roc_fpm, CLIMB_RATE_DECIMALS),
            fuel_gal: round_to(values.fuel_gal, FUEL_DECIMALS),
        })
    }

    /// Performance corrected for outside air temperature.
    ///
    /// Table values are read at the density altitude and compared with the
    /// standard-day rate of climb at the pressure altitude. Returns `None` when the
    /// density altitude, the weight or the pressure altitude falls outside the table
    /// grid; such inputs are an ordinary envelope miss rather than a fault.
    pub fn performance_with_temperature(
        &self,
        pressure_altitude_ft: f64,
        weight_lbs: f64,
        temperature_c: f64,
    ) -> Option<PerformanceData> {
        let grid = self.config.tables.grid();
        let density_alt = density_altitude(pressure_altitude_ft, temperature_c);
        let isa_temp = isa_temperature(pressure_altitude_ft);
        let deviation = isa_deviation(pressure_altitude_ft, temperature_c);

        if !grid.contains_altitude(density_alt) {
            debug!(
                "Density altitude {:.0} ft outside data range {:?} (pressure altitude {} ft, {} °C)",
                density_alt,
                grid.altitude_range(),
                pressure_altitude_ft,
                temperature_c
            );
            return None;
        }
        if !grid.contains_weight(weight_lbs) {
            debug!(
                "Weight {} lbs outside data range {:?}",
                weight_lbs,
                grid.weight_range()
            );
            return None;
        }

        let corrected = self.performance_standard(density_alt, weight_lbs).ok()?;
        let standard = match self.performance_standard(pressure_altitude_ft, weight_lbs) {
            Ok(standard) => standard,
            Err(err) => {
                debug!("No standard-day comparison available: {}", err);
                return None;
            }
        };

        let performance_factor = if standard.roc_fpm > 0.0 {
            corrected.roc_fpm / standard.roc_fpm
        } else {
            0.0
        };

        Some(PerformanceData {
            ias_mph: corrected.ias_mph,
            roc_fpm: corrected.roc_fpm,
            fuel_gal: corrected.fuel_gal,
            pressure_altitude_ft,
            density_altitude_ft: round_to(density_alt, 0),
            temperature_c,
            isa_temp_c: round_to(isa_temp, TEMPERATURE_DECIMALS),
            isa_deviation_c: round_to(deviation, TEMPERATURE_DECIMALS),
            performance_factor: round_to(performance_factor, PERFORMANCE_FACTOR_DECIMALS),
            roc_loss_fpm: round_to(standard.roc_fpm - corrected.roc_fpm, CLIMB_RATE_DECIMALS),
        })
    }

    /// Climb performance between two pressure altitudes.
    ///
    /// # Arguments
    /// * `start_altitude_ft`, `end_altitude_ft` - Segment bounds; the end must be higher.
    /// * `weight_lbs` - Gross weight.
    /// * `start_temperature_c` - Outside air temperature at the start altitude.
    /// * `end_temperature_c` - Outside air temperature at the end altitude; derived
    ///   from the ISA lapse rate (2 °C per 1000 ft) when `None`.
    ///
    /// # Returns
    /// `None` for a non-climbing segment or when either end is outside the data
    /// envelope. Use [`PerformanceCalculator::diagnose_segment`] to find out which.
    pub fn climb_segment_performance(
        &self,
        start_altitude_ft: f64,
        end_altitude_ft: f64,
        weight_lbs: f64,
        start_temperature_c: f64,
        end_temperature_c: Option<f64>,
    ) -> Option<ClimbSegment> {
        if start_altitude_ft >= end_altitude_ft {
            debug!(
                "Segment {} ft -> {} ft does not climb",
                start_altitude_ft, end_altitude_ft
            );
            return None;
        }

        let end_temperature_c = end_temperature_c.unwrap_or_else(|| {
            standard_lapse_temperature(start_temperature_c, start_altitude_ft, end_altitude_ft)
        });

        let start = self.performance_with_temperature(
            start_altitude_ft,
            weight_lbs,
            start_temperature_c,
        )?;
        let end =
            self.performance_with_temperature(end_altitude_ft, weight_lbs, end_temperature_c)?;

        let altitude_gain = end_altitude_ft - start_altitude_ft;
        let avg_roc = (start.roc_fpm + end.roc_fpm) / 2.0;
        let segment_fuel = end.fuel_gal - start.fuel_gal;
        let climb_time = if avg_roc > 0.0 {
            altitude_gain / avg_roc
        } else {
            f64::INFINITY
        };

        let actual_lapse_rate =
            (start_temperature_c - end_temperature_c) / (altitude_gain / FEET_PER_THOUSAND);
        let is_standard_atmosphere =
            (actual_lapse_rate - ISA_LAPSE_RATE_C_PER_1000FT).abs() < STANDARD_LAPSE_TOLERANCE;

        Some(ClimbSegment {
            start_altitude_ft,
            end_altitude_ft,
            altitude_gain_ft: altitude_gain,
            avg_roc_fpm: round_to(avg_roc, CLIMB_RATE_DECIMALS),
            segment_fuel_gal: round_to(segment_fuel, FUEL_DECIMALS),
            climb_time_min: round_to(climb_time, CLIMB_TIME_DECIMALS),
            start_ias_mph: start.ias_mph,
            end_ias_mph: end.ias_mph,
            start_density_alt_ft: start.density_altitude_ft,
            end_density_alt_ft: end.density_altitude_ft,
            start_temperature_c,
            end_temperature_c,
            actual_lapse_rate: round_to(actual_lapse_rate, LAPSE_RATE_DECIMALS),
            standard_lapse_rate: ISA_LAPSE_RATE_C_PER_1000FT,
            is_standard_atmosphere,
        })
    }

    /// Altitude and weight ranges covered by the tables.
    pub fn data_bounds(&self) -> DataBounds {
        let grid = self.config.tables.grid();
        DataBounds {
            altitude_range_ft: grid.altitude_range(),
            weight_range_lbs: grid.weight_range(),
        }
    }
}
