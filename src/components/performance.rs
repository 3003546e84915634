use serde::{Deserialize, Serialize};

/// Standard-day climb values at one (altitude, weight) point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardPerformance {
    /// Climb indicated airspeed (mph).
    pub ias_mph: f64,
    /// Rate of climb (fpm).
    pub roc_fpm: f64,
    /// Fuel burned climbing from sea level (gal).
    pub fuel_gal: f64,
}

/// Temperature-corrected climb performance at a pressure altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    /// Climb indicated airspeed at the density altitude (mph).
    pub ias_mph: f64,
    /// Rate of climb at the density altitude (fpm).
    pub roc_fpm: f64,
    /// Fuel to climb to the density altitude (gal).
    pub fuel_gal: f64,
    pub pressure_altitude_ft: f64,
    pub density_altitude_ft: f64,
    /// Outside air temperature (°C).
    pub temperature_c: f64,
    /// ISA temperature at the pressure altitude (°C).
    pub isa_temp_c: f64,
    /// Outside air temperature minus ISA temperature (°C).
    pub isa_deviation_c: f64,
    /// Corrected rate of climb over standard-day rate of climb at the same pressure altitude.
    pub performance_factor: f64,
    /// Standard-day rate of climb minus corrected rate of climb (fpm).
    /// Positive when heat degrades the climb, negative when cold improves it.
    pub roc_loss_fpm: f64,
}

/// Climb performance between two pressure altitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbSegment {
    pub start_altitude_ft: f64,
    pub end_altitude_ft: f64,
    pub altitude_gain_ft: f64,
    /// Mean of the start and end rates of climb (fpm).
    pub avg_roc_fpm: f64,
    /// Fuel burned between the two altitudes, excluding any taxi/take-off allowance (gal).
    pub segment_fuel_gal: f64,
    /// Minutes to climb the segment; `f64::INFINITY` when the average rate of climb is not positive.
    pub climb_time_min: f64,
    pub start_ias_mph: f64,
    pub end_ias_mph: f64,
    pub start_density_alt_ft: f64,
    pub end_density_alt_ft: f64,
    pub start_temperature_c: f64,
    pub end_temperature_c: f64,
    /// Observed temperature drop per 1000 ft (°C).
    pub actual_lapse_rate: f64,
    /// ISA temperature drop per 1000 ft (°C).
    pub standard_lapse_rate: f64,
    /// Whether the actual lapse rate is close to the ISA lapse rate.
    pub is_standard_atmosphere: bool,
}

impl ClimbSegment {
    /// `false` when the aircraft cannot climb through the segment at all.
    pub fn can_climb(&self) -> bool {
        self.climb_time_min.is_finite()
    }
}

/// Valid data ranges for calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    /// Lowest and highest altitude (ft).
    pub altitude_range_ft: (f64, f64),
    /// Lowest and highest gross weight (lbs).
    pub weight_range_lbs: (f64, f64),
}
