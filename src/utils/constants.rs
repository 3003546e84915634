pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0; // °C
pub const ISA_LAPSE_RATE_C_PER_1000FT: f64 = 2.0; // °C per 1000 ft
pub const DENSITY_ALTITUDE_FT_PER_DEG_C: f64 = 120.0; // ft per °C of ISA deviation

pub const FEET_PER_THOUSAND: f64 = 1000.0;

/// Actual lapse rates within this band of the ISA rate count as a standard atmosphere.
pub const STANDARD_LAPSE_TOLERANCE: f64 = 0.5; // °C per 1000 ft

// Result precision (decimal places)
pub const SPEED_DECIMALS: i32 = 1;
pub const CLIMB_RATE_DECIMALS: i32 = 1;
pub const FUEL_DECIMALS: i32 = 2;
pub const TEMPERATURE_DECIMALS: i32 = 1;
pub const PERFORMANCE_FACTOR_DECIMALS: i32 = 3;
pub const CLIMB_TIME_DECIMALS: i32 = 1;
pub const LAPSE_RATE_DECIMALS: i32 = 1;
