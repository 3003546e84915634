//! ISA temperature profile and the density-altitude rule of thumb used to correct
//! standard-day climb tables for temperature.

use crate::utils::{
    DENSITY_ALTITUDE_FT_PER_DEG_C, FEET_PER_THOUSAND, ISA_LAPSE_RATE_C_PER_1000FT,
    ISA_SEA_LEVEL_TEMP_C,
};

/// ISA temperature (°C) at a pressure altitude (ft): 15 °C at sea level, -2 °C per 1000 ft.
#[inline]
pub fn isa_temperature(pressure_altitude_ft: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP_C - ISA_LAPSE_RATE_C_PER_1000FT * (pressure_altitude_ft / FEET_PER_THOUSAND)
}

/// Outside air temperature minus ISA temperature at the pressure altitude (°C).
#[inline]
pub fn isa_deviation(pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
    temperature_c - isa_temperature(pressure_altitude_ft)
}

/// Density altitude (ft): pressure altitude plus 120 ft per °C above ISA.
///
/// Total for any input; callers check the result against their data range.
#[inline]
pub fn density_altitude(pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
    pressure_altitude_ft
        + DENSITY_ALTITUDE_FT_PER_DEG_C * isa_deviation(pressure_altitude_ft, temperature_c)
}

/// Temperature at `end_altitude_ft` assuming the ISA lapse rate from `start_altitude_ft`.
#[inline]
pub fn standard_lapse_temperature(
    start_temperature_c: f64,
    start_altitude_ft: f64,
    end_altitude_ft: f64,
) -> f64 {
    start_temperature_c
        - ISA_LAPSE_RATE_C_PER_1000FT * ((end_altitude_ft - start_altitude_ft) / FEET_PER_THOUSAND)
}
