use serde::{Deserialize, Serialize};
use std::fmt;

use crate::systems::atmosphere::{density_altitude, standard_lapse_temperature};
use crate::systems::PerformanceCalculator;
use crate::utils::round_to;

/// Why a climb segment query did, or did not, produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentDiagnosis {
    /// Both ends are inside the data envelope.
    Computable,
    /// An altitude, the weight or a temperature is NaN or infinite.
    NonFiniteInput,
    /// The end altitude is not above the start altitude.
    InvalidOrdering { start_altitude_ft: f64, end_altitude_ft: f64 },
    /// Cold air pushes a density altitude below the lowest tabulated altitude.
    DensityAltitudeTooLow { start_density_alt_ft: f64, end_density_alt_ft: f64 },
    /// Hot air pushes a density altitude above the highest tabulated altitude.
    DensityAltitudeTooHigh { start_density_alt_ft: f64, end_density_alt_ft: f64 },
    WeightOutOfRange { weight_lbs: f64, weight_range_lbs: (f64, f64) },
    /// A pressure altitude has no standard-day value to compare against.
    PressureAltitudeOutOfRange { altitude_ft: f64, altitude_range_ft: (f64, f64) },
}

impl SegmentDiagnosis {
    /// Suggested change of inputs for the calling surface to show.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SegmentDiagnosis::Computable => None,
            SegmentDiagnosis::NonFiniteInput => {
                Some("Altitudes, weight and temperatures must be finite numbers")
            }
            SegmentDiagnosis::InvalidOrdering { .. } => {
                Some("End altitude must be higher than start altitude")
            }
            SegmentDiagnosis::DensityAltitudeTooLow { .. } => {
                Some("Try a warmer temperature or a higher starting altitude")
            }
            SegmentDiagnosis::DensityAltitudeTooHigh { .. } => {
                Some("Try a cooler temperature or break the climb into segments")
            }
            SegmentDiagnosis::WeightOutOfRange { .. } => {
                Some("Use a weight within the tabulated range")
            }
            SegmentDiagnosis::PressureAltitudeOutOfRange { .. } => {
                Some("Keep both altitudes within the tabulated range")
            }
        }
    }
}

impl fmt::Display for SegmentDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentDiagnosis::Computable => write!(f, "Segment is within the data envelope"),
            SegmentDiagnosis::NonFiniteInput => write!(f, "Inputs contain a non-finite value"),
            SegmentDiagnosis::InvalidOrdering {
                start_altitude_ft,
                end_altitude_ft,
            } => write!(
                f,
                "Segment {} ft -> {} ft does not climb",
                start_altitude_ft, end_altitude_ft
            ),
            SegmentDiagnosis::DensityAltitudeTooLow {
                start_density_alt_ft,
                end_density_alt_ft,
            } => write!(
                f,
                "Cold temperature creates density altitude below data range ({} ft -> {} ft)",
                start_density_alt_ft, end_density_alt_ft
            ),
            SegmentDiagnosis::DensityAltitudeTooHigh {
                start_density_alt_ft,
                end_density_alt_ft,
            } => write!(
                f,
                "Hot temperature creates density altitude above data range ({} ft -> {} ft)",
                start_density_alt_ft, end_density_alt_ft
            ),
            SegmentDiagnosis::WeightOutOfRange {
                weight_lbs,
                weight_range_lbs: (min, max),
            } => write!(
                f,
                "Weight {} lbs is outside valid range {} - {} lbs",
                weight_lbs, min, max
            ),
            SegmentDiagnosis::PressureAltitudeOutOfRange {
                altitude_ft,
                altitude_range_ft: (min, max),
            } => write!(
                f,
                "Altitude {} ft is outside valid range {} - {} ft",
                altitude_ft, min, max
            ),
        }
    }
}

impl PerformanceCalculator {
    /// Explains the outcome of [`PerformanceCalculator::climb_segment_performance`]
    /// for the same arguments.
    ///
    /// Checks run in order: non-finite inputs, altitude ordering, cold density
    /// altitude, hot density altitude, weight, then pressure altitudes.
    pub fn diagnose_segment(
        &self,
        start_altitude_ft: f64,
        end_altitude_ft: f64,
        weight_lbs: f64,
        start_temperature_c: f64,
        end_temperature_c: Option<f64>,
    ) -> SegmentDiagnosis {
        let inputs = [
            start_altitude_ft,
            end_altitude_ft,
            weight_lbs,
            start_temperature_c,
            end_temperature_c.unwrap_or(0.0),
        ];
        if inputs.iter().any(|v| !v.is_finite()) {
            return SegmentDiagnosis::NonFiniteInput;
        }
        if start_altitude_ft >= end_altitude_ft {
            return SegmentDiagnosis::InvalidOrdering {
                start_altitude_ft,
                end_altitude_ft,
            };
        }

        let bounds = self.data_bounds();
        let (min_alt, max_alt) = bounds.altitude_range_ft;
        let (min_weight, max_weight) = bounds.weight_range_lbs;

        let end_temperature_c = end_temperature_c.unwrap_or_else(|| {
            standard_lapse_temperature(start_temperature_c, start_altitude_ft, end_altitude_ft)
        });
        let start_da = density_altitude(start_altitude_ft, start_temperature_c);
        let end_da = density_altitude(end_altitude_ft, end_temperature_c);

        if start_da < min_alt || end_da < min_alt {
            return SegmentDiagnosis::DensityAltitudeTooLow {
                start_density_alt_ft: round_to(start_da, 0),
                end_density_alt_ft: round_to(end_da, 0),
            };
        }
        if start_da > max_alt || end_da > max_alt {
            return SegmentDiagnosis::DensityAltitudeTooHigh {
                start_density_alt_ft: round_to(start_da, 0),
                end_density_alt_ft: round_to(end_da, 0),
            };
        }
        if !(min_weight <= weight_lbs && weight_lbs <= max_weight) {
            return SegmentDiagnosis::WeightOutOfRange {
                weight_lbs,
                weight_range_lbs: bounds.weight_range_lbs,
            };
        }
        for altitude_ft in [start_altitude_ft, end_altitude_ft] {
            if !(min_alt <= altitude_ft && altitude_ft <= max_alt) {
                return SegmentDiagnosis::PressureAltitudeOutOfRange {
                    altitude_ft,
                    altitude_range_ft: bounds.altitude_range_ft,
                };
            }
        }

        SegmentDiagnosis::Computable
    }
}
