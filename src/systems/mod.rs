pub mod atmosphere;
mod calculator;
mod diagnostics;
mod interpolation;

pub use atmosphere::{density_altitude, isa_deviation, isa_temperature, standard_lapse_temperature};
pub use calculator::PerformanceCalculator;
pub use diagnostics::SegmentDiagnosis;
pub use interpolation::bilinear_interpolate;
