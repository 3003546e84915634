use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerformanceError {
    /// A standard-day lookup was issued outside the reference grid.
    #[error("Point ({x}, {y}) is outside the data grid bounds")]
    OutOfBounds { x: f64, y: f64 },
}
