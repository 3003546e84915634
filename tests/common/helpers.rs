use climb_perf::{AircraftSource, ConfigError, PerformanceCalculator};
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a calculator over the built-in tables
pub fn create_test_calculator() -> PerformanceCalculator {
    PerformanceCalculator::default()
}

/// Writes YAML to a temporary file that lives as long as the returned handle
pub fn write_config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config file");
    file
}

/// Loads a calculator from YAML through the file source
pub fn create_calculator_from_yaml(contents: &str) -> Result<PerformanceCalculator, ConfigError> {
    let file = write_config_file(contents);
    PerformanceCalculator::from_source(AircraftSource::File(file.path().to_path_buf()))
}
