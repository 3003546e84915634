use climb_perf::components::{PerformanceGrid, PerformanceTable, PerformanceTables};
use climb_perf::{
    AircraftPerformanceConfig, AircraftSource, AircraftType, ConfigError, PerformanceCalculator,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

use crate::common::{
    create_calculator_from_yaml, create_test_calculator, write_config_file,
    CEILING_AIRCRAFT_YAML, INCOMPLETE_AIRCRAFT_YAML,
};

#[test]
fn test_load_tables_from_file() {
    let file = write_config_file(CEILING_AIRCRAFT_YAML);
    let config =
        AircraftPerformanceConfig::new(AircraftSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(config.name, "LowCeiling");
    assert_eq!(config.ac_type, AircraftType::Custom("LowCeiling".to_string()));

    let calc = PerformanceCalculator::new(config);
    let bounds = calc.data_bounds();
    assert_eq!(bounds.altitude_range_ft, (0.0, 6000.0));
    assert_eq!(bounds.weight_range_lbs, (1500.0, 1900.0));

    let perf = calc.performance_standard(3000.0, 1700.0).unwrap();
    assert_eq!(perf.ias_mph, 70.0);
    assert_eq!(perf.roc_fpm, 325.0);
}

#[test]
fn test_incomplete_tables_rejected() {
    let result = create_calculator_from_yaml(INCOMPLETE_AIRCRAFT_YAML);
    match result {
        Err(ConfigError::ValidationError(message)) => {
            assert!(message.contains("fuel"), "unexpected message: {}", message)
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_missing_file_rejected() {
    let result = PerformanceCalculator::from_source(AircraftSource::File(PathBuf::from(
        "/nonexistent/climb_tables.yaml",
    )));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_programmed_source_matches_default() {
    let calc =
        PerformanceCalculator::from_source(AircraftSource::Programmed(AircraftType::Cessna172))
            .unwrap();
    assert_eq!(calc.config(), create_test_calculator().config());
    assert_eq!(calc.data_bounds(), create_test_calculator().data_bounds());
}

#[test]
fn test_table_larger_than_grid_rejected() {
    let grid = PerformanceGrid::new(vec![0.0, 6000.0], vec![1500.0, 1900.0]).unwrap();
    let square = [[70.0, 72.0], [68.0, 70.0]];
    let tall = [[800.0, 600.0], [400.0, 300.0], [100.0, 50.0]];

    let result = PerformanceTables::new(
        grid,
        PerformanceTable::from_rows(&square).unwrap(),
        PerformanceTable::from_rows(&tall).unwrap(),
        PerformanceTable::from_rows(&square).unwrap(),
    );
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_deserialized_config_is_validated() {
    // Extra altitude with no matching table rows
    let yaml = CEILING_AIRCRAFT_YAML.replace("altitudes: [0, 6000]", "altitudes: [0, 6000, 9000]");
    assert_ne!(yaml, CEILING_AIRCRAFT_YAML);
    assert!(serde_yaml::from_str::<AircraftPerformanceConfig>(&yaml).is_err());

    let config: AircraftPerformanceConfig = serde_yaml::from_str(CEILING_AIRCRAFT_YAML).unwrap();
    let calc = PerformanceCalculator::new(config);
    assert_eq!(calc.data_bounds().altitude_range_ft, (0.0, 6000.0));
}
