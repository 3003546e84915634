use approx::assert_relative_eq;
use climb_perf::SegmentDiagnosis;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_segment_valid, create_calculator_from_yaml, create_test_calculator,
    CEILING_AIRCRAFT_YAML,
};

#[test]
fn test_sea_level_to_10000_with_lapse_rate() {
    let calc = create_test_calculator();
    let segment = calc
        .climb_segment_performance(0.0, 10000.0, 2000.0, 15.0, None)
        .expect("Failed to calculate climb segment");

    assert_segment_valid(&segment);
    assert_eq!(segment.start_altitude_ft, 0.0);
    assert_eq!(segment.end_altitude_ft, 10000.0);
    assert_eq!(segment.altitude_gain_ft, 10000.0);
    assert!(segment.avg_roc_fpm > 0.0);
    assert!(segment.segment_fuel_gal > 0.0);
    assert!(segment.climb_time_min > 0.0);
    assert!(
        segment.start_ias_mph > segment.end_ias_mph,
        "IAS should decrease with altitude"
    );

    // 15 °C - 2 °C * 10 = -5 °C at 10000 ft
    let start = calc.performance_with_temperature(0.0, 2000.0, 15.0).unwrap();
    let end = calc.performance_with_temperature(10000.0, 2000.0, -5.0).unwrap();
    assert_relative_eq!(
        segment.segment_fuel_gal,
        end.fuel_gal - start.fuel_gal,
        epsilon = 1e-9
    );
    assert_relative_eq!(segment.avg_roc_fpm, (start.roc_fpm + end.roc_fpm) / 2.0);
    assert_relative_eq!(segment.end_temperature_c, -5.0);
    assert!(segment.is_standard_atmosphere);
}

#[test]
fn test_explicit_end_temperature_matches_lapse_rate() {
    let calc = create_test_calculator();

    let derived = calc
        .climb_segment_performance(2000.0, 8000.0, 2100.0, 18.0, None)
        .unwrap();
    let explicit = calc
        .climb_segment_performance(2000.0, 8000.0, 2100.0, 18.0, Some(6.0))
        .unwrap();

    assert_eq!(derived, explicit);
}

#[test]
fn test_segment_fields() {
    let segment = create_test_calculator()
        .climb_segment_performance(2000.0, 8000.0, 2100.0, 18.0, None)
        .unwrap();

    assert_segment_valid(&segment);
    assert_eq!(segment.start_altitude_ft, 2000.0);
    assert_eq!(segment.end_altitude_ft, 8000.0);
    assert_eq!(segment.altitude_gain_ft, 6000.0);
    assert_eq!(segment.start_temperature_c, 18.0);
    assert_relative_eq!(segment.end_temperature_c, 6.0);
    assert!(segment.avg_roc_fpm > 0.0);
    assert!(segment.segment_fuel_gal > 0.0);
    assert!(segment.start_ias_mph > 0.0);
    assert!(segment.end_ias_mph > 0.0);
    // ISA +7 °C at both ends
    assert_relative_eq!(segment.start_density_alt_ft, 2840.0);
    assert_relative_eq!(segment.end_density_alt_ft, 8840.0);
}

#[test]
fn test_cruise_climb_example() {
    // 7500 ft at 0 °C is exactly ISA
    let segment = create_test_calculator()
        .climb_segment_performance(7500.0, 10000.0, 2300.0, 0.0, None)
        .unwrap();

    assert_segment_valid(&segment);
    // ROC (332.5 + 230) / 2, fuel 4.8 - 3.7, time 2500 / 281.25
    assert_relative_eq!(segment.avg_roc_fpm, 281.3, epsilon = 0.051);
    assert_relative_eq!(segment.segment_fuel_gal, 1.1, epsilon = 1e-9);
    assert_relative_eq!(segment.climb_time_min, 8.9, epsilon = 1e-9);
    assert_relative_eq!(segment.start_ias_mph, 77.5);
    assert_relative_eq!(segment.end_ias_mph, 77.0);
}

#[test]
fn test_non_climbing_segment_is_no_result() {
    let calc = create_test_calculator();

    for (start, end) in [(5000.0, 5000.0), (10000.0, 5000.0), (15000.0, 0.0)] {
        assert!(calc
            .climb_segment_performance(start, end, 2000.0, 10.0, None)
            .is_none());
        assert!(matches!(
            calc.diagnose_segment(start, end, 2000.0, 10.0, None),
            SegmentDiagnosis::InvalidOrdering { .. }
        ));
    }
}

#[test]
fn test_envelope_miss_propagates() {
    let calc = create_test_calculator();

    // Start end too cold
    assert!(calc
        .climb_segment_performance(0.0, 5000.0, 2000.0, -40.0, None)
        .is_none());
    // End too hot after an explicit inversion
    assert!(calc
        .climb_segment_performance(10000.0, 14000.0, 2000.0, -5.0, Some(30.0))
        .is_none());
    assert!(matches!(
        calc.diagnose_segment(10000.0, 14000.0, 2000.0, -5.0, Some(30.0)),
        SegmentDiagnosis::DensityAltitudeTooHigh { .. }
    ));
    // Weight off the grid
    assert!(calc
        .climb_segment_performance(0.0, 5000.0, 2400.0, 15.0, None)
        .is_none());
}

#[test]
fn test_cannot_climb_at_ceiling() {
    let calc = create_calculator_from_yaml(CEILING_AIRCRAFT_YAML).unwrap();

    // ISA from 5000 ft: average of 16.7 and -100 fpm is negative
    let segment = calc
        .climb_segment_performance(5000.0, 6000.0, 1900.0, 5.0, None)
        .unwrap();

    assert_segment_valid(&segment);
    assert!(segment.avg_roc_fpm <= 0.0);
    assert!(!segment.can_climb());
    assert!(segment.climb_time_min.is_infinite());
}
