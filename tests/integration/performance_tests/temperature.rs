use approx::assert_relative_eq;

use crate::common::{
    assert_performance_data_valid, create_test_calculator, ISA_POINTS, WEIGHTS,
};

#[test]
fn test_isa_conditions_reproduce_standard_day() {
    let calc = create_test_calculator();

    for (altitude, isa_temp) in ISA_POINTS {
        for &weight in &WEIGHTS {
            let perf = calc
                .performance_with_temperature(altitude, weight, isa_temp)
                .unwrap_or_else(|| panic!("No result at {} ft, {} °C", altitude, isa_temp));
            let standard = calc.performance_standard(altitude, weight).unwrap();

            assert_performance_data_valid(&perf);
            assert_relative_eq!(perf.density_altitude_ft, altitude);
            assert_relative_eq!(perf.isa_temp_c, isa_temp);
            assert_relative_eq!(perf.isa_deviation_c, 0.0);
            assert_relative_eq!(perf.performance_factor, 1.0);
            assert_relative_eq!(perf.roc_loss_fpm, 0.0);
            assert_eq!(perf.ias_mph, standard.ias_mph);
            assert_eq!(perf.roc_fpm, standard.roc_fpm);
            assert_eq!(perf.fuel_gal, standard.fuel_gal);
        }
    }
}

#[test]
fn test_hot_day_reads_table_at_density_altitude() {
    let calc = create_test_calculator();

    // ISA at 5000 ft is 5 °C: +10 °C deviation, 5000 + 120 * 10 ft
    let perf = calc.performance_with_temperature(5000.0, 2000.0, 15.0).unwrap();
    let at_density_altitude = calc.performance_standard(6200.0, 2000.0).unwrap();

    assert_relative_eq!(perf.density_altitude_ft, 6200.0);
    assert_relative_eq!(perf.isa_deviation_c, 10.0);
    assert_eq!(perf.roc_fpm, at_density_altitude.roc_fpm);
    assert_eq!(perf.ias_mph, at_density_altitude.ias_mph);
    assert_eq!(perf.fuel_gal, at_density_altitude.fuel_gal);
}

#[test]
fn test_hot_and_cold_days() {
    let calc = create_test_calculator();

    // ISA +20 °C and ISA -10 °C at 5000 ft
    let hot = calc.performance_with_temperature(5000.0, 2000.0, 25.0).unwrap();
    let cold = calc.performance_with_temperature(5000.0, 2000.0, -5.0).unwrap();

    assert_performance_data_valid(&hot);
    assert_performance_data_valid(&cold);

    assert!(hot.roc_fpm < cold.roc_fpm, "Hot day should climb slower");
    assert!(hot.density_altitude_ft > cold.density_altitude_ft);
    assert_relative_eq!(hot.density_altitude_ft, 7400.0);
    assert_relative_eq!(cold.density_altitude_ft, 3800.0);

    assert!(hot.performance_factor < 1.0, "Hot day should reduce performance");
    assert!(cold.performance_factor > 1.0, "Cold day should improve performance");
    assert!(hot.roc_loss_fpm > 0.0);
    assert!(cold.roc_loss_fpm < 0.0);
}

#[test]
fn test_warmer_is_monotonically_worse() {
    let calc = create_test_calculator();
    let mut previous = calc.performance_with_temperature(5000.0, 2000.0, -5.0).unwrap();

    for step in 1..=30 {
        let temperature = -5.0 + step as f64;
        let perf = calc
            .performance_with_temperature(5000.0, 2000.0, temperature)
            .unwrap();

        assert_relative_eq!(
            perf.density_altitude_ft - previous.density_altitude_ft,
            120.0
        );
        assert!(
            perf.roc_fpm < previous.roc_fpm,
            "ROC should fall from {} to below at {} °C, got {}",
            previous.roc_fpm,
            temperature,
            perf.roc_fpm
        );
        previous = perf;
    }
}

#[test]
fn test_outside_envelope_is_no_result() {
    let calc = create_test_calculator();

    // 0 + 120 * (-40 - 15) = -6600 ft
    assert!(calc.performance_with_temperature(0.0, 2000.0, -40.0).is_none());
    // 15000 ft at ISA +1 °C is just above the table
    assert!(calc.performance_with_temperature(15000.0, 2000.0, -14.0).is_none());
    assert!(calc.performance_with_temperature(5000.0, 1600.0, 5.0).is_none());
    assert!(calc.performance_with_temperature(5000.0, 2400.0, 5.0).is_none());
}

#[test]
fn test_performance_data_fields() {
    let perf = create_test_calculator()
        .performance_with_temperature(5000.0, 2000.0, 20.0)
        .unwrap();

    assert_performance_data_valid(&perf);
    assert_eq!(perf.pressure_altitude_ft, 5000.0);
    assert_eq!(perf.temperature_c, 20.0);
    assert_relative_eq!(perf.isa_temp_c, 5.0);
    assert_relative_eq!(perf.isa_deviation_c, 15.0);
    assert_relative_eq!(perf.density_altitude_ft, 6800.0);
    // 610 - 230 * 1800 / 5000
    assert_relative_eq!(perf.roc_fpm, 527.2, epsilon = 1e-9);
    assert_relative_eq!(perf.roc_loss_fpm, 82.8, epsilon = 1e-9);
    assert_relative_eq!(perf.performance_factor, 0.864, epsilon = 1e-9);
}
