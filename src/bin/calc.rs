use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use climb_perf::{
    utils::fahrenheit_to_celsius, AircraftSource, AircraftType, ClimbSegment, DataBounds,
    PerformanceCalculator, PerformanceData, StandardPerformance,
};

#[derive(Parser)]
#[command(name = "climb_perf")]
#[command(version)]
#[command(about = "Temperature-corrected aircraft climb performance", long_about = None)]
struct Cli {
    /// YAML file with climb tables (defaults to the built-in Cessna 172 tables)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, default_value = "table")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Standard-atmosphere performance at one point
    Standard {
        /// Pressure altitude (ft)
        #[arg(short = 'a', long)]
        altitude: f64,

        /// Gross weight (lbs)
        #[arg(short = 'w', long)]
        weight: f64,
    },
    /// Temperature-corrected performance at one point
    Point {
        /// Pressure altitude (ft)
        #[arg(short = 'a', long)]
        altitude: f64,

        /// Gross weight (lbs)
        #[arg(short = 'w', long)]
        weight: f64,

        /// Outside air temperature (Celsius unless --fahrenheit)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        temperature: f64,

        /// Read temperatures as Fahrenheit
        #[arg(long)]
        fahrenheit: bool,
    },
    /// Climb performance between two altitudes
    Segment {
        /// Start pressure altitude (ft)
        #[arg(short = 's', long)]
        start: f64,

        /// End pressure altitude (ft)
        #[arg(short = 'e', long)]
        end: f64,

        /// Gross weight (lbs)
        #[arg(short = 'w', long)]
        weight: f64,

        /// Temperature at the start altitude (Celsius unless --fahrenheit)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        temperature: f64,

        /// Temperature at the end altitude; standard lapse rate when omitted
        #[arg(long, allow_hyphen_values = true)]
        end_temperature: Option<f64>,

        /// Read temperatures as Fahrenheit
        #[arg(long)]
        fahrenheit: bool,
    },
    /// Altitude and weight ranges covered by the tables
    Bounds,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// What a command produced: a report for stdout, or a no-result report for stderr.
#[derive(Debug, PartialEq)]
enum Outcome {
    Output(String),
    NoResult(String),
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_logging();
    match run(Cli::parse())? {
        Outcome::Output(report) => {
            print!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NoResult(report) => {
            eprint!("{}", report);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, Box<dyn std::error::Error>> {
    let source = match cli.config {
        Some(path) => AircraftSource::File(path),
        None => AircraftSource::Programmed(AircraftType::Cessna172),
    };
    let calc = PerformanceCalculator::from_source(source)?;
    info!("Using climb tables for {}", calc.config().name);

    let report = match cli.command {
        Commands::Standard { altitude, weight } => {
            let perf = calc.performance_standard(altitude, weight)?;
            render(cli.output, &perf, format_standard)?
        }
        Commands::Point {
            altitude,
            weight,
            temperature,
            fahrenheit,
        } => {
            let temperature = to_celsius(temperature, fahrenheit);
            match calc.performance_with_temperature(altitude, weight, temperature) {
                Some(perf) => render(cli.output, &perf, format_point)?,
                None => {
                    let mut report =
                        String::from("ERROR: Conditions are outside the performance data\n");
                    report.push_str(&format_bounds(&calc.data_bounds()));
                    return Ok(Outcome::NoResult(report));
                }
            }
        }
        Commands::Segment {
            start,
            end,
            weight,
            temperature,
            end_temperature,
            fahrenheit,
        } => {
            let temperature = to_celsius(temperature, fahrenheit);
            let end_temperature = end_temperature.map(|t| to_celsius(t, fahrenheit));
            match calc.climb_segment_performance(start, end, weight, temperature, end_temperature)
            {
                Some(segment) => render(cli.output, &segment, format_segment)?,
                None => {
                    let diagnosis =
                        calc.diagnose_segment(start, end, weight, temperature, end_temperature);
                    let mut report = String::from("ERROR: Cannot calculate segment\n");
                    report.push_str(&format_bounds(&calc.data_bounds()));
                    report.push_str(&format!("\nIssue: {}\n", diagnosis));
                    if let Some(hint) = diagnosis.hint() {
                        report.push_str(&format!("{}\n", hint));
                    }
                    return Ok(Outcome::NoResult(report));
                }
            }
        }
        Commands::Bounds => render(cli.output, &calc.data_bounds(), format_bounds)?,
    };

    Ok(Outcome::Output(report))
}

fn to_celsius(temperature: f64, fahrenheit: bool) -> f64 {
    if fahrenheit {
        fahrenheit_to_celsius(temperature)
    } else {
        temperature
    }
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    format_table: fn(&T) -> String,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        OutputFormat::Table => Ok(format_table(value)),
    }
}

fn format_standard(perf: &StandardPerformance) -> String {
    format!(
        "IAS: {} mph\nRate of Climb: {} fpm\nFuel to Altitude: {} gal\n",
        perf.ias_mph, perf.roc_fpm, perf.fuel_gal
    )
}

fn format_point(perf: &PerformanceData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Pressure Altitude: {} ft, Temperature: {}°C (ISA {}°C, deviation {:+}°C)\n",
        perf.pressure_altitude_ft, perf.temperature_c, perf.isa_temp_c, perf.isa_deviation_c
    ));
    out.push_str(&format!(
        "Density Altitude: {:.0} ft\n",
        perf.density_altitude_ft
    ));
    out.push_str(&format!("{}\n", "-".repeat(55)));
    out.push_str(&format!("IAS: {} mph\n", perf.ias_mph));
    out.push_str(&format!("Rate of Climb: {} fpm\n", perf.roc_fpm));
    out.push_str(&format!("Fuel to Altitude: {} gal\n", perf.fuel_gal));
    out.push_str(&format!(
        "Performance Factor: {}\n",
        perf.performance_factor
    ));
    out.push_str(&format!("ROC Loss vs Standard: {} fpm\n", perf.roc_loss_fpm));
    out
}

fn format_segment(segment: &ClimbSegment) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Segment: {} ft → {} ft\n",
        segment.start_altitude_ft, segment.end_altitude_ft
    ));
    out.push_str(&format!(
        "Temperature: {}°C → {}°C (lapse {} °C/1000 ft, standard {})\n",
        segment.start_temperature_c,
        segment.end_temperature_c,
        segment.actual_lapse_rate,
        segment.standard_lapse_rate
    ));
    if !segment.is_standard_atmosphere {
        out.push_str("Note: lapse rate differs from the standard atmosphere\n");
    }
    out.push_str(&format!("{}\n", "-".repeat(55)));
    out.push_str(&format!("Altitude Gain: {} ft\n", segment.altitude_gain_ft));
    out.push_str(&format!(
        "Average Rate of Climb: {} fpm\n",
        segment.avg_roc_fpm
    ));
    out.push_str(&format!(
        "Fuel for Segment: {} gal\n",
        segment.segment_fuel_gal
    ));
    if segment.can_climb() {
        out.push_str(&format!("Climb Time: {} minutes\n", segment.climb_time_min));
    } else {
        out.push_str("Climb Time: cannot climb (average rate of climb is not positive)\n");
    }
    out.push_str(&format!(
        "IAS: {} → {} mph\n",
        segment.start_ias_mph, segment.end_ias_mph
    ));
    out.push_str(&format!(
        "Density Altitude: {:.0} → {:.0} ft\n",
        segment.start_density_alt_ft, segment.end_density_alt_ft
    ));
    out
}

fn format_bounds(bounds: &DataBounds) -> String {
    let (min_alt, max_alt) = bounds.altitude_range_ft;
    let (min_weight, max_weight) = bounds.weight_range_lbs;
    format!(
        "Valid altitude range: {} - {} ft\nValid weight range: {} - {} lbs\n",
        min_alt, max_alt, min_weight, max_weight
    )
}
