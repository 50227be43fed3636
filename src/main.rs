//! JobPlot CLI Entry Point
//!
//! Charts a job resource usage export.
//!
//! # Usage
//!
//! ```bash
//! # Chart the default export in the current directory
//! jobplot
//!
//! # Chart a specific export
//! jobplot job_98765_resource_usage.csv
//!
//! # Render without opening a viewer
//! jobplot usage.csv --no-open --out-dir charts
//! ```

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

use jobplot::chart::{cpu_memory_chart, gpu_chart, render_svg, show_svg};
use jobplot::table::{load_usage_table, validate_columns};
use jobplot::{APP_NAME, VERSION};

/// Default usage export charted when no file is specified.
const DEFAULT_CSV: &str = "job_12345_resource_usage.csv";

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    csv_path: String,
    out_dir: Option<PathBuf>,
    no_open: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV.to_string(),
            out_dir: None,
            no_open: false,
            verbose: false,
        }
    }
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: jobplot [OPTIONS] [CSV_FILE]");
    println!();
    println!("Arguments:");
    println!("  [CSV_FILE]       Resource usage export (default: {})", DEFAULT_CSV);
    println!();
    println!("Options:");
    println!("  --out-dir PATH   Directory for rendered charts (default: system temp dir)");
    println!("  --no-open        Render charts without opening a viewer");
    println!("  --verbose        Enable debug logging");
    println!("  --help           Show this help message");
    println!("  --version        Show version information");
    println!();
    println!("Examples:");
    println!("  jobplot");
    println!("  jobplot job_98765_resource_usage.csv");
    println!("  jobplot usage.csv --no-open --out-dir charts");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut positional_index = 0;
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--no-open" => {
                config.no_open = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--out-dir" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out-dir requires a path argument".to_string());
                }
                config.out_dir = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                // Positional argument
                match positional_index {
                    0 => config.csv_path = arg.clone(),
                    _ => return Err(format!("Unexpected argument: {}", arg)),
                }
                positional_index += 1;
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    // Load and validate the export
    let table = load_usage_table(&config.csv_path)?;
    validate_columns(&table)?;

    // Resolve the chart output directory
    let out_dir = match config.out_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
            }
            dir
        }
        None => env::temp_dir(),
    };

    // CPU/memory chart
    let spec = cpu_memory_chart(&table)?;
    let chart_path = out_dir.join("cpu_memory_usage.svg");
    render_svg(&spec, &chart_path)?;
    info!("CPU/memory chart: {}", chart_path.display());

    if !config.no_open {
        show_svg(&chart_path)?;
    }

    // GPU chart, or the skip path
    match gpu_chart(&table) {
        Some(spec) => {
            let chart_path = out_dir.join("gpu_usage.svg");
            render_svg(&spec, &chart_path)?;
            info!("GPU chart: {}", chart_path.display());

            if !config.no_open {
                show_svg(&chart_path)?;
            }
        }
        None => println!("No GPU data available."),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("jobplot")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_arguments(&args(&[])).unwrap();
        assert_eq!(config.csv_path, DEFAULT_CSV);
        assert!(config.out_dir.is_none());
        assert!(!config.no_open);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_positional_path() {
        let config = parse_arguments(&args(&["other.csv"])).unwrap();
        assert_eq!(config.csv_path, "other.csv");
    }

    #[test]
    fn test_parse_flags() {
        let config =
            parse_arguments(&args(&["usage.csv", "--no-open", "--verbose", "--out-dir", "charts"]))
                .unwrap();
        assert_eq!(config.csv_path, "usage.csv");
        assert!(config.no_open);
        assert!(config.verbose);
        assert_eq!(config.out_dir, Some(PathBuf::from("charts")));
    }

    #[test]
    fn test_parse_out_dir_requires_value() {
        let result = parse_arguments(&args(&["--out-dir"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_option() {
        let result = parse_arguments(&args(&["--watch"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_extra_positional_rejected() {
        let result = parse_arguments(&args(&["a.csv", "b.csv"]));
        assert!(result.is_err());
    }
}
