use anyhow::Context;
use clap::Parser;
use colored::*;
use kcsv_processor::cli::Args;
use kcsv_processor::{ConversionSummary, ConverterConfig, ScanConverter};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match run(&args) {
        Ok(summary) => {
            if !args.quiet {
                report(&summary);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ConversionSummary> {
    let config = ConverterConfig::from_args(args).context("Invalid arguments")?;

    if !config.quiet {
        println!("{}", "Scan export conversion".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), config.input_path.display());
        println!("  {} {}", "Output:".bright_cyan(), config.output_path.display());
        println!(
            "  {} {}",
            "Format:".bright_cyan(),
            match (config.iso_format, config.strict) {
                (true, true) => "ISO 25178-71, strict",
                (true, false) => "ISO 25178-71, relaxed",
                (false, true) => "legacy BCR, strict",
                (false, false) => "legacy BCR, relaxed",
            }
        );
    }

    let input = config.input_path.display().to_string();
    ScanConverter::new(config)
        .convert()
        .with_context(|| format!("Conversion of {} failed", input))
}

fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kcsv_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

fn report(summary: &ConversionSummary) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        summary.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {} x {}",
        "Grid:".bright_cyan(),
        summary.num_points.to_string().bright_white().bold(),
        summary.num_profiles.to_string().bright_white().bold()
    );
    if summary.loaded_profiles < summary.num_profiles {
        println!(
            "  {} {} of {}",
            "Profiles loaded:".bright_red(),
            summary.loaded_profiles.to_string().bright_red().bold(),
            summary.num_profiles
        );
    }
    if summary.num_missing > 0 {
        let replaced = match summary.fill_value {
            Some(fill) => format!(" (replaced by {:.3})", fill),
            None => String::new(),
        };
        println!(
            "  {} {}{}",
            "Invalid points:".bright_yellow(),
            summary.num_missing.to_string().bright_yellow().bold(),
            replaced
        );
    }
    println!(
        "  {} {}",
        "Written:".bright_cyan(),
        summary.output_path.display()
    );
}
