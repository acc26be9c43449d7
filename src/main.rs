#![warn(clippy::all)]

//! Command-line driver for HURDAT2 landfall analysis.
//!
//! Parses a HURDAT2 best-track file, loads a region boundary from a
//! shapefile, runs the selected landfall detection algorithm(s), and
//! prints the results (optionally as JSON or a CSV report).

use clap::{Parser, ValueEnum};
use hurdat_landfall::{
    detect_by_indicator, detect_by_path, load_region, parse_file, report, LandfallEvent,
    RegionPolygon, TrackTable,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hurdat-landfall", version, about)]
struct Args {
    /// Path to the HURDAT2 best-track text file.
    hurdat: PathBuf,

    /// Path to the boundary shapefile (.shp with its .dbf alongside).
    shapefile: PathBuf,

    /// Region to analyze, matched against the shapefile's NAME field.
    #[arg(long, default_value = "Florida")]
    region: String,

    /// Detection algorithm to run.
    #[arg(long, value_enum, default_value_t = Method::Path)]
    method: Method,

    /// Print events as JSON instead of a plain listing.
    #[arg(long)]
    json: bool,

    /// Write a CSV report into the current directory.
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Infer landfalls from outside-to-inside boundary crossings.
    Path,
    /// Use the dataset's official "L" landfall indicator.
    Indicator,
    /// Run both algorithms and print each result set.
    Both,
}

impl Method {
    fn label(&self) -> &'static str {
        match self {
            Method::Path => "path",
            Method::Indicator => "indicator",
            Method::Both => "both",
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let table = parse_file(&args.hurdat)?;
    info!("Parsed {} track points", table.len());

    let region = load_region(&args.shapefile, &args.region)?;
    info!("Loaded boundary for {}", args.region);

    let methods = match args.method {
        Method::Both => vec![Method::Path, Method::Indicator],
        single => vec![single],
    };

    for method in methods {
        run_detection(args, method, &table, &region)?;
    }

    Ok(())
}

fn run_detection(
    args: &Args,
    method: Method,
    table: &TrackTable,
    region: &RegionPolygon,
) -> Result<(), Box<dyn std::error::Error>> {
    let events = match method {
        Method::Path => detect_by_path(table, region)?,
        Method::Indicator => detect_by_indicator(table, region)?,
        Method::Both => unreachable!("expanded by run()"),
    };

    println!(
        "{} landfall(s) in {} ({} detection)",
        events.len(),
        args.region,
        method.label()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        for event in &events {
            print_event(event);
        }
    }

    if args.report && !events.is_empty() {
        // Suffix the label when both algorithms run, so the two
        // reports do not overwrite each other.
        let label = if args.method == Method::Both {
            format!("{}_{}", args.region, method.label())
        } else {
            args.region.clone()
        };
        let path = report::write_csv(&events, &label, Path::new("."))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_event(event: &LandfallEvent) {
    println!(
        "  {} {:>10}  {}  {:6.1} {:7.1}  {:3} kt",
        event.storm_id, event.name, event.timestamp, event.latitude, event.longitude, event.wind
    );
}
