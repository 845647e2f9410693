//! CLI tool for planning a route through a building file.
//!
//! Loads a building, plans a path between two positions or points of
//! interest and prints the route with its render geometry summary.
//!
//! # Usage
//!
//! ```bash
//! disha-plan -b data/buildings/demo_tower.yaml --from-poi Lobby --to-poi Cafe
//! disha-plan -b data/buildings/demo_tower.yaml --floor 1 --from 0,0,0 --to 12,0,8 --raw
//! RUST_LOG=debug disha-plan -b data/buildings/demo_tower.yaml --to-poi "Meeting Room" --from 0,0,0
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use disha_nav::{Building, DishaConfig, PathFinder, PathGeometry, Point3};

/// Plan a route through a building
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Building YAML file
    #[arg(short, long)]
    building: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = disha_nav::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Floor level (defaults to the floor of a named POI)
    #[arg(short, long)]
    floor: Option<i32>,

    /// Start position as x,y,z
    #[arg(long, value_parser = parse_point, conflicts_with = "from_poi")]
    from: Option<Point3>,

    /// Start at a named point of interest
    #[arg(long)]
    from_poi: Option<String>,

    /// Destination position as x,y,z
    #[arg(long, value_parser = parse_point, conflicts_with = "to_poi")]
    to: Option<Point3>,

    /// Destination at a named point of interest
    #[arg(long)]
    to_poi: Option<String>,

    /// Print the unsimplified path as well
    #[arg(long)]
    raw: bool,
}

fn parse_point(s: &str) -> Result<Point3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid coordinate in '{}': {}", s, e))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        [x, z] => Ok(Point3::new(*x, 0.0, *z)),
        _ => Err(format!("expected x,y,z or x,z, got '{}'", s)),
    }
}

/// Resolve an endpoint from a position or a POI name, with the POI's floor
fn endpoint(
    building: &Building,
    position: Option<Point3>,
    poi: Option<&str>,
    what: &str,
) -> Result<(Point3, Option<i32>), String> {
    match (position, poi) {
        (Some(p), _) => Ok((p, None)),
        (None, Some(name)) => building
            .find_poi(name)
            .map(|(floor, poi)| (poi.position, Some(floor)))
            .ok_or_else(|| format!("no point of interest named '{}'", name)),
        (None, None) => Err(format!("missing {} (use --{} or --{}-poi)", what, what, what)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = if args.config.exists() {
        info!("Loading configuration from {:?}", args.config);
        DishaConfig::load(&args.config).map_err(|e| e.to_string())?
    } else {
        info!("Using default configuration");
        DishaConfig::default()
    };

    let building = Building::load(Path::new(&args.building)).map_err(|e| e.to_string())?;

    let (start, start_floor) = endpoint(&building, args.from, args.from_poi.as_deref(), "from")?;
    let (end, end_floor) = endpoint(&building, args.to, args.to_poi.as_deref(), "to")?;
    let floor = args
        .floor
        .or(end_floor)
        .or(start_floor)
        .ok_or("floor unknown: pass --floor or name a point of interest")?;

    if let (Some(a), Some(b)) = (start_floor, end_floor) {
        if a != b {
            eprintln!(
                "Warning: endpoints are on floors {} and {}; planning on floor {}",
                a, b, floor
            );
        }
    }

    let finder = PathFinder::new(config.pathfinding.clone());

    println!("Building: {} ({})", building.name, building.id);
    println!("Floor:    {}", floor);

    if args.raw {
        let raw = finder
            .find_raw_path(&building, floor, start, end)
            .map_err(|e| e.to_string())?;
        println!("\nRaw path ({} points, {:.2}m):", raw.len(), raw.length);
        print_points(&raw.points);
    }

    let path = finder
        .find_path(&building, floor, start, end)
        .map_err(|e| e.to_string())?;

    println!(
        "\nPath ({} points, {:.2}m, cost {:.2}, {} nodes expanded):",
        path.len(),
        path.length,
        path.cost,
        path.nodes_expanded
    );
    print_points(&path.points);

    let eta = path.length / config.session.walking_speed;
    println!("\nEstimated walk: {:.0}s at {:.1} m/s", eta, config.session.walking_speed);

    let geometry = PathGeometry::from_points(&path.points, &config.geometry);
    println!("\nGeometry:");
    println!("  Curve samples: {}", geometry.curve.len());
    println!("  Indicators:    {}", geometry.indicators.len());
    println!("  Waypoints:     {}", geometry.waypoints.len());
    for wp in &geometry.waypoints {
        println!("    ({:.2}, {:.2}, {:.2})", wp.x, wp.y, wp.z);
    }

    Ok(())
}

fn print_points(points: &[Point3]) {
    for (i, p) in points.iter().enumerate() {
        println!("  {:>3}: ({:.2}, {:.2}, {:.2})", i, p.x, p.y, p.z);
    }
}
