//! CLI tool for one-off Mollweide transforms.
//!
//! Usage:
//!   cargo run --bin mollweide -- forward 30 45
//!   cargo run --bin mollweide -- --long0 -90 --json inverse 2420394.9 5334266.8
//!
//! Projection parameters fall back to the `MOLL_*` environment variables
//! (a `.env` file is honored) and then to the Clarke 1866 authalic sphere.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use projection::{Mollweide, MollweideParams, Point2};

#[derive(Parser, Debug)]
#[command(name = "mollweide")]
#[command(about = "Forward and inverse Mollweide projection of a single coordinate")]
struct Args {
    /// Sphere radius / semi-major axis (meters)
    #[arg(long, env = "MOLL_A")]
    a: Option<f64>,

    /// Central meridian (degrees)
    #[arg(long, env = "MOLL_LONG0_DEG", allow_hyphen_values = true)]
    long0: Option<f64>,

    /// False easting (meters)
    #[arg(long, env = "MOLL_X0", allow_hyphen_values = true)]
    x0: Option<f64>,

    /// False northing (meters)
    #[arg(long, env = "MOLL_Y0", allow_hyphen_values = true)]
    y0: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geographic (degrees) to projected coordinates
    Forward {
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        #[arg(allow_hyphen_values = true)]
        lat: f64,
    },
    /// Projected coordinates to geographic (degrees)
    Inverse {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
}

impl Args {
    fn params(&self) -> MollweideParams {
        let defaults = MollweideParams::default();
        MollweideParams::new(
            self.a.unwrap_or(defaults.a),
            self.long0.map(f64::to_radians).unwrap_or(defaults.long0),
            self.x0.unwrap_or(defaults.x0),
            self.y0.unwrap_or(defaults.y0),
        )
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let params = args.params();
    debug!(?params, "Resolved projection parameters");

    let proj = Mollweide::new(params).context("Invalid Mollweide projection parameters")?;

    let (output, text) = match args.command {
        Command::Forward { lon, lat } => {
            let outcome =
                proj.forward_detailed(Point2::new(lon.to_radians(), lat.to_radians()));
            info!(
                iterations = outcome.iterations,
                converged = outcome.converged,
                "Forward transform complete"
            );
            let text = format!("{:.6} {:.6}", outcome.point.x, outcome.point.y);
            let output = json!({
                "x": outcome.point.x,
                "y": outcome.point.y,
                "converged": outcome.converged,
                "iterations": outcome.iterations,
            });
            (output, text)
        }
        Command::Inverse { x, y } => {
            let (lon, lat) = proj.inverse_deg(x, y);
            (json!({ "lon": lon, "lat": lat }), format!("{:.9} {:.9}", lon, lat))
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}
