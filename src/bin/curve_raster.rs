//! curve-raster - print the grid cells of a rasterized curve.
//!
//! One `x y intensity` line per sample, in emission order.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use curve_raster::prelude::*;

/// Rasterize a line, conic or cubic curve from picked points
#[derive(Parser, Debug)]
#[command(name = "curve-raster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Algorithm: dda, bresenham, wu, circle, ellipse, hyperbola, parabola,
    /// hermite, bezier, bspline
    algorithm: Algorithm,

    /// Picked points as `x,y` (options go before the points)
    #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
    points: Vec<Point>,

    /// Samples per parametric segment
    #[arg(short, long)]
    steps: Option<u32>,

    /// Extent of hyperbolas and parabolas
    #[arg(short, long)]
    limit: Option<u32>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw flat ellipses, hyperbolas and parabolas with the dimension clamped
    /// to 1 instead of failing
    #[arg(long)]
    clamp_degenerate: bool,
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| Error::InvalidArgument(format!("expected x,y, got '{s}'")))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| Error::InvalidArgument(format!("bad coordinate '{v}': {e}")))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RasterConfig::load(path)?,
        None => RasterConfig::load_or_default(
            dirs::config_dir()
                .map(|p| p.join("curve-raster/config.yaml"))
                .unwrap_or_default(),
        ),
    };
    if cli.clamp_degenerate {
        config.degenerate_policy = DegeneratePolicy::Clamp;
    }
    if cli.steps.is_some() && !cli.algorithm.is_parametric() {
        log::warn!("--steps has no effect on {}", cli.algorithm);
    }

    let mut request = CurveRequest::new(cli.algorithm, cli.points);
    if let Some(steps) = cli.steps {
        request = request.steps(steps);
    }
    if let Some(limit) = cli.limit {
        request = request.limit(limit);
    }

    let pixels = request.rasterize(&config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for p in &pixels {
        writeln!(out, "{} {} {}", p.x, p.y, p.intensity)?;
    }
    out.flush()?;

    Ok(())
}
