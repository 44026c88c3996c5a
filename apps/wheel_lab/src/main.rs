use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use urania::rendering::{
    ascendant_offset, house_lines, place_bodies, zodiac_band, RingGeometry, Shape, WheelGeometry,
};
use urania::{AdjustedPosition, ChartSnapshot, ResolverSettings, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Single,
    Multi,
    Dual,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => Strategy::SingleTrack,
            Mode::Multi => Strategy::MultiTrack,
            Mode::Dual => Strategy::DualChart,
        }
    }
}

/// Resolve glyph collisions for a chart and print the placements as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(help = "Chart JSON with `bodies` and `houses`")]
    chart: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,

    #[arg(long, help = "TOML file overriding resolver settings")]
    settings: Option<PathBuf>,

    #[arg(long, help = "Second chart merged in for --mode dual")]
    secondary: Option<PathBuf>,

    #[arg(long, help = "Also emit zodiac band, house lines and body shapes for a 600px wheel")]
    shapes: bool,
}

#[derive(Serialize)]
struct Report {
    strategy: Strategy,
    positions: Vec<AdjustedPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shapes: Option<Vec<Shape>>,
}

fn load_chart(path: &Path) -> anyhow::Result<ChartSnapshot> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartSnapshot::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => ResolverSettings::load_from_file(path)?,
        None => ResolverSettings::default(),
    };

    let mut chart = load_chart(&args.chart)?;
    if let Some(path) = &args.secondary {
        if !matches!(args.mode, Mode::Dual) {
            log::warn!("--secondary is only merged in dual mode; ignoring {}", path.display());
        } else {
            let secondary = load_chart(path)?;
            chart.bodies.extend(secondary.bodies);
        }
    }

    let strategy = Strategy::from(args.mode);
    let positions = strategy.resolve(&chart.bodies, &chart.houses, &settings)?;
    log::info!("resolved {} bodies with {:?}", positions.len(), strategy);

    let rotation_offset = chart
        .houses
        .iter()
        .find(|cusp| cusp.house == 1)
        .map(|asc| ascendant_offset(asc.longitude))
        .unwrap_or(0.0);

    let shapes = args.shapes.then(|| {
        let frame = WheelGeometry {
            rotation_offset,
            ..WheelGeometry::default()
        };
        let ring = RingGeometry {
            rotation_offset,
            ..RingGeometry::default()
        };
        let mut shapes = zodiac_band(&frame);
        shapes.extend(house_lines(&chart.houses, &frame));
        shapes.extend(place_bodies(&positions, &chart.bodies, &ring));
        shapes
    });

    let report = Report {
        strategy,
        positions,
        shapes,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
