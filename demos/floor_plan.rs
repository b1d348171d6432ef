//! Plan a room from the command line.
//!
//! ```text
//! cargo run --example floor_plan -- 400 350 bedroom [--color] [--json] [--log <path>]
//! ```
//!
//! Dimensions are in centimeters, as entered in the visualizer form.

use std::env;
use std::io;
use std::sync::Arc;

use room_planner::{
    Catalog, FileSink, FloorPlanRenderer, FloorPlanSettings, LayoutEngine, Logger, PlannerConfig,
    RoomConfig, RoomType,
};

const LOG_MAX_BYTES: u64 = 1 << 20;

type DemoResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug)]
struct Options {
    width_cm: f64,
    depth_cm: f64,
    room_type: RoomType,
    color: bool,
    json: bool,
    log_path: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> DemoResult<Options> {
    let mut positional = Vec::new();
    let mut color = false;
    let mut json = false;
    let mut log_path = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--color" => color = true,
            "--json" => json = true,
            "--log" => log_path = Some(args.next().ok_or("--log expects a file path")?),
            _ => positional.push(arg),
        }
    }

    Ok(Options {
        width_cm: positional.first().map_or(Ok(400.0), |v| v.parse::<f64>())?,
        depth_cm: positional.get(1).map_or(Ok(350.0), |v| v.parse::<f64>())?,
        room_type: positional.get(2).map_or(Ok(RoomType::Bedroom), |v| v.parse::<RoomType>())?,
        color,
        json,
        log_path,
    })
}

fn main() -> DemoResult<()> {
    let Options {
        width_cm,
        depth_cm,
        room_type,
        color,
        json,
        log_path,
    } = parse_args(env::args().skip(1))?;

    let mut config = PlannerConfig::default();
    if let Some(path) = log_path {
        config.logger = Some(Logger::new(FileSink::new(path, LOG_MAX_BYTES)?));
    }
    config.enable_metrics();

    let engine = LayoutEngine::with_config(Arc::new(Catalog::builtin()), config)?;
    let room = RoomConfig::from_centimeters(width_cm, depth_cm, room_type);
    let layout = engine.plan(&room)?;

    let renderer = FloorPlanRenderer::new(FloorPlanSettings {
        color,
        ..FloorPlanSettings::default()
    });
    renderer.render_to(&mut io::stdout().lock(), &layout)?;

    for omission in &layout.omitted {
        println!("skipped {}: {}", omission.id, omission.reason);
    }
    println!("fingerprint {}", layout.fingerprint().to_hex());

    if json {
        let scene = engine.plan_scene(&room)?;
        println!("{}", scene.to_json_pretty()?);
    }

    engine.log_metrics();
    Ok(())
}
