use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use room_planner::logging::{LogEvent, LogSink};
use room_planner::{
    Catalog, FloorPlanRenderer, LayoutEngine, Logger, LoggingResult, PlannerConfig, RoomConfig,
    RoomType, select_layout,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn sweep() -> Vec<RoomConfig> {
    let mut rooms = Vec::new();
    for room_type in RoomType::ALL {
        for width_cm in (200..=600).step_by(50) {
            for depth_cm in (200..=600).step_by(50) {
                rooms.push(RoomConfig::from_centimeters(
                    width_cm as f64,
                    depth_cm as f64,
                    room_type,
                ));
            }
        }
    }
    rooms
}

fn select_layout_sweep(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let rooms = sweep();
    c.bench_function("select_layout_sweep", |b| {
        b.iter(|| {
            for room in &rooms {
                let _ = black_box(select_layout(&catalog, black_box(room)));
            }
        });
    });
}

fn engine_with_logging(c: &mut Criterion) {
    let mut config = PlannerConfig {
        logger: Some(Logger::new(NullSink)),
        ..PlannerConfig::default()
    };
    config.enable_metrics();
    let engine = LayoutEngine::with_config(Arc::new(Catalog::builtin()), config)
        .expect("builtin catalog covers every strategy");
    let room = RoomConfig::new(5.0, 4.0, RoomType::LivingRoom);

    c.bench_function("engine_plan_scene", |b| {
        b.iter(|| {
            let scene = engine.plan_scene(black_box(&room)).expect("scene");
            black_box(scene.to_json().expect("json"));
        });
    });
}

fn floor_plan_render(c: &mut Criterion) {
    let layout = select_layout(
        &Catalog::builtin(),
        &RoomConfig::new(6.0, 5.0, RoomType::Bedroom),
    )
    .expect("layout");
    let renderer = FloorPlanRenderer::with_default();
    c.bench_function("floor_plan_render", |b| {
        b.iter(|| black_box(renderer.render(black_box(&layout))));
    });
}

criterion_group!(
    benches,
    select_layout_sweep,
    engine_with_logging,
    floor_plan_render
);
criterion_main!(benches);
