use asset_pipeline::{
    pipeline::{self, PipelineConfig, PipelineError},
    trace,
};

fn main() {
    trace::init_tracing();

    if let Err(e) = run() {
        eprintln!("asset-pipeline: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let config = PipelineConfig::default();
    let assets = pipeline::default_assets();

    tracing::info!("--- Multithreaded Asset Pipeline Demo ---");
    tracing::info!(
        fps = config.target_fps,
        load_delay = ?config.load_delay,
        "game loop keeps its cadence while assets load in the background"
    );

    let report = pipeline::run(&config, &assets)?;

    tracing::info!(
        frames = report.frames,
        loaded = report.loaded,
        used = report.used.len(),
        left_in_queue = report.left_in_queue.len(),
        "--- Demo Complete ---"
    );
    Ok(())
}
