//! Loader and game loop wired through a [`Channel`].
//!
//! The loader runs on its own thread and pushes each asset after a slow
//! `load`. The game loop runs on the calling thread at a fixed cadence and
//! takes at most one asset per frame, only after checking the channel is
//! non-empty, so a frame never waits on the loader.

use std::{thread, time::Duration};

use crate::{asset::Asset, channel::Channel};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to spawn loader thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("loader thread panicked")]
    LoaderPanicked,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of game frames to run before stopping.
    pub frames: u32,
    pub target_fps: u32,
    /// Simulated load time per asset.
    pub load_delay: Duration,
    /// Log a progress line every this many frames.
    pub report_every: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            target_fps: 60,
            load_delay: Duration::from_millis(100),
            report_every: 60,
        }
    }
}

impl PipelineConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

#[derive(Debug, Default)]
pub struct GameStats {
    pub frames: u32,
    pub used: Vec<Asset>,
}

#[derive(Debug)]
pub struct PipelineReport {
    pub frames: u32,
    pub loaded: usize,
    pub used: Vec<Asset>,
    /// Assets the game loop never got to, drained after the loader joined.
    pub left_in_queue: Vec<Asset>,
}

pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("PlayerTexture", 1),
        Asset::new("EnemyMesh", 2),
        Asset::new("Environment", 3),
        Asset::new("WeaponSound", 4),
        Asset::new("UIFont", 5),
    ]
}

/// Producer side: loads each asset in order and hands it to the game.
pub fn run_loader(queue: &Channel<Asset>, assets: &[Asset], load_delay: Duration) -> usize {
    tracing::info!(count = assets.len(), "[LOADER] thread started");

    let mut pushed = 0;
    for asset in assets {
        tracing::info!(name = %asset.name, "[LOADER] loading started");

        let loaded = asset.clone();
        loaded.load(load_delay);

        tracing::debug!(name = %loaded.name, "[LOADER] sending to game");
        queue.push(loaded);
        pushed += 1;
    }

    tracing::info!(pushed, "[LOADER] thread finished, all assets loaded");
    pushed
}

/// Consumer side: fixed-cadence frames, at most one asset per frame.
pub fn run_game_loop(queue: &Channel<Asset>, config: &PipelineConfig) -> GameStats {
    tracing::info!(frames = config.frames, "[GAME] main loop running, waiting for assets");

    let mut stats = GameStats::default();
    for frame in 1..=config.frames {
        thread::sleep(config.frame_interval());
        stats.frames = frame;

        if !queue.is_empty() {
            let asset = queue.pop();
            asset.use_asset();
            stats.used.push(asset);
        }

        if config.report_every != 0 && frame % config.report_every == 0 {
            let backlog = if queue.is_empty() { "0" } else { ">0" };
            tracing::info!(frame, fps = config.target_fps, backlog, "[GAME] progress");
        }
    }

    stats
}

/// Runs the loader on a background thread and the game loop on this one,
/// then joins the loader.
pub fn run(config: &PipelineConfig, assets: &[Asset]) -> Result<PipelineReport, PipelineError> {
    run_with_loader(config, |queue| run_loader(queue, assets, config.load_delay))
}

fn run_with_loader<F>(config: &PipelineConfig, loader: F) -> Result<PipelineReport, PipelineError>
where
    F: FnOnce(&Channel<Asset>) -> usize + Send,
{
    let queue = Channel::new();

    let (stats, loaded) = thread::scope(|s| {
        let loader = thread::Builder::new()
            .name("loader".into())
            .spawn_scoped(s, || loader(&queue))?;

        let stats = run_game_loop(&queue, config);

        let loaded = loader.join().map_err(|_| PipelineError::LoaderPanicked)?;
        Ok::<_, PipelineError>((stats, loaded))
    })?;

    let left_in_queue = std::iter::from_fn(|| queue.try_pop()).collect::<Vec<_>>();
    if !left_in_queue.is_empty() {
        tracing::warn!(count = left_in_queue.len(), "assets still queued when the game loop ended");
    }

    Ok(PipelineReport {
        frames: stats.frames,
        loaded,
        used: stats.used,
        left_in_queue,
    })
}
