#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Drop Zone experience.

mod config;
mod headless;
mod session;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use drop_zone_feedback::{Feedback, LogAudio, LogNarrator, SoundManifest};
use drop_zone_rendering::{Color, Presentation, RenderingBackend};
use drop_zone_rendering_macroquad::MacroquadBackend;
use drop_zone_world::World;

use crate::{
    config::{GameConfig, Overrides},
    session::Session,
};

const CLEAR_COLOR: Color = Color::from_rgb_u8(0x14, 0x1c, 0x16);

/// Audio-narrated grid survival game.
#[derive(Debug, Parser)]
#[command(name = "drop-zone", version)]
struct Args {
    /// TOML file describing the world, speech rate and sound manifest.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for parachute landings.
    #[arg(long)]
    seed: Option<u64>,
    /// Cells along each axis of the landing grid.
    #[arg(long, value_name = "CELLS")]
    grid_size: Option<u32>,
    /// Narration speed relative to normal speech.
    #[arg(long, value_name = "RATE")]
    speech_rate: Option<f32>,
    /// TOML file mapping sound effects to their sources.
    #[arg(long, value_name = "PATH")]
    sound_manifest: Option<PathBuf>,
    /// Read commands from standard input instead of opening a window.
    #[arg(long)]
    headless: bool,
    /// Synchronise presentation with the display refresh rate.
    #[arg(long, overrides_with = "no_vsync")]
    vsync: bool,
    /// Render frames as fast as possible.
    #[arg(long = "no-vsync", overrides_with = "vsync")]
    no_vsync: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        let vsync = match (self.vsync, self.no_vsync) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            seed: self.seed,
            grid_size: self.grid_size,
            speech_rate: self.speech_rate,
            sound_manifest: self.sound_manifest.clone(),
            vsync,
        }
    }
}

/// Entry point for the Drop Zone command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    config.apply_overrides(args.overrides());
    config.validate()?;

    let manifest = load_manifest(&config)?;
    let missing = manifest.missing();
    if !missing.is_empty() {
        log::warn!("sound manifest has no source for {missing:?}");
    }

    let world = World::with_config(config.world.clone()).context("failed to create world")?;
    let feedback = Feedback::new(manifest, LogAudio, LogNarrator, config.speech_rate);
    let mut session = Session::new(world, feedback);

    if args.headless {
        log::info!("running headless; type `quit` to leave");
        headless::run(&mut session, io::stdin().lock(), io::stdout().lock())
    } else {
        run_windowed(session, &config)
    }
}

fn load_manifest(config: &GameConfig) -> Result<SoundManifest> {
    if let Some(path) = &config.sound_manifest {
        return SoundManifest::from_path(path)
            .with_context(|| format!("failed to load sound manifest {}", path.display()));
    }

    let bundled = SoundManifest::default_manifest_path();
    if bundled.is_file() {
        SoundManifest::from_path(&bundled).context("failed to load bundled sound manifest")
    } else {
        log::info!("no sound manifest found, using default file names");
        Ok(SoundManifest::default())
    }
}

fn run_windowed(mut session: Session<LogAudio, LogNarrator>, config: &GameConfig) -> Result<()> {
    let bootstrap = session.bootstrap();
    let title = bootstrap.welcome_banner(session.world()).to_owned();
    let mut scene = bootstrap
        .scene(session.world(), config.cell_pixels)
        .context("failed to build initial scene")?;

    let caption = session.start();
    session
        .bootstrap()
        .refresh_scene(session.world(), &mut scene, caption);

    let presentation = Presentation::new(title, CLEAR_COLOR, scene);
    MacroquadBackend::new()
        .with_vsync(config.vsync)
        .run(presentation, move |input, scene| {
            session.handle_frame(&input, scene);
        })
}
