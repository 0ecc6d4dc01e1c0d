use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use drop_zone_feedback::DEFAULT_SPEECH_RATE;
use drop_zone_system_bootstrap::DEFAULT_CELL_PIXELS;
use drop_zone_world::WorldConfig;
use serde::Deserialize;

/// Settings read from the configuration file before command-line overrides apply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    /// Initial layout of the world.
    pub(crate) world: WorldConfig,
    /// Speaking rate handed to the narrator.
    pub(crate) speech_rate: f32,
    /// Pixels covered by one grid cell.
    pub(crate) cell_pixels: f32,
    /// Sound manifest to load instead of the bundled one.
    pub(crate) sound_manifest: Option<PathBuf>,
    /// Whether presentation waits for the display refresh.
    pub(crate) vsync: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            speech_rate: DEFAULT_SPEECH_RATE,
            cell_pixels: DEFAULT_CELL_PIXELS,
            sound_manifest: None,
            vsync: true,
        }
    }
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Overrides {
    pub(crate) seed: Option<u64>,
    pub(crate) grid_size: Option<u32>,
    pub(crate) speech_rate: Option<f32>,
    pub(crate) sound_manifest: Option<PathBuf>,
    pub(crate) vsync: Option<bool>,
}

impl GameConfig {
    /// Reads the configuration file at `path`.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("malformed configuration {}", path.display()))
    }

    /// Replaces file values with the ones given on the command line.
    pub(crate) fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(seed) = overrides.seed {
            self.world.seed = seed;
        }
        if let Some(grid_size) = overrides.grid_size {
            self.world.grid_size = grid_size;
        }
        if let Some(speech_rate) = overrides.speech_rate {
            self.speech_rate = speech_rate;
        }
        if overrides.sound_manifest.is_some() {
            self.sound_manifest = overrides.sound_manifest;
        }
        if let Some(vsync) = overrides.vsync {
            self.vsync = vsync;
        }
    }

    /// Rejects values the adapters cannot work with.
    pub(crate) fn validate(&self) -> Result<()> {
        self.world
            .validate()
            .context("invalid world configuration")?;
        ensure!(
            self.speech_rate.is_finite() && self.speech_rate > 0.0,
            "speech rate must be positive (received {})",
            self.speech_rate
        );
        ensure!(
            self.cell_pixels.is_finite() && self.cell_pixels > 0.0,
            "cell size must be positive (received {})",
            self.cell_pixels
        );
        Ok(())
    }
}
