use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use drop_zone_core::SoundEffect;
use serde::Deserialize;
use thiserror::Error;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;
const DEFAULT_SOUND_DIRECTORY: &str = "assets/audio";

/// Location of a sound effect and how it should be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundSource {
    /// File path or URL handed to the audio capability.
    pub location: String,
    /// Whether playback repeats until stopped.
    pub looped: bool,
}

/// Mapping from sound effects to their sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundManifest {
    sources: BTreeMap<SoundEffect, SoundSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestDocument {
    version: u32,
    #[serde(default)]
    sounds: BTreeMap<String, String>,
}

impl Default for SoundManifest {
    /// Every effect mapped to a bare file name under `assets/audio`.
    fn default() -> Self {
        let sources = SoundEffect::ALL
            .into_iter()
            .map(|effect| {
                let location = format!("{DEFAULT_SOUND_DIRECTORY}/{}", default_file_name(effect));
                (effect, source_for(effect, location))
            })
            .collect();
        Self { sources }
    }
}

impl SoundManifest {
    /// Manifest without any sources; every effect is skipped.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sources: BTreeMap::new(),
        }
    }

    /// Returns the default manifest path relative to the repository root.
    #[must_use]
    pub fn default_manifest_path() -> PathBuf {
        PathBuf::from(DEFAULT_SOUND_DIRECTORY).join("manifest.toml")
    }

    /// Loads a manifest from the TOML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses a manifest from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ManifestError> {
        let document: ManifestDocument = toml::from_str(contents)?;
        if document.version != SUPPORTED_MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: document.version,
            });
        }

        let mut sources = BTreeMap::new();
        for (name, location) in document.sounds {
            let effect = SoundEffect::ALL
                .into_iter()
                .find(|effect| effect.key() == name)
                .ok_or(ManifestError::UnknownSound { name })?;
            let _ = sources.insert(effect, source_for(effect, location));
        }

        Ok(Self { sources })
    }

    /// Source configured for the effect, if any.
    #[must_use]
    pub fn source(&self, effect: SoundEffect) -> Option<&SoundSource> {
        self.sources.get(&effect)
    }

    /// Effects that have no configured source.
    #[must_use]
    pub fn missing(&self) -> Vec<SoundEffect> {
        SoundEffect::ALL
            .into_iter()
            .filter(|effect| !self.sources.contains_key(effect))
            .collect()
    }
}

fn source_for(effect: SoundEffect, location: String) -> SoundSource {
    SoundSource {
        location,
        looped: effect.is_looping(),
    }
}

fn default_file_name(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::BackgroundMusic => "background-music.mp3",
        SoundEffect::Step => "footsteps.mp3",
        SoundEffect::Gunshot => "gunshot.mp3",
        SoundEffect::NoAmmo => "no-ammo.mp3",
        SoundEffect::Warning => "warning.mp3",
        SoundEffect::EnemyNear => "enemy-near.mp3",
        SoundEffect::StartGame => "start-game.mp3",
        SoundEffect::Parachute => "parachute.mp3",
        SoundEffect::Vehicle => "vehicle.mp3",
        SoundEffect::HealthKit => "health-kit.mp3",
        SoundEffect::Airdrop => "airdrop.mp3",
    }
}

/// Errors reported while loading a sound manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read sound manifest {}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The manifest is not valid TOML or has unexpected fields.
    #[error("malformed sound manifest")]
    Parse(#[from] toml::de::Error),
    /// The manifest declares a version this build cannot read.
    #[error("unsupported sound manifest version {found}")]
    UnsupportedVersion {
        /// Version declared by the manifest.
        found: u32,
    },
    /// The manifest names a sound effect the game does not know.
    #[error("unknown sound effect `{name}`")]
    UnknownSound {
        /// Name found in the manifest.
        name: String,
    },
}
