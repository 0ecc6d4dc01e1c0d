use drop_zone_core::{GridCoord, SafeZone, Weapon, DEFAULT_GRID_SIZE, MAX_AMMO, MAX_HEALTH};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SEED: u64 = 0x5afe_2011_e5d1_0c4b;

/// Initial layout of the world. Missing fields fall back to the default layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Number of cells along each axis considered for parachute landings.
    pub grid_size: u32,
    /// Seed for the landing generator.
    pub seed: u64,
    /// Player state at the start of the session.
    pub player: PlayerConfig,
    /// Safe zone the player should remain inside.
    pub safe_zone: SafeZone,
    /// Cells occupied by enemies, in announcement order.
    pub enemies: Vec<GridCoord>,
    /// Weapon selected when the session starts.
    pub weapon: Weapon,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: DEFAULT_SEED,
            player: PlayerConfig::default(),
            safe_zone: SafeZone::new(GridCoord::new(10, 10), 15.0),
            enemies: vec![GridCoord::new(12, 8), GridCoord::new(3, 7)],
            weapon: Weapon::Pistol,
        }
    }
}

impl WorldConfig {
    /// Checks that every value respects the world's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || i32::try_from(self.grid_size).is_err() {
            return Err(ConfigError::InvalidGridSize {
                grid_size: self.grid_size,
            });
        }

        if self.player.ammo > MAX_AMMO {
            return Err(ConfigError::AmmoOutOfRange {
                ammo: self.player.ammo,
            });
        }

        if self.player.health > MAX_HEALTH {
            return Err(ConfigError::HealthOutOfRange {
                health: self.player.health,
            });
        }

        let radius = self.safe_zone.radius();
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidSafeZoneRadius { radius });
        }

        Ok(())
    }
}

/// Player state at the start of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Cell the player starts on.
    pub start: GridCoord,
    /// Rounds loaded at the start.
    pub ammo: u32,
    /// Health at the start.
    pub health: u32,
    /// Whether the player starts inside the vehicle.
    pub in_vehicle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: GridCoord::new(5, 5),
            ammo: MAX_AMMO,
            health: MAX_HEALTH,
            in_vehicle: false,
        }
    }
}

/// Errors reported when a world configuration breaks an invariant.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The landing grid must contain at least one cell and fit signed coordinates.
    #[error("grid size {grid_size} must be between 1 and {}", i32::MAX)]
    InvalidGridSize {
        /// Grid size that failed validation.
        grid_size: u32,
    },
    /// Starting ammo exceeds the weapon capacity.
    #[error("starting ammo {ammo} exceeds the capacity of {}", MAX_AMMO)]
    AmmoOutOfRange {
        /// Ammo that failed validation.
        ammo: u32,
    },
    /// Starting health exceeds the maximum.
    #[error("starting health {health} exceeds the maximum of {}", MAX_HEALTH)]
    HealthOutOfRange {
        /// Health that failed validation.
        health: u32,
    },
    /// The safe zone radius must be a finite, non-negative number.
    #[error("safe zone radius {radius} must be finite and non-negative")]
    InvalidSafeZoneRadius {
        /// Radius that failed validation.
        radius: f32,
    },
}
