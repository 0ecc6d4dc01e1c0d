#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Drop Zone game.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate player input into
//! [`Command`] values, the world executes those commands via its `apply` entry
//! point, and then broadcasts [`Event`] values describing what happened.
//! Systems consume the event stream and turn it into [`Cue`] values that the
//! audio and narration adapters deliver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Drop Zone.";

/// Rounds held by a fully loaded weapon.
pub const MAX_AMMO: u32 = 10;

/// Upper bound for player health.
pub const MAX_HEALTH: u32 = 100;

/// Health restored by a single health kit.
pub const HEALTH_KIT_AMOUNT: u32 = 30;

/// Manhattan distance at which a shot eliminates an enemy.
pub const SHOT_RANGE: u32 = 1;

/// Manhattan distance at which an enemy triggers a proximity alert.
pub const PROXIMITY_RANGE: u32 = 2;

/// Number of cells along each axis considered for parachute landings.
pub const DEFAULT_GRID_SIZE: u32 = 20;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Starts the session, queuing the intro music and narration.
    StartGame,
    /// Moves the player by the provided offsets. Moves are not bounded by the grid.
    MovePlayer {
        /// Offset applied to the horizontal coordinate.
        dx: i32,
        /// Offset applied to the vertical coordinate.
        dy: i32,
    },
    /// Fires the current weapon at every enemy adjacent to the player.
    Shoot,
    /// Refills the player's ammunition.
    Reload,
    /// Drops the player onto a random cell of the grid.
    DeployParachute,
    /// Consumes a health kit to restore health.
    UseHealthKit,
    /// Enters or exits the vehicle.
    ToggleVehicle,
    /// Selects the weapon bound to the provided slot number.
    SwitchWeapon {
        /// Slot number pressed by the player; unknown slots are ignored.
        slot: u32,
    },
    /// Requests a supply airdrop.
    CallAirdrop,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that the session started.
    GameStarted,
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: GridCoord,
        /// Cell the player occupies after moving.
        to: GridCoord,
    },
    /// Reports the outcome of the safe zone check that follows every move.
    SafeZoneChecked {
        /// Whether the player stands within the safe zone radius.
        inside: bool,
        /// Euclidean distance between the player and the zone center.
        distance: f32,
    },
    /// Reports a single enemy standing close to the player after a move.
    EnemyNearby {
        /// Cell occupied by the enemy.
        at: GridCoord,
        /// Manhattan distance between the player and the enemy.
        distance: u32,
    },
    /// Confirms that the player fired a round.
    ShotFired {
        /// Rounds left after the shot.
        ammo_remaining: u32,
    },
    /// Reports that the trigger was pulled with an empty weapon.
    OutOfAmmo,
    /// Confirms that a shot removed an enemy.
    EnemyEliminated {
        /// Cell the enemy occupied when it was hit.
        at: GridCoord,
    },
    /// Reports that no enemies remain after a shot.
    AllEnemiesDefeated,
    /// Confirms that the weapon was reloaded.
    AmmoReloaded {
        /// Rounds held after reloading.
        ammo: u32,
    },
    /// Confirms that the player landed after a parachute drop.
    ParachuteLanded {
        /// Cell the player landed on.
        at: GridCoord,
    },
    /// Confirms that a health kit restored health.
    HealthRestored {
        /// Health after applying the kit.
        health: u32,
    },
    /// Reports that a health kit was refused because health is full.
    HealthAlreadyFull,
    /// Confirms that the player entered or exited the vehicle.
    VehicleToggled {
        /// Whether the player sits in the vehicle after the toggle.
        occupied: bool,
    },
    /// Confirms that a different weapon was selected.
    WeaponSwitched {
        /// Weapon that became active.
        weapon: Weapon,
    },
    /// Announces that a supply drop is on its way.
    AirdropIncoming,
}

/// Single feedback item delivered to the audio or narration capability.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Play the named sound effect.
    Play(SoundEffect),
    /// Speak the provided message.
    Announce(String),
}

impl Cue {
    /// Creates an announcement cue.
    #[must_use]
    pub fn announce(message: impl Into<String>) -> Self {
        Self::Announce(message.into())
    }
}

/// Location of a single grid cell. Coordinates are signed because moves are unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    x: i32,
    y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the coordinate shifted by the provided offsets, saturating at the integer bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Computes the Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: GridCoord) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Computes the straight-line distance between two coordinates.
    #[must_use]
    pub fn euclidean_distance(self, other: GridCoord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Circular region the player should stay inside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    center: GridCoord,
    radius: f32,
}

impl SafeZone {
    /// Creates a new safe zone description.
    #[must_use]
    pub const fn new(center: GridCoord, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Cell at the middle of the zone.
    #[must_use]
    pub const fn center(&self) -> GridCoord {
        self.center
    }

    /// Radius of the zone measured in cells.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Straight-line distance between the provided cell and the zone center.
    #[must_use]
    pub fn distance_to(&self, cell: GridCoord) -> f64 {
        self.center.euclidean_distance(cell)
    }

    /// Reports whether the provided cell lies within the zone. The boundary counts as inside.
    #[must_use]
    pub fn contains(&self, cell: GridCoord) -> bool {
        self.distance_to(cell) <= f64::from(self.radius)
    }
}

/// Weapons the player can carry.
///
/// Switching weapons only changes narration; every weapon fires the same shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weapon {
    /// Default sidearm, bound to slot 1.
    Pistol,
    /// Bound to slot 2.
    Shotgun,
    /// Bound to slot 3.
    Sniper,
}

impl Weapon {
    /// Every weapon ordered by slot.
    pub const ALL: [Weapon; 3] = [Self::Pistol, Self::Shotgun, Self::Sniper];

    /// Looks up the weapon bound to a slot number.
    #[must_use]
    pub const fn from_slot(slot: u32) -> Option<Self> {
        match slot {
            1 => Some(Self::Pistol),
            2 => Some(Self::Shotgun),
            3 => Some(Self::Sniper),
            _ => None,
        }
    }

    /// Slot number the weapon is bound to.
    #[must_use]
    pub const fn slot(self) -> u32 {
        match self {
            Self::Pistol => 1,
            Self::Shotgun => 2,
            Self::Sniper => 3,
        }
    }

    /// Lowercase name used in narration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pistol => "pistol",
            Self::Shotgun => "shotgun",
            Self::Sniper => "sniper",
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named sound effects the game asks the audio capability to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEffect {
    /// Looping soundtrack started with the game.
    BackgroundMusic,
    /// Footstep played on every move.
    Step,
    /// Played when a round is fired.
    Gunshot,
    /// Played when the trigger is pulled on an empty weapon.
    NoAmmo,
    /// Played when the player leaves the safe zone.
    Warning,
    /// Played for every enemy close to the player.
    EnemyNear,
    /// Jingle played once the game starts.
    StartGame,
    /// Played after a parachute landing.
    Parachute,
    /// Played when entering or exiting the vehicle.
    Vehicle,
    /// Played when a health kit restores health.
    HealthKit,
    /// Played when an airdrop is called.
    Airdrop,
}

impl SoundEffect {
    /// Every sound effect in declaration order.
    pub const ALL: [SoundEffect; 11] = [
        Self::BackgroundMusic,
        Self::Step,
        Self::Gunshot,
        Self::NoAmmo,
        Self::Warning,
        Self::EnemyNear,
        Self::StartGame,
        Self::Parachute,
        Self::Vehicle,
        Self::HealthKit,
        Self::Airdrop,
    ];

    /// Stable identifier used by sound manifests.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BackgroundMusic => "backgroundMusic",
            Self::Step => "step",
            Self::Gunshot => "gunshot",
            Self::NoAmmo => "noAmmo",
            Self::Warning => "warning",
            Self::EnemyNear => "enemyNear",
            Self::StartGame => "startGame",
            Self::Parachute => "parachute",
            Self::Vehicle => "vehicle",
            Self::HealthKit => "healthKit",
            Self::Airdrop => "airdrop",
        }
    }

    /// Whether the effect repeats until stopped.
    #[must_use]
    pub const fn is_looping(self) -> bool {
        matches!(self, Self::BackgroundMusic)
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::{GridCoord, SafeZone, SoundEffect, Weapon};
    use serde::Deserialize;

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = GridCoord::new(1, 1);
        let destination = GridCoord::new(4, -3);
        assert_eq!(origin.manhattan_distance(destination), 7);
        assert_eq!(destination.manhattan_distance(origin), 7);
    }

    #[test]
    fn euclidean_distance_matches_expectation() {
        let distance = GridCoord::new(5, 5).euclidean_distance(GridCoord::new(10, 10));
        assert!((distance - 7.071_067_811_865_476).abs() < 1e-12);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let edge = GridCoord::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(1, -1), edge);
    }

    #[test]
    fn safe_zone_boundary_counts_as_inside() {
        let zone = SafeZone::new(GridCoord::new(0, 0), 5.0);
        assert!(zone.contains(GridCoord::new(3, 4)));
        assert!(!zone.contains(GridCoord::new(4, 4)));
    }

    #[test]
    fn safe_zone_edge_is_exact_for_large_radii() {
        let zone = SafeZone::new(GridCoord::new(0, 0), 10_000.0);
        assert!(zone.contains(GridCoord::new(10_000, 0)));
        assert!(!zone.contains(GridCoord::new(10_000, 1)));
    }

    #[test]
    fn weapon_slots_round_trip() {
        for weapon in Weapon::ALL {
            assert_eq!(Weapon::from_slot(weapon.slot()), Some(weapon));
        }
        assert_eq!(Weapon::from_slot(0), None);
        assert_eq!(Weapon::from_slot(9), None);
    }

    #[test]
    fn sound_keys_match_serde_names() {
        #[derive(Deserialize)]
        struct Entry {
            effect: SoundEffect,
        }

        for effect in SoundEffect::ALL {
            let document = format!("effect = \"{}\"", effect.key());
            let entry: Entry = toml::from_str(&document).expect("deserialize");
            assert_eq!(entry.effect, effect);
        }
    }

    #[test]
    fn only_background_music_loops() {
        let looping: Vec<SoundEffect> = SoundEffect::ALL
            .into_iter()
            .filter(|effect| effect.is_looping())
            .collect();
        assert_eq!(looping, vec![SoundEffect::BackgroundMusic]);
    }
}
