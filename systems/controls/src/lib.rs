#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure input-routing system that converts frame input into world commands.
//!
//! Pointer presses are routed by screen region, quick double taps reload, and
//! keyboard shortcuts map one-to-one onto commands.

mod taps;

pub use taps::{TapDetector, TapState};

use std::time::Duration;

use drop_zone_core::Command;
use drop_zone_rendering::{FrameInput, PointerEvent, Shortcut};
use glam::Vec2;

const BOTTOM_BAND_START: f32 = 0.75;
const TOP_BAND_END: f32 = 0.25;

/// Timing parameters for tap recognition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    tap_threshold: Duration,
    double_tap_window: Duration,
}

impl Config {
    /// Creates a configuration from explicit thresholds.
    ///
    /// `tap_threshold` is the longest press still counted as a tap and
    /// `double_tap_window` the longest gap between the presses of a double tap.
    #[must_use]
    pub const fn new(tap_threshold: Duration, double_tap_window: Duration) -> Self {
        Self {
            tap_threshold,
            double_tap_window,
        }
    }

    /// Longest press still counted as a tap.
    #[must_use]
    pub const fn tap_threshold(&self) -> Duration {
        self.tap_threshold
    }

    /// Longest gap between the two presses of a double tap.
    #[must_use]
    pub const fn double_tap_window(&self) -> Duration {
        self.double_tap_window
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(400))
    }
}

/// Maps a pointer press to the command bound to its screen region.
///
/// The bottom quarter moves left or right depending on the half that was
/// pressed, the top quarter shoots, and the middle band deploys the parachute.
/// Presses exactly on a region boundary are ignored.
#[must_use]
pub fn route_press(position: Vec2, screen_size: Vec2) -> Option<Command> {
    let half_width = screen_size.x / 2.0;
    let bottom_band = screen_size.y * BOTTOM_BAND_START;
    let top_band = screen_size.y * TOP_BAND_END;

    if position.x < half_width && position.y > bottom_band {
        Some(Command::MovePlayer { dx: -1, dy: 0 })
    } else if position.x > half_width && position.y > bottom_band {
        Some(Command::MovePlayer { dx: 1, dy: 0 })
    } else if position.y < top_band {
        Some(Command::Shoot)
    } else if position.y > top_band && position.y < bottom_band {
        Some(Command::DeployParachute)
    } else {
        None
    }
}

/// Maps a keyboard shortcut to its command.
#[must_use]
pub const fn route_shortcut(shortcut: Shortcut) -> Command {
    match shortcut {
        Shortcut::MoveUp => Command::MovePlayer { dx: 0, dy: -1 },
        Shortcut::MoveDown => Command::MovePlayer { dx: 0, dy: 1 },
        Shortcut::MoveLeft => Command::MovePlayer { dx: -1, dy: 0 },
        Shortcut::MoveRight => Command::MovePlayer { dx: 1, dy: 0 },
        Shortcut::Shoot => Command::Shoot,
        Shortcut::Reload => Command::Reload,
        Shortcut::Parachute => Command::DeployParachute,
        Shortcut::UseHealthKit => Command::UseHealthKit,
        Shortcut::ToggleVehicle => Command::ToggleVehicle,
        Shortcut::SelectWeapon(slot) => Command::SwitchWeapon { slot },
        Shortcut::Airdrop => Command::CallAirdrop,
    }
}

/// Input-routing system that owns the double-tap state machine.
#[derive(Debug, Default)]
pub struct Controls {
    taps: TapDetector,
}

impl Controls {
    /// Creates a new controls system using the provided timing configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            taps: TapDetector::new(config),
        }
    }

    /// Current state of the double-tap recogniser.
    #[must_use]
    pub fn tap_state(&self) -> TapState {
        self.taps.state()
    }

    /// Consumes a frame of input and emits the resulting commands in input order.
    ///
    /// Pointer transitions are processed before keyboard shortcuts.
    pub fn handle(&mut self, input: &FrameInput, out: &mut Vec<Command>) {
        for event in &input.pointer_events {
            match *event {
                PointerEvent::Down { position, .. } => {
                    out.extend(route_press(position, input.screen_size));
                }
                PointerEvent::Up { down_at, at, .. } => {
                    if self.taps.release(down_at, at) {
                        out.push(Command::Reload);
                    }
                }
            }
        }

        out.extend(input.shortcuts.iter().copied().map(route_shortcut));

        self.taps.expire(input.now);
    }
}
