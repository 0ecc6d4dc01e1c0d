#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Drop Zone adapters.

use anyhow::Result as AnyResult;
use drop_zone_core::{GridCoord, Weapon};
use glam::Vec2;
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates a color from a packed `0xRRGGBB` value and an explicit alpha.
    #[must_use]
    pub const fn from_hex(hex: u32, alpha: f32) -> Self {
        let color = Self::from_rgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8);
        color.with_alpha(alpha)
    }

    /// Returns the same color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Keyboard shortcuts recognised by adapters, one per gameplay action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Step toward decreasing y.
    MoveUp,
    /// Step toward increasing y.
    MoveDown,
    /// Step toward decreasing x.
    MoveLeft,
    /// Step toward increasing x.
    MoveRight,
    /// Fire the current weapon.
    Shoot,
    /// Refill the weapon.
    Reload,
    /// Drop onto a random cell.
    Parachute,
    /// Use a health kit.
    UseHealthKit,
    /// Enter or exit the vehicle.
    ToggleVehicle,
    /// Select the weapon bound to the numbered key.
    SelectWeapon(u32),
    /// Request a supply drop.
    Airdrop,
}

/// Pointer transition captured by the adapter, timestamped relative to backend start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer was pressed.
    Down {
        /// Screen-space position in pixels.
        position: Vec2,
        /// Time at which the press started.
        at: Duration,
    },
    /// A pointer was released.
    Up {
        /// Screen-space position in pixels.
        position: Vec2,
        /// Time at which the matching press started.
        down_at: Duration,
        /// Time at which the pointer was released.
        at: Duration,
    },
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Size of the drawable area in pixels.
    pub screen_size: Vec2,
    /// Time elapsed since the backend started.
    pub now: Duration,
    /// Pointer transitions observed during the frame, in order.
    pub pointer_events: Vec<PointerEvent>,
    /// Keyboard shortcuts pressed during the frame, in order.
    pub shortcuts: Vec<Shortcut>,
}

/// Circle-shaped actor drawn on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorPresentation {
    /// Cell occupied by the actor.
    pub cell: GridCoord,
    /// Fill color of the marker.
    pub color: Color,
}

impl ActorPresentation {
    /// Creates a new actor descriptor.
    #[must_use]
    pub const fn new(cell: GridCoord, color: Color) -> Self {
        Self { cell, color }
    }
}

/// Translucent circle marking the safe zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeZonePresentation {
    /// Cell at the middle of the zone.
    pub center: GridCoord,
    /// Radius in cells.
    pub radius: f32,
    /// Fill color of the zone.
    pub color: Color,
}

/// Status line drawn over the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct HudPresentation {
    /// Rounds left in the weapon.
    pub ammo: u32,
    /// Player health.
    pub health: u32,
    /// Selected weapon.
    pub weapon: Weapon,
    /// Whether the player sits in the vehicle.
    pub in_vehicle: bool,
    /// Most recent narration, shown as a caption.
    pub caption: Option<String>,
}

/// Everything the backend draws in a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Pixels covered by one grid cell.
    pub cell_pixels: f32,
    /// Number of cells along each axis of the landing grid.
    pub grid_size: u32,
    /// Safe zone overlay.
    pub safe_zone: SafeZonePresentation,
    /// Player marker.
    pub player: ActorPresentation,
    /// Enemy markers.
    pub enemies: Vec<ActorPresentation>,
    /// Status line.
    pub hud: HudPresentation,
}

impl Scene {
    /// Creates a new scene descriptor.
    ///
    /// Returns an error when `cell_pixels` is not a positive finite number.
    pub fn new(
        cell_pixels: f32,
        grid_size: u32,
        safe_zone: SafeZonePresentation,
        player: ActorPresentation,
        enemies: Vec<ActorPresentation>,
        hud: HudPresentation,
    ) -> Result<Self, RenderingError> {
        if !cell_pixels.is_finite() || cell_pixels <= 0.0 {
            return Err(RenderingError::InvalidCellPixels { cell_pixels });
        }

        Ok(Self {
            cell_pixels,
            grid_size,
            safe_zone,
            player,
            enemies,
            hud,
        })
    }

    /// Converts a grid cell into the pixel position of its sprite anchor.
    #[must_use]
    pub fn cell_to_pixels(&self, cell: GridCoord) -> Vec2 {
        Vec2::new(cell.x() as f32, cell.y() as f32) * self.cell_pixels
    }

    /// Side length of the landing grid in pixels.
    #[must_use]
    pub fn grid_pixels(&self) -> f32 {
        self.grid_size as f32 * self.cell_pixels
    }
}

/// Complete description of what the backend should present.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Drop Zone scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the input captured during
    /// the frame and may mutate the scene before it is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cells must cover a positive number of pixels.
    InvalidCellPixels {
        /// Provided cell size that failed validation.
        cell_pixels: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellPixels { cell_pixels } => {
                write!(
                    f,
                    "cell_pixels must be positive and finite (received {cell_pixels})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
