#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Drop Zone experience.

use drop_zone_core::Command;
use drop_zone_rendering::{
    ActorPresentation, Color, HudPresentation, RenderingError, SafeZonePresentation, Scene,
};
use drop_zone_world::{query, World};

/// Pixels covered by a grid cell unless configured otherwise.
pub const DEFAULT_CELL_PIXELS: f32 = 40.0;

const PLAYER_COLOR: Color = Color::from_rgb_u8(0x3a, 0x7b, 0xd5);
const ENEMY_COLOR: Color = Color::from_rgb_u8(0xc8, 0x2a, 0x36);
const SAFE_ZONE_COLOR: Color = Color::from_hex(0x00ff00, 0.2);

/// Produces data required to greet the player and draw the first frame.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Command that opens the session with music and the spoken introduction.
    #[must_use]
    pub const fn start_command(&self) -> Command {
        Command::StartGame
    }

    /// Builds the initial scene from the world's starting values.
    pub fn scene(&self, world: &World, cell_pixels: f32) -> Result<Scene, RenderingError> {
        let safe_zone = query::safe_zone(world);
        Scene::new(
            cell_pixels,
            query::grid_size(world),
            SafeZonePresentation {
                center: safe_zone.center(),
                radius: safe_zone.radius(),
                color: SAFE_ZONE_COLOR,
            },
            player_presentation(world),
            enemy_presentations(world),
            hud_presentation(world, None),
        )
    }

    /// Copies the world's current state into an existing scene.
    ///
    /// The caption is only replaced when a new one is provided.
    pub fn refresh_scene(&self, world: &World, scene: &mut Scene, caption: Option<String>) {
        scene.player = player_presentation(world);
        scene.enemies = enemy_presentations(world);
        let caption = caption.or_else(|| scene.hud.caption.take());
        scene.hud = hud_presentation(world, caption);
    }
}

fn player_presentation(world: &World) -> ActorPresentation {
    ActorPresentation::new(query::player(world).cell, PLAYER_COLOR)
}

fn enemy_presentations(world: &World) -> Vec<ActorPresentation> {
    query::enemies(world)
        .iter()
        .map(|cell| ActorPresentation::new(*cell, ENEMY_COLOR))
        .collect()
}

fn hud_presentation(world: &World, caption: Option<String>) -> HudPresentation {
    let player = query::player(world);
    HudPresentation {
        ammo: player.ammo,
        health: player.health,
        weapon: query::current_weapon(world),
        in_vehicle: player.in_vehicle,
        caption,
    }
}
