#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Drop Zone.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! Sound therefore travels through the feedback adapter instead, and macroquad
//! is used without its default `audio` feature.
//!
//! The backend draws the landing grid, the safe zone, every actor and a small
//! heads-up display. Touches arrive as simulated mouse input, so pointer
//! transitions are timestamped here and handed to the controls system untouched.

use std::time::Duration;

use anyhow::Result;
use drop_zone_rendering::{
    ActorPresentation, Color, FrameInput, PointerEvent, Presentation, RenderingBackend, Scene,
    Shortcut,
};
use glam::Vec2;
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, is_mouse_button_released, mouse_position, KeyCode,
    MouseButton,
};

const HUD_HEIGHT: f32 = 56.0;
const HUD_FONT_SIZE: f32 = 22.0;
const ACTOR_RADIUS: f32 = 0.4;
const GRID_LINE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.08);
const SAFE_ZONE_OUTLINE: f32 = 2.0;
const HUD_TEXT_COLOR: Color = Color::new(0.92, 0.92, 0.92, 1.0);

const KEY_BINDINGS: [(KeyCode, Shortcut); 17] = [
    (KeyCode::Up, Shortcut::MoveUp),
    (KeyCode::W, Shortcut::MoveUp),
    (KeyCode::Down, Shortcut::MoveDown),
    (KeyCode::S, Shortcut::MoveDown),
    (KeyCode::Left, Shortcut::MoveLeft),
    (KeyCode::A, Shortcut::MoveLeft),
    (KeyCode::Right, Shortcut::MoveRight),
    (KeyCode::D, Shortcut::MoveRight),
    (KeyCode::Space, Shortcut::Shoot),
    (KeyCode::R, Shortcut::Reload),
    (KeyCode::P, Shortcut::Parachute),
    (KeyCode::H, Shortcut::UseHealthKit),
    (KeyCode::V, Shortcut::ToggleVehicle),
    (KeyCode::Key1, Shortcut::SelectWeapon(1)),
    (KeyCode::Key2, Shortcut::SelectWeapon(2)),
    (KeyCode::Key3, Shortcut::SelectWeapon(3)),
    (KeyCode::G, Shortcut::Airdrop),
];

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static,
    {
        let Self { swap_interval } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let side = scene.grid_pixels().ceil() as i32;
        let (window_width, window_height) = (side, side + HUD_HEIGHT as i32);
        let mut config = macroquad::window::Conf {
            window_title,
            window_width,
            window_height,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let mut pointer = PointerTracker::default();
            let background = to_macroquad_color(clear_color);

            loop {
                if is_key_pressed(KeyCode::Escape) {
                    break;
                }

                let screen_size = Vec2::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                let now = Duration::from_secs_f64(macroquad::time::get_time().max(0.0));
                let (cursor_x, cursor_y) = mouse_position();
                let frame_input = gather_frame_input_from_observations(
                    &mut pointer,
                    PointerObservation {
                        position: Vec2::new(cursor_x, cursor_y),
                        pressed: is_mouse_button_pressed(MouseButton::Left),
                        released: is_mouse_button_released(MouseButton::Left),
                    },
                    screen_size,
                    now,
                    poll_shortcuts(),
                );

                update_scene(frame_input, &mut scene);

                macroquad::window::clear_background(background);
                let metrics = SceneMetrics::from_scene(&scene, screen_size);
                draw_grid(&scene, &metrics);
                draw_safe_zone(&scene, &metrics);
                for enemy in &scene.enemies {
                    draw_actor(enemy, &scene, &metrics);
                }
                draw_actor(&scene.player, &scene, &metrics);
                draw_hud(&scene);

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

/// Raw left-button state sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PointerObservation {
    position: Vec2,
    pressed: bool,
    released: bool,
}

/// Remembers when the active press started so releases can report its duration.
#[derive(Clone, Copy, Debug, Default)]
struct PointerTracker {
    pressed_at: Option<Duration>,
}

fn poll_shortcuts() -> Vec<Shortcut> {
    shortcuts_from_keys(is_key_pressed)
}

fn shortcuts_from_keys(mut pressed: impl FnMut(KeyCode) -> bool) -> Vec<Shortcut> {
    let mut shortcuts = Vec::new();
    for (key, shortcut) in KEY_BINDINGS {
        if pressed(key) && !shortcuts.contains(&shortcut) {
            shortcuts.push(shortcut);
        }
    }
    shortcuts
}

fn gather_frame_input_from_observations(
    pointer: &mut PointerTracker,
    observation: PointerObservation,
    screen_size: Vec2,
    now: Duration,
    shortcuts: Vec<Shortcut>,
) -> FrameInput {
    let mut pointer_events = Vec::new();

    if observation.pressed {
        pointer.pressed_at = Some(now);
        pointer_events.push(PointerEvent::Down {
            position: observation.position,
            at: now,
        });
    }

    if observation.released {
        if let Some(down_at) = pointer.pressed_at.take() {
            pointer_events.push(PointerEvent::Up {
                position: observation.position,
                down_at,
                at: now,
            });
        }
    }

    FrameInput {
        screen_size,
        now,
        pointer_events,
        shortcuts,
    }
}

/// Placement of the landing grid inside the window.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SceneMetrics {
    scale: f32,
    offset: Vec2,
}

impl SceneMetrics {
    fn from_scene(scene: &Scene, screen_size: Vec2) -> Self {
        let grid_pixels = scene.grid_pixels();
        let available = Vec2::new(screen_size.x, (screen_size.y - HUD_HEIGHT).max(0.0));
        let scale = if grid_pixels <= f32::EPSILON {
            1.0
        } else {
            (available.x / grid_pixels).min(available.y / grid_pixels)
        };
        let scaled = grid_pixels * scale;
        let offset = Vec2::new(
            ((available.x - scaled) * 0.5).max(0.0),
            HUD_HEIGHT + ((available.y - scaled) * 0.5).max(0.0),
        );

        Self { scale, offset }
    }

    fn cell_center(&self, scene: &Scene, cell: drop_zone_core::GridCoord) -> Vec2 {
        let anchor = scene.cell_to_pixels(cell) + Vec2::splat(scene.cell_pixels * 0.5);
        self.offset + anchor * self.scale
    }

    fn cell_size(&self, scene: &Scene) -> f32 {
        scene.cell_pixels * self.scale
    }
}

fn draw_grid(scene: &Scene, metrics: &SceneMetrics) {
    let color = to_macroquad_color(GRID_LINE_COLOR);
    let step = metrics.cell_size(scene);
    let extent = scene.grid_pixels() * metrics.scale;
    for line in 0..=scene.grid_size {
        let along = line as f32 * step;
        macroquad::shapes::draw_line(
            metrics.offset.x + along,
            metrics.offset.y,
            metrics.offset.x + along,
            metrics.offset.y + extent,
            1.0,
            color,
        );
        macroquad::shapes::draw_line(
            metrics.offset.x,
            metrics.offset.y + along,
            metrics.offset.x + extent,
            metrics.offset.y + along,
            1.0,
            color,
        );
    }
}

fn draw_safe_zone(scene: &Scene, metrics: &SceneMetrics) {
    let zone = &scene.safe_zone;
    let center = metrics.cell_center(scene, zone.center);
    let radius = zone.radius * metrics.cell_size(scene);
    macroquad::shapes::draw_circle(center.x, center.y, radius, to_macroquad_color(zone.color));
    macroquad::shapes::draw_circle_lines(
        center.x,
        center.y,
        radius,
        SAFE_ZONE_OUTLINE,
        to_macroquad_color(zone.color.with_alpha(0.6)),
    );
}

fn draw_actor(actor: &ActorPresentation, scene: &Scene, metrics: &SceneMetrics) {
    let center = metrics.cell_center(scene, actor.cell);
    let radius = metrics.cell_size(scene) * ACTOR_RADIUS;
    macroquad::shapes::draw_circle(center.x, center.y, radius, to_macroquad_color(actor.color));
}

fn draw_hud(scene: &Scene) {
    let color = to_macroquad_color(HUD_TEXT_COLOR);
    draw_label(&hud_status_line(scene), 12.0, HUD_FONT_SIZE, color);
    if let Some(caption) = &scene.hud.caption {
        draw_label(caption, 12.0, HUD_FONT_SIZE * 2.1, color);
    }
}

fn draw_label(text: &str, x: f32, baseline: f32, color: macroquad::color::Color) {
    let _ = macroquad::text::draw_text(text, x, baseline, HUD_FONT_SIZE, color);
}

fn hud_status_line(scene: &Scene) -> String {
    let hud = &scene.hud;
    let mut line = format!(
        "Ammo {}  Health {}  Weapon {}",
        hud.ammo, hud.health, hud.weapon
    );
    if hud.in_vehicle {
        line.push_str("  [vehicle]");
    }
    line
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drop_zone_core::{GridCoord, Weapon};
    use drop_zone_rendering::{HudPresentation, SafeZonePresentation};

    fn scene() -> Scene {
        Scene::new(
            40.0,
            20,
            SafeZonePresentation {
                center: GridCoord::new(10, 10),
                radius: 15.0,
                color: Color::from_hex(0x00ff00, 0.2),
            },
            ActorPresentation::new(GridCoord::new(5, 5), Color::new(0.0, 0.0, 1.0, 1.0)),
            vec![ActorPresentation::new(
                GridCoord::new(3, 7),
                Color::new(1.0, 0.0, 0.0, 1.0),
            )],
            HudPresentation {
                ammo: 10,
                health: 100,
                weapon: Weapon::Pistol,
                in_vehicle: false,
                caption: None,
            },
        )
        .expect("valid scene")
    }

    fn observation(pressed: bool, released: bool) -> PointerObservation {
        PointerObservation {
            position: Vec2::new(100.0, 20.0),
            pressed,
            released,
        }
    }

    #[test]
    fn release_reports_the_matching_press_time() {
        let mut tracker = PointerTracker::default();
        let screen = Vec2::new(800.0, 856.0);

        let down = gather_frame_input_from_observations(
            &mut tracker,
            observation(true, false),
            screen,
            Duration::from_millis(1_000),
            Vec::new(),
        );
        let up = gather_frame_input_from_observations(
            &mut tracker,
            observation(false, true),
            screen,
            Duration::from_millis(1_120),
            Vec::new(),
        );

        assert_eq!(
            down.pointer_events,
            vec![PointerEvent::Down {
                position: Vec2::new(100.0, 20.0),
                at: Duration::from_millis(1_000),
            }]
        );
        assert_eq!(
            up.pointer_events,
            vec![PointerEvent::Up {
                position: Vec2::new(100.0, 20.0),
                down_at: Duration::from_millis(1_000),
                at: Duration::from_millis(1_120),
            }]
        );
        assert_eq!(up.screen_size, screen);
    }

    #[test]
    fn press_and_release_in_one_frame_produce_both_events() {
        let mut tracker = PointerTracker::default();

        let input = gather_frame_input_from_observations(
            &mut tracker,
            observation(true, true),
            Vec2::new(800.0, 600.0),
            Duration::from_millis(50),
            vec![Shortcut::Shoot],
        );

        assert_eq!(input.pointer_events.len(), 2);
        assert!(matches!(
            input.pointer_events[1],
            PointerEvent::Up { down_at, at, .. } if down_at == at
        ));
        assert_eq!(input.shortcuts, vec![Shortcut::Shoot]);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = PointerTracker::default();

        let input = gather_frame_input_from_observations(
            &mut tracker,
            observation(false, true),
            Vec2::new(800.0, 600.0),
            Duration::from_millis(50),
            Vec::new(),
        );

        assert!(input.pointer_events.is_empty());
    }

    #[test]
    fn aliased_keys_produce_one_shortcut() {
        let shortcuts = shortcuts_from_keys(|key| {
            matches!(key, KeyCode::Up | KeyCode::W | KeyCode::Key2 | KeyCode::Space)
        });

        assert_eq!(
            shortcuts,
            vec![
                Shortcut::MoveUp,
                Shortcut::Shoot,
                Shortcut::SelectWeapon(2)
            ]
        );
    }

    #[test]
    fn grid_is_centred_below_the_hud() {
        let scene = scene();
        let metrics = SceneMetrics::from_scene(&scene, Vec2::new(1_000.0, 856.0));

        assert!((metrics.scale - 1.0).abs() < f32::EPSILON);
        assert_eq!(metrics.offset, Vec2::new(100.0, HUD_HEIGHT));
        assert_eq!(
            metrics.cell_center(&scene, GridCoord::new(0, 0)),
            Vec2::new(120.0, HUD_HEIGHT + 20.0)
        );
    }

    #[test]
    fn status_line_mentions_vehicle_only_when_inside() {
        let mut scene = scene();
        assert_eq!(hud_status_line(&scene), "Ammo 10  Health 100  Weapon pistol");

        scene.hud.in_vehicle = true;
        assert!(hud_status_line(&scene).ends_with("[vehicle]"));
    }
}
