#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Drop Zone.

mod config;

pub use config::{ConfigError, PlayerConfig, WorldConfig};

use drop_zone_core::{
    Command, Event, GridCoord, SafeZone, Weapon, HEALTH_KIT_AMOUNT, MAX_AMMO, MAX_HEALTH,
    PROXIMITY_RANGE, SHOT_RANGE, WELCOME_BANNER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, Debug)]
struct Player {
    cell: GridCoord,
    ammo: u32,
    health: u32,
    in_vehicle: bool,
}

impl Player {
    fn from_config(config: &PlayerConfig) -> Self {
        Self {
            cell: config.start,
            ammo: config.ammo,
            health: config.health,
            in_vehicle: config.in_vehicle,
        }
    }
}

/// Represents the authoritative Drop Zone world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid_size: u32,
    player: Player,
    enemies: Vec<GridCoord>,
    safe_zone: SafeZone,
    weapon: Weapon,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new world using the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(WorldConfig::default())
    }

    /// Creates a new world from the provided configuration after validating it.
    pub fn with_config(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WorldConfig) -> Self {
        Self {
            banner: WELCOME_BANNER,
            grid_size: config.grid_size,
            player: Player::from_config(&config.player),
            enemies: config.enemies,
            safe_zone: config.safe_zone,
            weapon: config.weapon,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    fn move_player(&mut self, dx: i32, dy: i32, out_events: &mut Vec<Event>) {
        let from = self.player.cell;
        let to = from.offset(dx, dy);
        self.player.cell = to;
        out_events.push(Event::PlayerMoved { from, to });
        self.check_safe_zone(out_events);
        self.check_enemies(out_events);
    }

    fn check_safe_zone(&self, out_events: &mut Vec<Event>) {
        let cell = self.player.cell;
        out_events.push(Event::SafeZoneChecked {
            inside: self.safe_zone.contains(cell),
            distance: self.safe_zone.distance_to(cell) as f32,
        });
    }

    fn check_enemies(&self, out_events: &mut Vec<Event>) {
        let player = self.player.cell;
        for enemy in &self.enemies {
            let distance = enemy.manhattan_distance(player);
            if distance <= PROXIMITY_RANGE {
                out_events.push(Event::EnemyNearby {
                    at: *enemy,
                    distance,
                });
            }
        }
    }

    fn shoot(&mut self, out_events: &mut Vec<Event>) {
        if self.player.ammo == 0 {
            out_events.push(Event::OutOfAmmo);
            return;
        }

        self.player.ammo -= 1;
        out_events.push(Event::ShotFired {
            ammo_remaining: self.player.ammo,
        });

        let player = self.player.cell;
        self.enemies.retain(|enemy| {
            if enemy.manhattan_distance(player) <= SHOT_RANGE {
                out_events.push(Event::EnemyEliminated { at: *enemy });
                false
            } else {
                true
            }
        });

        if self.enemies.is_empty() {
            out_events.push(Event::AllEnemiesDefeated);
        }
    }

    fn deploy_parachute(&mut self, out_events: &mut Vec<Event>) {
        let upper = i32::try_from(self.grid_size).unwrap_or(i32::MAX).max(1);
        let landing = GridCoord::new(self.rng.gen_range(0..upper), self.rng.gen_range(0..upper));
        self.player.cell = landing;
        out_events.push(Event::ParachuteLanded { at: landing });
    }

    fn use_health_kit(&mut self, out_events: &mut Vec<Event>) {
        if self.player.health >= MAX_HEALTH {
            out_events.push(Event::HealthAlreadyFull);
            return;
        }

        self.player.health = self
            .player
            .health
            .saturating_add(HEALTH_KIT_AMOUNT)
            .min(MAX_HEALTH);
        out_events.push(Event::HealthRestored {
            health: self.player.health,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartGame => out_events.push(Event::GameStarted),
        Command::MovePlayer { dx, dy } => world.move_player(dx, dy, out_events),
        Command::Shoot => world.shoot(out_events),
        Command::Reload => {
            world.player.ammo = MAX_AMMO;
            out_events.push(Event::AmmoReloaded { ammo: MAX_AMMO });
        }
        Command::DeployParachute => world.deploy_parachute(out_events),
        Command::UseHealthKit => world.use_health_kit(out_events),
        Command::ToggleVehicle => {
            world.player.in_vehicle = !world.player.in_vehicle;
            out_events.push(Event::VehicleToggled {
                occupied: world.player.in_vehicle,
            });
        }
        Command::SwitchWeapon { slot } => {
            if let Some(weapon) = Weapon::from_slot(slot) {
                world.weapon = weapon;
                out_events.push(Event::WeaponSwitched { weapon });
            }
        }
        Command::CallAirdrop => out_events.push(Event::AirdropIncoming),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use drop_zone_core::{GridCoord, SafeZone, Weapon};

    /// Immutable representation of the player's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PlayerSnapshot {
        /// Grid cell currently occupied by the player.
        pub cell: GridCoord,
        /// Rounds left in the weapon.
        pub ammo: u32,
        /// Current health in the range `0..=100`.
        pub health: u32,
        /// Whether the player sits in the vehicle.
        pub in_vehicle: bool,
    }

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Number of cells along each axis of the landing grid.
    #[must_use]
    pub fn grid_size(world: &World) -> u32 {
        world.grid_size
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: world.player.cell,
            ammo: world.player.ammo,
            health: world.player.health,
            in_vehicle: world.player.in_vehicle,
        }
    }

    /// Cells occupied by the remaining enemies, in configuration order.
    #[must_use]
    pub fn enemies(world: &World) -> &[GridCoord] {
        &world.enemies
    }

    /// Provides read-only access to the safe zone.
    #[must_use]
    pub fn safe_zone(world: &World) -> SafeZone {
        world.safe_zone
    }

    /// Weapon currently selected by the player.
    #[must_use]
    pub fn current_weapon(world: &World) -> Weapon {
        world.weapon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(configure: impl FnOnce(&mut WorldConfig)) -> World {
        let mut config = WorldConfig::default();
        configure(&mut config);
        World::with_config(config).expect("valid config")
    }

    fn run(world: &mut World, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, command, &mut events);
        events
    }

    #[test]
    fn default_world_matches_initial_layout() {
        let world = World::new();
        let player = query::player(&world);

        assert_eq!(player.cell, GridCoord::new(5, 5));
        assert_eq!(player.ammo, MAX_AMMO);
        assert_eq!(player.health, MAX_HEALTH);
        assert!(!player.in_vehicle);
        assert_eq!(
            query::enemies(&world),
            &[GridCoord::new(12, 8), GridCoord::new(3, 7)]
        );
        assert_eq!(query::current_weapon(&world), Weapon::Pistol);
        assert_eq!(query::grid_size(&world), 20);
        assert_eq!(query::welcome_banner(&world), WELCOME_BANNER);
    }

    #[test]
    fn movement_reports_position_then_zone_then_enemies() {
        let mut world = World::new();

        let events = run(&mut world, Command::MovePlayer { dx: -1, dy: 1 });

        assert_eq!(query::player(&world).cell, GridCoord::new(4, 6));
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            Event::PlayerMoved {
                from: GridCoord::new(5, 5),
                to: GridCoord::new(4, 6),
            }
        );
        assert!(matches!(
            events[1],
            Event::SafeZoneChecked { inside: true, .. }
        ));
        assert_eq!(
            events[2],
            Event::EnemyNearby {
                at: GridCoord::new(3, 7),
                distance: 2,
            }
        );
    }

    #[test]
    fn movement_is_not_bounded_by_the_grid() {
        let mut world = World::new();

        let _ = run(&mut world, Command::MovePlayer { dx: -40, dy: 60 });

        assert_eq!(query::player(&world).cell, GridCoord::new(-35, 65));
    }

    #[test]
    fn leaving_the_zone_reports_outside() {
        let mut world = World::new();

        let events = run(&mut world, Command::MovePlayer { dx: 20, dy: 20 });

        assert!(events.iter().any(|event| matches!(
            event,
            Event::SafeZoneChecked { inside: false, .. }
        )));
    }

    #[test]
    fn proximity_alert_repeats_on_every_move() {
        let mut world = world_with(|config| {
            config.enemies = vec![GridCoord::new(6, 5)];
        });

        let first = run(&mut world, Command::MovePlayer { dx: 0, dy: 1 });
        let second = run(&mut world, Command::MovePlayer { dx: 0, dy: -1 });

        let alerts = |events: &[Event]| {
            events
                .iter()
                .filter(|event| matches!(event, Event::EnemyNearby { .. }))
                .count()
        };
        assert_eq!(alerts(&first), 1);
        assert_eq!(alerts(&second), 1);
    }

    #[test]
    fn shooting_adjacent_enemy_wins() {
        let mut world = world_with(|config| {
            config.enemies = vec![GridCoord::new(5, 6)];
        });

        let events = run(&mut world, Command::Shoot);

        assert_eq!(query::player(&world).ammo, 9);
        assert!(query::enemies(&world).is_empty());
        assert_eq!(
            events,
            vec![
                Event::ShotFired { ammo_remaining: 9 },
                Event::EnemyEliminated {
                    at: GridCoord::new(5, 6),
                },
                Event::AllEnemiesDefeated,
            ]
        );
    }

    #[test]
    fn shooting_can_hit_several_enemies_at_once() {
        let mut world = world_with(|config| {
            config.enemies = vec![
                GridCoord::new(4, 5),
                GridCoord::new(9, 9),
                GridCoord::new(5, 5),
                GridCoord::new(5, 4),
            ];
        });

        let events = run(&mut world, Command::Shoot);

        assert_eq!(query::enemies(&world), &[GridCoord::new(9, 9)]);
        let kills: Vec<GridCoord> = events
            .iter()
            .filter_map(|event| match event {
                Event::EnemyEliminated { at } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(
            kills,
            vec![
                GridCoord::new(4, 5),
                GridCoord::new(5, 5),
                GridCoord::new(5, 4)
            ]
        );
        assert!(!events.contains(&Event::AllEnemiesDefeated));
    }

    #[test]
    fn empty_weapon_refuses_to_fire() {
        let mut world = world_with(|config| {
            config.player.ammo = 0;
            config.enemies = vec![GridCoord::new(5, 6)];
        });

        let events = run(&mut world, Command::Shoot);

        assert_eq!(events, vec![Event::OutOfAmmo]);
        assert_eq!(query::player(&world).ammo, 0);
        assert_eq!(query::enemies(&world).len(), 1);
    }

    #[test]
    fn reload_refills_to_capacity() {
        let mut world = world_with(|config| config.player.ammo = 2);

        let events = run(&mut world, Command::Reload);

        assert_eq!(query::player(&world).ammo, MAX_AMMO);
        assert_eq!(events, vec![Event::AmmoReloaded { ammo: MAX_AMMO }]);
    }

    #[test]
    fn health_kit_caps_at_maximum() {
        let mut world = world_with(|config| config.player.health = 85);

        let events = run(&mut world, Command::UseHealthKit);

        assert_eq!(query::player(&world).health, MAX_HEALTH);
        assert_eq!(events, vec![Event::HealthRestored { health: 100 }]);
    }

    #[test]
    fn health_kit_refused_when_full() {
        let mut world = World::new();

        let events = run(&mut world, Command::UseHealthKit);

        assert_eq!(query::player(&world).health, MAX_HEALTH);
        assert_eq!(events, vec![Event::HealthAlreadyFull]);
    }

    #[test]
    fn vehicle_toggle_flips_occupancy() {
        let mut world = World::new();

        let entered = run(&mut world, Command::ToggleVehicle);
        let exited = run(&mut world, Command::ToggleVehicle);

        assert_eq!(entered, vec![Event::VehicleToggled { occupied: true }]);
        assert_eq!(exited, vec![Event::VehicleToggled { occupied: false }]);
        assert!(!query::player(&world).in_vehicle);
    }

    #[test]
    fn weapon_switch_ignores_unknown_slots() {
        let mut world = World::new();

        let switched = run(&mut world, Command::SwitchWeapon { slot: 2 });
        assert_eq!(query::current_weapon(&world), Weapon::Shotgun);
        assert_eq!(
            switched,
            vec![Event::WeaponSwitched {
                weapon: Weapon::Shotgun,
            }]
        );

        let ignored = run(&mut world, Command::SwitchWeapon { slot: 9 });
        assert!(ignored.is_empty());
        assert_eq!(query::current_weapon(&world), Weapon::Shotgun);
    }

    #[test]
    fn parachute_landing_is_deterministic_for_same_seed() {
        let mut first = world_with(|config| config.seed = 7);
        let mut second = world_with(|config| config.seed = 7);

        for _ in 0..16 {
            assert_eq!(
                run(&mut first, Command::DeployParachute),
                run(&mut second, Command::DeployParachute)
            );
        }
    }

    #[test]
    fn start_and_airdrop_leave_state_untouched() {
        let mut world = World::new();
        let before = query::player(&world);

        assert_eq!(run(&mut world, Command::StartGame), vec![Event::GameStarted]);
        assert_eq!(
            run(&mut world, Command::CallAirdrop),
            vec![Event::AirdropIncoming]
        );
        assert_eq!(query::player(&world), before);
    }
}
