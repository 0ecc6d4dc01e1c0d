use drop_zone_core::{Command, Cue, Event, GridCoord, SoundEffect};
use drop_zone_system_announcer::Announcer;
use drop_zone_world::{self as world, World, WorldConfig};

fn narrate(world: &mut World, command: Command) -> Vec<Cue> {
    let mut events: Vec<Event> = Vec::new();
    world::apply(world, command, &mut events);
    let mut cues = Vec::new();
    Announcer::new().handle(&events, &mut cues);
    cues
}

fn announce(text: &str) -> Cue {
    Cue::Announce(text.to_owned())
}

#[test]
fn move_near_enemy_outside_zone_narrates_in_order() {
    let mut world = World::with_config(WorldConfig {
        enemies: vec![GridCoord::new(40, 41), GridCoord::new(38, 40)],
        ..WorldConfig::default()
    })
    .expect("valid config");

    let cues = narrate(&mut world, Command::MovePlayer { dx: 35, dy: 35 });

    assert_eq!(
        cues,
        vec![
            Cue::Play(SoundEffect::Step),
            announce("Player moved to position 40, 40"),
            Cue::Play(SoundEffect::Warning),
            announce("Warning: Move to the safe zone!"),
            Cue::Play(SoundEffect::EnemyNear),
            announce("Enemy nearby!"),
            Cue::Play(SoundEffect::EnemyNear),
            announce("Enemy nearby!"),
        ],
        "each nearby enemy should trigger its own alert after the zone warning",
    );
}

#[test]
fn winning_shot_narrates_hit_then_victory() {
    let mut world = World::with_config(WorldConfig {
        enemies: vec![GridCoord::new(5, 6)],
        ..WorldConfig::default()
    })
    .expect("valid config");

    let cues = narrate(&mut world, Command::Shoot);

    assert_eq!(
        cues,
        vec![
            Cue::Play(SoundEffect::Gunshot),
            announce("Fired a shot. Ammo remaining: 9"),
            announce("Enemy hit!"),
            announce("All enemies defeated. You win!"),
        ]
    );
}

#[test]
fn empty_weapon_plays_click_and_warns() {
    let mut world = World::with_config(WorldConfig {
        player: drop_zone_world::PlayerConfig {
            ammo: 0,
            ..drop_zone_world::PlayerConfig::default()
        },
        ..WorldConfig::default()
    })
    .expect("valid config");

    let cues = narrate(&mut world, Command::Shoot);

    assert_eq!(
        cues,
        vec![Cue::Play(SoundEffect::NoAmmo), announce("Out of ammo!")]
    );
}

#[test]
fn unknown_weapon_slot_is_silent() {
    let mut world = World::new();

    assert!(narrate(&mut world, Command::SwitchWeapon { slot: 0 }).is_empty());
}

#[test]
fn utility_actions_pair_sound_with_speech() {
    let mut world = World::new();

    assert_eq!(
        narrate(&mut world, Command::ToggleVehicle),
        vec![Cue::Play(SoundEffect::Vehicle), announce("Entered vehicle.")]
    );
    assert_eq!(
        narrate(&mut world, Command::CallAirdrop),
        vec![
            Cue::Play(SoundEffect::Airdrop),
            announce("Airdrop incoming! Search for supplies."),
        ]
    );
    assert_eq!(
        narrate(&mut world, Command::UseHealthKit),
        vec![announce("Health is already full.")]
    );
    assert_eq!(
        narrate(&mut world, Command::DeployParachute),
        vec![
            Cue::Play(SoundEffect::Parachute),
            announce("Parachute landing complete. You are now on the ground."),
        ]
    );
}
