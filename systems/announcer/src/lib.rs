#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns world events into ordered sound and narration cues.

use drop_zone_core::{Cue, Event, SoundEffect};

const INTRO: &str = "Game started. Use on-screen controls to move, shoot, parachute, \
                     toggle vehicle, heal, and switch weapons.";

/// Announcer system that narrates every world event.
#[derive(Debug, Default)]
pub struct Announcer;

impl Announcer {
    /// Creates a new announcer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends the cues for the provided events, preserving event order.
    pub fn handle(&self, events: &[Event], out: &mut Vec<Cue>) {
        for event in events {
            cues_for(event, out);
        }
    }
}

fn cues_for(event: &Event, out: &mut Vec<Cue>) {
    match event {
        Event::GameStarted => {
            out.push(Cue::Play(SoundEffect::BackgroundMusic));
            out.push(Cue::announce(INTRO));
            out.push(Cue::Play(SoundEffect::StartGame));
        }
        Event::PlayerMoved { to, .. } => {
            out.push(Cue::Play(SoundEffect::Step));
            out.push(Cue::announce(format!("Player moved to position {to}")));
        }
        Event::SafeZoneChecked { inside: true, .. } => {
            out.push(Cue::announce("You are inside the safe zone."));
        }
        Event::SafeZoneChecked { inside: false, .. } => {
            out.push(Cue::Play(SoundEffect::Warning));
            out.push(Cue::announce("Warning: Move to the safe zone!"));
        }
        Event::EnemyNearby { .. } => {
            out.push(Cue::Play(SoundEffect::EnemyNear));
            out.push(Cue::announce("Enemy nearby!"));
        }
        Event::ShotFired { ammo_remaining } => {
            out.push(Cue::Play(SoundEffect::Gunshot));
            out.push(Cue::announce(format!(
                "Fired a shot. Ammo remaining: {ammo_remaining}"
            )));
        }
        Event::OutOfAmmo => {
            out.push(Cue::Play(SoundEffect::NoAmmo));
            out.push(Cue::announce("Out of ammo!"));
        }
        Event::EnemyEliminated { .. } => out.push(Cue::announce("Enemy hit!")),
        Event::AllEnemiesDefeated => out.push(Cue::announce("All enemies defeated. You win!")),
        Event::AmmoReloaded { ammo } => {
            out.push(Cue::announce(format!(
                "Ammo reloaded. You now have {ammo} bullets."
            )));
        }
        Event::ParachuteLanded { .. } => {
            out.push(Cue::Play(SoundEffect::Parachute));
            out.push(Cue::announce(
                "Parachute landing complete. You are now on the ground.",
            ));
        }
        Event::HealthRestored { health } => {
            out.push(Cue::Play(SoundEffect::HealthKit));
            out.push(Cue::announce(format!("Health restored to {health}.")));
        }
        Event::HealthAlreadyFull => out.push(Cue::announce("Health is already full.")),
        Event::VehicleToggled { occupied } => {
            out.push(Cue::Play(SoundEffect::Vehicle));
            out.push(Cue::announce(if *occupied {
                "Entered vehicle."
            } else {
                "Exited vehicle."
            }));
        }
        Event::WeaponSwitched { weapon } => {
            out.push(Cue::announce(format!("Switched to {weapon}")));
        }
        Event::AirdropIncoming => {
            out.push(Cue::Play(SoundEffect::Airdrop));
            out.push(Cue::announce("Airdrop incoming! Search for supplies."));
        }
    }
}
