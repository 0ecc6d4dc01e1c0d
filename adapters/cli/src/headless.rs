use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use drop_zone_core::Command;
use drop_zone_feedback::{AudioSink, Narrator};
use drop_zone_world::{query, World};
use thiserror::Error;

use crate::session::Session;

/// A single line typed in headless mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Play(Command),
    Status,
    Quit,
}

/// Reasons a headless line could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LineError {
    #[error("unrecognised command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} argument(s)")]
    WrongArity { command: String, expected: usize },
    #[error("`{0}` is not a whole number")]
    InvalidNumber(String),
}

/// Parses a line into an action; blank lines and `#` comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<Line>, LineError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    if keyword.starts_with('#') {
        return Ok(None);
    }
    let keyword = keyword.to_ascii_lowercase();
    let arguments: Vec<&str> = words.collect();

    let parsed = match (keyword.as_str(), arguments.as_slice()) {
        ("move", [dx, dy]) => Line::Play(Command::MovePlayer {
            dx: parse_number(dx)?,
            dy: parse_number(dy)?,
        }),
        ("weapon", [slot]) => Line::Play(Command::SwitchWeapon {
            slot: parse_number(slot)?,
        }),
        ("left", []) => Line::Play(Command::MovePlayer { dx: -1, dy: 0 }),
        ("right", []) => Line::Play(Command::MovePlayer { dx: 1, dy: 0 }),
        ("up", []) => Line::Play(Command::MovePlayer { dx: 0, dy: -1 }),
        ("down", []) => Line::Play(Command::MovePlayer { dx: 0, dy: 1 }),
        ("shoot", []) => Line::Play(Command::Shoot),
        ("reload", []) => Line::Play(Command::Reload),
        ("parachute", []) => Line::Play(Command::DeployParachute),
        ("heal", []) => Line::Play(Command::UseHealthKit),
        ("vehicle", []) => Line::Play(Command::ToggleVehicle),
        ("airdrop", []) => Line::Play(Command::CallAirdrop),
        ("status", []) => Line::Status,
        ("quit" | "exit", []) => Line::Quit,
        (_, _) => {
            return Err(match arity(&keyword) {
                Some(expected) => LineError::WrongArity {
                    command: keyword.clone(),
                    expected,
                },
                None => LineError::UnknownCommand(keyword.clone()),
            })
        }
    };

    Ok(Some(parsed))
}

fn arity(keyword: &str) -> Option<usize> {
    match keyword {
        "move" => Some(2),
        "weapon" => Some(1),
        "left" | "right" | "up" | "down" | "shoot" | "reload" | "parachute" | "heal"
        | "vehicle" | "airdrop" | "status" | "quit" | "exit" => Some(0),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, LineError> {
    value
        .parse()
        .map_err(|_| LineError::InvalidNumber(value.to_owned()))
}

/// Summary printed for the `status` line.
pub(crate) fn status_line(world: &World) -> String {
    let player = query::player(world);
    format!(
        "position {} | ammo {} | health {} | weapon {} | vehicle {} | enemies {}",
        player.cell,
        player.ammo,
        player.health,
        query::current_weapon(world),
        if player.in_vehicle { "yes" } else { "no" },
        query::enemies(world).len(),
    )
}

/// Plays the session from text input until `quit` or end of input.
pub(crate) fn run<A, N>(
    session: &mut Session<A, N>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()>
where
    A: AudioSink,
    N: Narrator,
{
    writeln!(output, "{}", session.bootstrap().welcome_banner(session.world()))
        .context("failed to write banner")?;
    let _ = session.start();

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Line::Play(command))) => {
                let _ = session.dispatch(command);
            }
            Ok(Some(Line::Status)) => {
                writeln!(output, "{}", status_line(session.world()))
                    .context("failed to write status")?;
            }
            Ok(Some(Line::Quit)) => break,
            Err(error) => {
                log::warn!("skipping line {line:?}: {error}");
                writeln!(output, "{error}").context("failed to report invalid line")?;
            }
        }
    }

    Ok(())
}
