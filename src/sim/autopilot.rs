//! Demo autopilot
//!
//! Produces input intents from the current state so the simulation can play
//! itself (attract mode, headless runs, soak tests). Purely a function of the
//! state, so it keeps runs deterministic.

use super::entity::Entity;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// How far above the ship an enemy counts as an immediate threat
const DANGER_RANGE: f32 = 140.0;
/// Horizontal slack before the ship bothers to steer
const STEER_DEADZONE: f32 = 6.0;
/// Preferred distance between the ship's center and the bottom edge
const CRUISE_OFFSET: f32 = 80.0;

/// Decide this frame's intents
pub fn autopilot(state: &GameState) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let ship = player.bounds();

    // Dodge: the closest enemy bearing down on our column
    let threat = state
        .enemies
        .iter()
        .filter(|e| {
            let b = e.bounds();
            b.bottom() <= ship.top() + 4.0
                && ship.top() - b.bottom() < DANGER_RANGE
                && b.right() > ship.left() - 10.0
                && b.left() < ship.right() + 10.0
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let target_x = if let Some(enemy) = threat {
        // Slip to whichever side has more room
        if enemy.pos.x >= player.pos.x && ship.left() > state.bounds.left() + 20.0 {
            player.pos.x - 100.0
        } else {
            player.pos.x + 100.0
        }
    } else if let Some(pickup) = state
        .powerups
        .iter()
        .filter(|p| p.pos.y > state.bounds.center().y)
        .min_by(|a, b| {
            (a.pos.x - player.pos.x)
                .abs()
                .total_cmp(&(b.pos.x - player.pos.x).abs())
        })
    {
        pickup.pos.x
    } else if let Some(enemy) = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        // Line up under the lowest enemy
        enemy.pos.x
    } else {
        state.bounds.center().x
    };

    let offset = target_x - player.pos.x;
    let dx = if offset > STEER_DEADZONE {
        1
    } else if offset < -STEER_DEADZONE {
        -1
    } else {
        0
    };

    let cruise_y = state.bounds.bottom() - CRUISE_OFFSET;
    let dy = if player.pos.y < cruise_y - STEER_DEADZONE {
        1
    } else if player.pos.y > cruise_y + STEER_DEADZONE {
        -1
    } else {
        0
    };

    TickInput {
        dx,
        dy,
        fire: true,
        ..Default::default()
    }
}
