//! Per-frame simulation step
//!
//! Core game loop that advances the session by one rendered frame.

use super::collision::resolve_collisions;
use super::entity::{UpdateContext, update_group};
use super::random::RandomSource;
use super::spawn::run_spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::frame_scale;

/// Input intents for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal intent in {-1, 0, 1}
    pub dx: i8,
    /// Vertical intent in {-1, 0, 1} (positive is down)
    pub dy: i8,
    /// Fire button held
    pub fire: bool,
    /// Pause toggle (edge)
    pub pause: bool,
    /// Quit (edge)
    pub quit: bool,
    /// Restart (edge, only meaningful at game over)
    pub restart: bool,
}

impl TickInput {
    /// Build intents from held direction keys; opposing keys cancel
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool, fire: bool) -> Self {
        Self {
            dx: crate::axis(left, right),
            dy: crate::axis(up, down),
            fire,
            ..Default::default()
        }
    }
}

/// Advance the game by one frame that took `elapsed_ms` of real time
pub fn tick<R: RandomSource>(state: &mut GameState, input: &TickInput, elapsed_ms: u32, rng: &mut R) {
    // Events only ever describe the frame that just ran
    state.events.clear();

    match state.phase {
        GamePhase::Terminated => return,
        GamePhase::GameOver => {
            if input.quit {
                log::info!("Quit from game over (final score {})", state.player.score);
                state.phase = GamePhase::Terminated;
            } else if input.restart {
                state.reset();
                log::info!("Session restarted");
            }
            return;
        }
        GamePhase::Paused => {
            if input.quit {
                end_run(state);
            } else if input.pause {
                state.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            return;
        }
        GamePhase::Running => {
            if input.quit {
                end_run(state);
                return;
            }
            if input.pause {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return;
            }
        }
    }

    // One clock read for the whole frame
    state.now_ms += elapsed_ms as u64;
    state.frame += 1;
    let now = state.now_ms;
    let scale = frame_scale(elapsed_ms, state.fps);

    // (a) movement
    let bounds = state.bounds;
    state.player.move_by(input.dx, input.dy, scale, &bounds);

    // (b) firing; the triple roll only happens while rapid is active
    if input.fire {
        let triple = state.player.has_rapid() && rng.chance(TRIPLE_FIRE_CHANCE);
        state.player.fire(now, &mut state.bullets, triple);
    }

    // (c) spawning
    run_spawner(state, rng);

    // (d) entity updates
    let ctx = UpdateContext {
        scale,
        now_ms: now,
        bounds,
        player_center: state.player.pos,
    };
    update_group(&mut state.enemies, &ctx);
    update_group(&mut state.bullets, &ctx);
    update_group(&mut state.powerups, &ctx);
    if let Some(kind) = state.player.update_powerup(now) {
        log::debug!("{} power-up expired", kind.label());
        state.events.push(GameEvent::PowerUpExpired { kind });
    }
    state.player.decay_hit_flash(elapsed_ms as f32);
    state.messages.prune(now);

    // (e) collisions
    resolve_collisions(state, rng);
    check_game_over(state);

    // (f) difficulty
    state.recompute_difficulty();

    // (g) frame-end safety check
    check_game_over(state);
}

fn check_game_over(state: &mut GameState) {
    if state.phase == GamePhase::Running && !state.player.is_alive() {
        end_run(state);
    }
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver {
        score: state.player.score,
        level: state.level,
    });
    log::info!(
        "Game over: score {}, level {}",
        state.player.score,
        state.level
    );
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::entity::{Bullet, BulletOwner, Enemy, PowerUpKind};
    use crate::sim::random::{ScriptedRandom, seeded};

    const FRAME_MS: u32 = 16;

    #[test]
    fn test_tick_advances_clock() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert_eq!(state.now_ms, 16);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 0, 2.0, 0.0, 1.0));

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Paused);

        // Frozen while paused
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        }
        assert_eq!(state.now_ms, 0);
        assert_eq!(state.enemies[0].pos, Vec2::new(100.0, 100.0));

        tick(&mut state, &pause, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert!(state.enemies[0].pos.y > 100.0);
    }

    #[test]
    fn test_fire_intent_emits_bullet() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_MS, &mut rng);
        assert_eq!(state.bullets.len(), 1);
        // Held fire respects the cadence
        tick(&mut state, &input, FRAME_MS, &mut rng);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_rapid_triple_fire_roll() {
        let mut state = GameState::new();
        state.player.apply_powerup(PowerUpKind::Rapid, 0);
        // 0.1 < 0.25: triple
        let mut rng = ScriptedRandom::constant(0.1);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_MS, &mut rng);
        assert_eq!(state.bullets.len(), 3);
    }

    #[test]
    fn test_powerup_expires_during_tick() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.player.apply_powerup(PowerUpKind::Rapid, 0);
        state.now_ms = 5990;
        state.last_enemy_spawn_ms = 5990;
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert!(state.player.powerup.is_none());
        assert_eq!(state.player.fire_delay_ms, 300);
        assert!(state.events.contains(&GameEvent::PowerUpExpired {
            kind: PowerUpKind::Rapid
        }));
    }

    #[test]
    fn test_lethal_ram_ends_run() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.player.health = 1;
        let p = state.player.pos;
        state.enemies.push(Enemy::new(p, 0, 0.0, 0.0, 1.0));
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen at game over
        let now = state.now_ms;
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert_eq!(state.now_ms, now);
    }

    #[test]
    fn test_restart_and_quit_from_game_over() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.phase = GamePhase::GameOver;
        state.player.score = 320;

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.health, 5);

        state.phase = GamePhase::GameOver;
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Terminated);
        tick(&mut state, &restart, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Terminated);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.player.score = 50;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_MS, &mut rng);
        assert_eq!(state.player.score, 50);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_quit_while_running_ends_run() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_events_cleared_on_frozen_frames() {
        let mut state = GameState::new();
        let mut rng = ScriptedRandom::constant(0.5);
        state.last_enemy_spawn_ms = 1000;
        state.enemies.push(Enemy::new(Vec2::new(300.0, 200.0), 0, 0.0, 0.0, 1.0));
        state
            .bullets
            .push(Bullet::new(Vec2::new(300.0, 210.0), Vec2::NEG_Y, BulletOwner::Player));
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::EnemyDestroyed { kind: 0, points: 10, .. }]
        ));

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, FRAME_MS, &mut rng);
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.events.is_empty());
        tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
        assert!(state.events.is_empty());

        // Quit from pause reports the game over exactly once
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, FRAME_MS, &mut rng);
        assert_eq!(state.events.len(), 1);
        assert!(matches!(state.events[0], GameEvent::GameOver { score: 10, .. }));
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), FRAME_MS, &mut rng);
            assert!(state.events.is_empty());
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        let mut rng1 = seeded(99999);
        let mut rng2 = seeded(99999);

        let inputs = [
            TickInput::from_keys(true, false, false, false, true),
            TickInput::from_keys(false, true, true, false, true),
            TickInput::default(),
        ];

        for frame in 0..600 {
            let input = &inputs[frame % inputs.len()];
            tick(&mut state1, input, FRAME_MS, &mut rng1);
            tick(&mut state2, input, FRAME_MS, &mut rng2);
        }

        assert_eq!(state1.now_ms, state2.now_ms);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.player.score, state2.player.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.phase, state2.phase);
    }
}
