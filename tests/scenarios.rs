//! Scenario tests for the simulation loop
//!
//! These stage specific situations through the public API and check the
//! combined behavior of collisions, scoring, power-ups and the session phase.

use glam::Vec2;
use nova_strike::Settings;
use nova_strike::sim::{
    Bullet, BulletOwner, Enemy, GameEvent, GamePhase, GameState, HitOutcome, PowerUpKind,
    ScriptedRandom, Session, TickInput, autopilot, resolve_collisions, seeded,
    spawn_interval_for_level,
};

const FRAME_MS: u32 = 16;

/// Random source that never drops loot or rolls triple fire
fn quiet_rng() -> ScriptedRandom {
    ScriptedRandom::constant(0.5)
}

fn player_bullet(pos: Vec2) -> Bullet {
    Bullet::new(pos, Vec2::new(0.0, -1.0), BulletOwner::Player)
}

#[test]
fn test_fresh_session_kills_kind_zero_with_one_bullet() {
    let mut state = GameState::new();
    assert_eq!(state.player.score, 0);
    assert_eq!(state.player.health, 5);
    assert_eq!(state.level, 1);

    state.enemies.push(Enemy::new(Vec2::new(300.0, 200.0), 0, 1.0, 0.0, 1.0));
    state.bullets.push(player_bullet(Vec2::new(300.0, 200.0)));

    resolve_collisions(&mut state, &mut quiet_rng());
    assert!(state.enemies.is_empty());
    assert!(state.bullets.is_empty());
    assert_eq!(state.player.score, 10);
}

#[test]
fn test_kind_two_needs_three_hits_across_frames() {
    let mut state = GameState::new();
    let mut rng = quiet_rng();
    state.enemies.push(Enemy::new(Vec2::new(300.0, 200.0), 2, 1.0, 0.0, 1.0));

    for hit in 1..=3 {
        let target = state.enemies[0].pos;
        state.bullets.push(player_bullet(target));
        resolve_collisions(&mut state, &mut rng);
        if hit < 3 {
            assert_eq!(state.enemies.len(), 1);
            assert_eq!(state.enemies[0].health, 3 - hit);
            assert_eq!(state.player.score, 0);
        }
    }
    assert!(state.enemies.is_empty());
    assert_eq!(state.player.score, 20);
}

#[test]
fn test_shielded_player_rams_enemy() {
    let mut state = GameState::new();
    state.player.apply_powerup(PowerUpKind::Shield, 0);
    let p = state.player.pos;
    state.enemies.push(Enemy::new(p, 1, 1.0, 0.0, 1.0));

    let report = resolve_collisions(&mut state, &mut quiet_rng());
    assert_eq!(report.player_hit, Some(HitOutcome::Absorbed));
    assert!(state.enemies.is_empty());
    assert!(!state.player.shield_active);
    assert_eq!(state.player.health, 5);
    assert!(state.player.powerup.is_none());
    // No score for rammed enemies
    assert_eq!(state.player.score, 0);
}

#[test]
fn test_last_life_ram_ends_session() {
    let mut session = Session::with_rng(&Settings::default(), quiet_rng());
    {
        let state = session.state_mut();
        state.player.health = 1;
        let p = state.player.pos;
        state.enemies.push(Enemy::new(p, 0, 0.0, 0.0, 1.0));
    }

    let events = session.frame(&TickInput::default(), FRAME_MS).to_vec();
    assert_eq!(session.state().player.health, 0);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(events.contains(&GameEvent::PlayerHit {
        outcome: HitOutcome::Applied,
        health: 0,
    }));

    // Restart gives a completely fresh run
    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    session.frame(&restart, FRAME_MS);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.state().player.health, 5);
    assert!(session.state().enemies.is_empty());
}

#[test]
fn test_spawn_interval_examples() {
    assert_eq!(spawn_interval_for_level(1), 860);
    assert_eq!(spawn_interval_for_level(5), 700);
    assert_eq!(spawn_interval_for_level(20), 350);
}

#[test]
fn test_enemies_spawn_while_running_only() {
    let mut session = Session::with_rng(&Settings::default(), quiet_rng());
    // 54 frames of 16 ms = 864 ms, past the level 1 interval
    for _ in 0..54 {
        session.frame(&TickInput::default(), FRAME_MS);
    }
    assert_eq!(session.state().enemies.len(), 1);

    let pause = TickInput {
        pause: true,
        ..Default::default()
    };
    session.frame(&pause, FRAME_MS);
    for _ in 0..200 {
        session.frame(&TickInput::default(), FRAME_MS);
    }
    assert_eq!(session.state().enemies.len(), 1);
    assert_eq!(session.state().now_ms, 864);
}

#[test]
fn test_collected_powerup_shows_in_hud() {
    let mut session = Session::with_rng(&Settings::default(), quiet_rng());
    {
        let state = session.state_mut();
        let p = state.player.pos;
        state
            .powerups
            .push(nova_strike::sim::PowerUp::new(p, PowerUpKind::Rapid));
    }
    session.frame(&TickInput::default(), FRAME_MS);

    let hud = session.snapshot().hud;
    assert_eq!(hud.powerup, Some("rapid"));
    assert_eq!(hud.messages.len(), 1);
    assert_eq!(hud.messages[0].text, "Powerup collected");
    assert_eq!(hud.messages[0].remaining_ms, 2500);

    // Expires 6 s later
    for _ in 0..375 {
        session.frame(&TickInput::default(), FRAME_MS);
    }
    let hud = session.snapshot().hud;
    assert_eq!(hud.powerup, None);
    assert!(hud.messages.iter().all(|m| m.text != "Powerup collected"));
}

#[test]
fn test_score_drives_level_and_interval() {
    let mut session = Session::with_rng(&Settings::default(), quiet_rng());
    session.state_mut().player.score = 990;
    let events = session.frame(&TickInput::default(), FRAME_MS).to_vec();
    assert!(events.contains(&GameEvent::LevelUp { level: 5 }));
    assert_eq!(session.state().level, 5);
    assert_eq!(session.state().spawn_interval_ms, 700);
}

#[test]
fn test_saved_state_resumes_identically() {
    let settings = Settings::default();
    let mut live = Session::with_rng(&settings, seeded(11));
    for _ in 0..300 {
        let input = autopilot(live.state());
        live.frame(&input, FRAME_MS);
    }

    let json = serde_json::to_string(live.state()).expect("state serializes");
    let restored: GameState = serde_json::from_str(&json).expect("state deserializes");
    let mut resumed = Session::with_rng(&settings, live.rng_mut().clone());
    *resumed.state_mut() = restored;

    for _ in 0..300 {
        let input = autopilot(live.state());
        live.frame(&input, FRAME_MS);
        let input = autopilot(resumed.state());
        resumed.frame(&input, FRAME_MS);
    }

    assert_eq!(resumed.state().now_ms, live.state().now_ms);
    assert_eq!(
        serde_json::to_string(resumed.state()).expect("state serializes"),
        serde_json::to_string(live.state()).expect("state serializes"),
    );
}
