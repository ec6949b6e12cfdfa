//! Collision detection and resolution
//!
//! Runs once per frame in a fixed order: bullets vs enemies, player vs enemies,
//! player vs power-ups. Hits are collected during each scan and removals are
//! applied afterwards so no group is mutated while it is being traversed.

use super::entity::{Entity, PowerUp, PowerUpKind};
use super::player::HitOutcome;
use super::random::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Summary of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Bullets consumed by enemy hits
    pub bullets_consumed: usize,
    /// Enemies destroyed by bullets
    pub enemies_destroyed: usize,
    /// Points awarded this pass
    pub points: u64,
    /// Power-ups dropped by destroyed enemies
    pub drops: usize,
    /// Outcome of a ram, if the player touched an enemy
    pub player_hit: Option<HitOutcome>,
    /// Power-up picked up this pass
    pub collected: Option<PowerUpKind>,
}

/// Resolve all collisions for the current frame
pub fn resolve_collisions<R: RandomSource>(state: &mut GameState, rng: &mut R) -> CollisionReport {
    let mut report = CollisionReport::default();
    bullets_vs_enemies(state, rng, &mut report);
    player_vs_enemies(state, &mut report);
    player_vs_powerups(state, &mut report);
    report
}

/// Every player bullet overlapping an enemy is consumed and deals one damage.
///
/// Overlaps are tested against the bullet set as it stood at the start of the
/// pass, so a bullet covering two enemies damages both.
fn bullets_vs_enemies<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    report: &mut CollisionReport,
) {
    let GameState {
        bullets,
        enemies,
        powerups,
        player,
        events,
        ..
    } = state;

    let mut consumed = vec![false; bullets.len()];
    let mut drops: Vec<PowerUp> = Vec::new();

    for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
        let enemy_box = enemy.bounds();
        for (i, bullet) in bullets.iter().enumerate() {
            if !bullet.is_alive() || !bullet.is_player_owned() {
                continue;
            }
            if !enemy_box.overlaps(&bullet.bounds()) {
                continue;
            }
            consumed[i] = true;
            if enemy.damage(1) {
                let points = enemy.points();
                player.score += points;
                report.enemies_destroyed += 1;
                report.points += points;
                events.push(GameEvent::EnemyDestroyed {
                    kind: enemy.kind,
                    points,
                    pos: enemy.pos,
                });
                log::debug!("Kind {} enemy destroyed (+{})", enemy.kind, points);

                if rng.chance(LOOT_DROP_CHANCE) {
                    let kind = PowerUpKind::random(rng);
                    drops.push(PowerUp::new(enemy.pos, kind));
                    events.push(GameEvent::LootDropped {
                        kind,
                        pos: enemy.pos,
                    });
                }
            }
        }
    }

    for (bullet, hit) in bullets.iter_mut().zip(&consumed) {
        if *hit {
            bullet.kill();
            report.bullets_consumed += 1;
        }
    }
    bullets.retain(|b| b.is_alive());
    enemies.retain(|e| e.is_alive());

    report.drops = drops.len();
    powerups.extend(drops);
}

/// The first enemy touching the player is destroyed (no loot) and the player takes a hit
fn player_vs_enemies(state: &mut GameState, report: &mut CollisionReport) {
    let player_box = state.player.bounds();
    let Some(idx) = state
        .enemies
        .iter()
        .position(|e| e.is_alive() && e.bounds().overlaps(&player_box))
    else {
        return;
    };

    state.enemies.remove(idx);
    let outcome = state.player.take_hit();
    report.player_hit = Some(outcome);
    state.events.push(GameEvent::PlayerHit {
        outcome,
        health: state.player.health,
    });
    match outcome {
        HitOutcome::Absorbed => log::info!("Shield absorbed a hit"),
        HitOutcome::Applied => log::info!("Player hit, health {}", state.player.health),
    }
}

/// The first power-up touching the player is applied and consumed
fn player_vs_powerups(state: &mut GameState, report: &mut CollisionReport) {
    let player_box = state.player.bounds();
    let Some(idx) = state
        .powerups
        .iter()
        .position(|p| p.is_alive() && p.bounds().overlaps(&player_box))
    else {
        return;
    };

    let pickup = state.powerups.remove(idx);
    state.player.apply_powerup(pickup.kind, state.now_ms);
    state.push_message("Powerup collected");
    state.events.push(GameEvent::PowerUpCollected { kind: pickup.kind });
    report.collected = Some(pickup.kind);
    log::debug!("Collected {} power-up", pickup.kind.label());
}
