//! Top-level session
//!
//! Bundles the game state with its random source and exposes the frame-level
//! API a driver needs: feed intents, read back a snapshot.

use rand_pcg::Pcg32;

use super::random::{RandomSource, seeded};
use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::settings::Settings;

pub struct Session<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
}

impl Session<Pcg32> {
    /// New session driven by a seeded PCG
    pub fn new(settings: &Settings, seed: u64) -> Self {
        log::info!("Session initialized with seed: {}", seed);
        Self::with_rng(settings, seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// New session with an explicit random source
    pub fn with_rng(settings: &Settings, rng: R) -> Self {
        Self {
            state: GameState::from_settings(settings),
            rng,
        }
    }

    /// Run one frame. Returns the events it produced.
    pub fn frame(&mut self, input: &TickInput, elapsed_ms: u32) -> &[GameEvent] {
        tick(&mut self.state, input, elapsed_ms, &mut self.rng);
        &self.state.events
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.state.phase == GamePhase::Terminated
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for drivers and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
