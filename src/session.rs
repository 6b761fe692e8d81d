//! Fixed-timestep session driver
//!
//! Owns the current snapshot, the simulated clock and the seeded RNG. Input
//! (paddle steering, commands) is applied between ticks, never during one.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::consts::*;
use crate::sim::{
    Command, Field, GameState, GameStatus, PowerUpPhase, Transition, advance, apply, build_level,
};

pub struct Session {
    config: GameConfig,
    field: Field,
    state: GameState,
    rng: Pcg32,
    seed: u64,
    /// Simulated time
    now_ms: u64,
    accumulator_ms: u64,
    exited: bool,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::uninitialized(config.tuning.starting_lives);
        Self {
            config,
            field: Field::default(),
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            now_ms: 0,
            accumulator_ms: 0,
            exited: false,
        }
    }

    /// Read-only snapshot for renderers and the HUD
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The player chose Exit on the game-over screen
    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Report the measured field size
    ///
    /// The first real measurement builds level 1. Later changes are ignored:
    /// the layout is fixed for the rest of the session.
    pub fn resize(&mut self, width: f32, height: f32) {
        let field = Field::new(width, height);
        if self.state.initialized {
            if field != self.field {
                log::warn!(
                    "Ignoring resize to {}x{} (field fixed at {}x{})",
                    width,
                    height,
                    self.field.width,
                    self.field.height
                );
            }
            return;
        }
        if !field.is_measured() {
            return;
        }
        self.field = field;
        self.state = build_level(field, 1, &self.config);
    }

    /// Pointer/drag position for the paddle center
    pub fn steer(&mut self, target_x: f32) {
        self.state = self.state.steer_paddle(target_x, self.field);
    }

    /// Apply a command; returns whether it did anything
    pub fn command(&mut self, command: Command) -> bool {
        match apply(&self.state, command, self.field, &self.config) {
            Transition::Ignored => false,
            Transition::Next(next) => {
                self.state = next;
                true
            }
            Transition::Exit => {
                log::info!("Exit requested");
                self.exited = true;
                true
            }
        }
    }

    /// A plain tap: whatever the current status treats as "go on"
    pub fn tap(&mut self) -> bool {
        match Command::primary_for(self.state.status) {
            Some(command) => self.command(command),
            None => false,
        }
    }

    /// Run one fixed tick
    pub fn tick(&mut self) {
        self.now_ms += TICK_MS;
        if !self.state.initialized || self.state.status != GameStatus::Running {
            return;
        }

        let before = self.state.status;
        self.state = advance(
            &self.state,
            self.field,
            self.now_ms,
            &self.config,
            &mut self.rng,
        );
        if self.state.status != before {
            log::info!(
                "Tick at {} ms: {:?} -> {:?}",
                self.now_ms,
                before,
                self.state.status
            );
        }
    }

    /// Run as many whole ticks as `elapsed_ms` covers, up to the substep cap
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, elapsed_ms: u64) -> u32 {
        // Long stalls (tab in background, debugger) are not replayed
        self.accumulator_ms += elapsed_ms.min(100);

        let mut substeps = 0;
        while self.accumulator_ms >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator_ms -= TICK_MS;
            substeps += 1;
        }
        substeps
    }
}

/// Idle/demo steering target
///
/// Follows the lowest descending ball. With no ball coming down, goes after
/// the lowest falling power-up, then falls back to the lowest ball.
pub fn autopilot_target(state: &GameState) -> Option<f32> {
    let lowest = |a: &f32, b: &f32| a.total_cmp(b);

    let descending = state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| lowest(&a.pos.y, &b.pos.y))
        .map(|b| b.pos.x);
    if descending.is_some() {
        return descending;
    }

    let power_up = state
        .power_ups
        .iter()
        .filter(|p| p.phase == PowerUpPhase::Falling)
        .max_by(|a, b| lowest(&a.rect.bottom, &b.rect.bottom))
        .map(|p| p.rect.center_x());
    if power_up.is_some() {
        return power_up;
    }

    state
        .balls
        .iter()
        .max_by(|a, b| lowest(&a.pos.y, &b.pos.y))
        .map(|b| b.pos.x)
}
