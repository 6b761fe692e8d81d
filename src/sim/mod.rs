//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per fixed tick, time passed in by the caller
//! - Injected RNG only
//! - Stable iteration order (bricks are scanned in layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod level;
pub mod machine;
pub mod state;
pub mod tick;

pub use geometry::{Circle, Field, Rect};
pub use level::{build_level, respawn};
pub use machine::{Command, Transition, apply};
pub use state::{
    ActivePowerUp, Ball, Brick, Color, GameState, GameStatus, Paddle, PowerUp, PowerUpKind,
    PowerUpPhase,
};
pub use tick::advance;
