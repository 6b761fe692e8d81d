//! Brickout - a brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, level builder, tick, state machine)
//! - `levels`: Built-in level layouts
//! - `tuning`: Data-driven game balance
//! - `config`: JSON loading of tuning + level table
//! - `session`: Fixed-timestep driver that feeds input into the simulation

pub mod config;
pub mod error;
pub mod levels;
pub mod session;
pub mod sim;
pub mod tuning;

pub use config::GameConfig;
pub use error::ConfigError;
pub use levels::{BrickTier, LevelLayout, LevelTable};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Maximum ticks per `Session::update` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Brick grid: gap between bricks, as a fraction of field width
    pub const BRICK_SPACING_RATIO: f32 = 0.01;
    /// Brick grid: top offset, as a fraction of field height
    pub const BRICK_TOP_RATIO: f32 = 0.15;
    /// Brick height, as a fraction of field height
    pub const BRICK_HEIGHT_RATIO: f32 = 0.025;

    /// Paddle widths are field width divided by these
    pub const PADDLE_BASE_DIVISOR: f32 = 5.0;
    pub const PADDLE_WIDE_DIVISOR: f32 = 3.0;
    pub const PADDLE_NARROW_DIVISOR: f32 = 8.0;
    /// Paddle height is field height divided by this
    pub const PADDLE_HEIGHT_DIVISOR: f32 = 40.0;
    /// Paddle top sits this many paddle heights above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 6.0;

    /// Ball radius is field width divided by this
    pub const BALL_RADIUS_DIVISOR: f32 = 40.0;
    /// Gap between a freshly served ball and the paddle top
    pub const BALL_SERVE_GAP: f32 = 5.0;

    /// Alpha multiplier applied to a damaged brick
    pub const BRICK_DAMAGE_DIM: f32 = 0.7;
}
