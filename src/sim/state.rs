//! Game state and core simulation types
//!
//! Every entity is a plain value. A tick never edits a published `GameState`;
//! it builds the next one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Field, Rect};

/// Packed ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BRICK_BLUE: Color = Color(0xFF19_76D2);
    pub const BRICK_GREEN: Color = Color(0xFF38_8E3C);
    pub const BRICK_ORANGE: Color = Color(0xFFF5_7C00);

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same RGB with the alpha channel multiplied by `factor`
    pub fn scale_alpha(self, factor: f32) -> Color {
        let alpha = (self.alpha() as f32 * factor).round().clamp(0.0, 255.0) as u32;
        Color((self.0 & 0x00FF_FFFF) | (alpha << 24))
    }
}

/// Current status of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the start signal
    Ready,
    /// Active gameplay
    Running,
    Paused,
    /// Lives exhausted
    GameOver,
    /// Level cleared, another level follows
    LevelComplete,
    /// Final level cleared
    GameWon,
}

/// A brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub hp: u32,
}

impl Brick {
    /// A brick at 0 hp has left play for the rest of the level
    pub fn is_visible(&self) -> bool {
        self.hp > 0
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn bounding_box(&self) -> Rect {
        self.circle().bounding_box()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Resize around the current center, kept inside the field
    pub fn resized(&self, width: f32, field: Field) -> Paddle {
        Paddle {
            rect: self.rect.with_width_centered(width).clamped_x(0.0, field.width),
        }
    }

    /// Center on `target_x`, kept inside the field
    pub fn centered_at(&self, target_x: f32, field: Field) -> Paddle {
        let dx = target_x - self.rect.center_x();
        Paddle {
            rect: self.rect.offset(dx, 0.0).clamped_x(0.0, field.width),
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    WidenPaddle,
    ShrinkPaddle,
    ExtraLife,
    MultiBall,
    SpeedUpBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::WidenPaddle,
        PowerUpKind::ShrinkPaddle,
        PowerUpKind::ExtraLife,
        PowerUpKind::MultiBall,
        PowerUpKind::SpeedUpBall,
    ];

    /// Whether this kind changes paddle width for a limited time
    pub fn affects_paddle(self) -> bool {
        matches!(self, PowerUpKind::WidenPaddle | PowerUpKind::ShrinkPaddle)
    }
}

/// Falling, or caught and shrinking out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpPhase {
    Falling,
    Absorbing { since_ms: u64 },
}

/// A power-up dropped by a destroyed brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub phase: PowerUpPhase,
}

impl PowerUp {
    pub fn new(rect: Rect, kind: PowerUpKind) -> Self {
        Self {
            rect,
            kind,
            phase: PowerUpPhase::Falling,
        }
    }

    pub fn is_absorbing(&self) -> bool {
        matches!(self.phase, PowerUpPhase::Absorbing { .. })
    }
}

/// Paddle-size power-up currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub expires_at_ms: u64,
}

/// Complete game state (serializable snapshot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Bricks in scan order; destroyed bricks stay in place at 0 hp
    pub bricks: Vec<Brick>,
    pub balls: Vec<Ball>,
    pub paddle: Paddle,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub lives: u32,
    pub status: GameStatus,
    /// Current level (1-based)
    pub level: u32,
    /// False until built against a measured field
    pub initialized: bool,
    pub active_power_up: Option<ActivePowerUp>,
    /// Paddle flashes until this time (visual hint)
    pub paddle_flash_until_ms: u64,
}

impl GameState {
    /// Placeholder used before the field has been measured
    pub fn uninitialized(starting_lives: u32) -> Self {
        Self {
            bricks: Vec::new(),
            balls: Vec::new(),
            paddle: Paddle::default(),
            power_ups: Vec::new(),
            score: 0,
            lives: starting_lives,
            status: GameStatus::Ready,
            level: 1,
            initialized: false,
            active_power_up: None,
            paddle_flash_until_ms: 0,
        }
    }

    pub fn visible_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_visible())
    }

    pub fn has_visible_bricks(&self) -> bool {
        self.bricks.iter().any(Brick::is_visible)
    }

    /// Whether the paddle should draw in its flash color at `now_ms`
    pub fn is_paddle_flashing(&self, now_ms: u64) -> bool {
        now_ms < self.paddle_flash_until_ms
    }

    /// Move the paddle toward a pointer position
    ///
    /// Ignored while paused or before the level exists. Balls are not carried.
    pub fn steer_paddle(&self, target_x: f32, field: Field) -> GameState {
        if !self.initialized || self.status == GameStatus::Paused {
            return self.clone();
        }
        GameState {
            paddle: self.paddle.centered_at(target_x, field),
            ..self.clone()
        }
    }
}
