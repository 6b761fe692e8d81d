//! Level builder
//!
//! Turns a character layout into bricks scaled to the measured field, and
//! places a fresh paddle and ball.

use glam::Vec2;

use super::geometry::{Field, Rect};
use super::state::{Ball, Brick, GameState, GameStatus, Paddle};
use crate::config::GameConfig;
use crate::consts::*;
use crate::levels::LevelLayout;

/// Build the opening state of a level
///
/// Returns the uninitialized placeholder while the field is unmeasured. An
/// out-of-range level falls back to level 1. Score and lives come back at
/// their fresh-run defaults; callers continuing a run copy theirs over.
pub fn build_level(field: Field, level: u32, config: &GameConfig) -> GameState {
    let placeholder = GameState::uninitialized(config.tuning.starting_lives);
    if !field.is_measured() {
        return placeholder;
    }

    let (level, layout) = match config.levels.get(level) {
        Some(layout) => (level, layout),
        None => {
            log::warn!(
                "Level {} out of range (table has {}), falling back to level 1",
                level,
                config.levels.len()
            );
            match config.levels.get(1) {
                Some(layout) => (1, layout),
                None => {
                    log::error!("Level table is empty, cannot build a level");
                    return placeholder;
                }
            }
        }
    };

    let bricks = layout_bricks(layout, field);

    let paddle_width = field.width / PADDLE_BASE_DIVISOR;
    let paddle_height = field.height / PADDLE_HEIGHT_DIVISOR;
    let paddle_x = (field.width - paddle_width) / 2.0;
    let paddle_y = field.height - paddle_height * PADDLE_BOTTOM_OFFSET;
    let paddle = Paddle {
        rect: Rect::new(
            paddle_x,
            paddle_y,
            paddle_x + paddle_width,
            paddle_y + paddle_height,
        ),
    };

    let radius = field.width / BALL_RADIUS_DIVISOR;
    let speed = config.tuning.launch_speed(level);
    let ball = Ball::new(
        Vec2::new(field.width / 2.0, paddle_y - radius - BALL_SERVE_GAP),
        Vec2::new(speed, -speed),
        radius,
    );

    log::info!(
        "Level {}: {} bricks, field {}x{}, launch speed {}",
        level,
        bricks.len(),
        field.width,
        field.height,
        speed
    );

    GameState {
        bricks,
        balls: vec![ball],
        paddle,
        level,
        initialized: true,
        status: GameStatus::Ready,
        ..placeholder
    }
}

/// Fresh ball and paddle after a lost life; bricks, score and lives survive
pub fn respawn(state: &GameState, field: Field, config: &GameConfig) -> GameState {
    let fresh = build_level(field, state.level, config);
    GameState {
        bricks: state.bricks.clone(),
        score: state.score,
        lives: state.lives,
        ..fresh
    }
}

/// Place one brick per non-empty cell
fn layout_bricks(layout: &LevelLayout, field: Field) -> Vec<Brick> {
    let columns = layout.columns();
    if columns == 0 {
        return Vec::new();
    }

    let spacing = field.width * BRICK_SPACING_RATIO;
    let brick_width = (field.width - (columns as f32 + 1.0) * spacing) / columns as f32;
    let brick_height = field.height * BRICK_HEIGHT_RATIO;

    let mut bricks = Vec::with_capacity(layout.brick_count());
    let mut y = field.height * BRICK_TOP_RATIO;
    for row in 0..layout.rows() {
        let mut x = spacing;
        for column in 0..columns {
            if let Some(tier) = layout.tier_at(row, column) {
                bricks.push(Brick {
                    rect: Rect::new(x, y, x + brick_width, y + brick_height),
                    color: tier.color(),
                    hp: tier.hit_points(),
                });
            }
            x += brick_width + spacing;
        }
        y += brick_height + spacing;
    }
    bricks
}
