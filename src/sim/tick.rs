//! Fixed timestep simulation tick
//!
//! `advance` turns one `Running` state into the next. The caller supplies the
//! simulated time and the RNG, so a run replays exactly from its seed.

use glam::Vec2;
use rand::Rng;

use super::collision::{
    accelerate, ball_hits_paddle, ball_out_of_bounds, first_brick_hit, power_up_caught,
    reflect_off_walls, wall_contact,
};
use super::geometry::Field;
use super::level::respawn;
use super::state::{
    ActivePowerUp, Ball, Brick, GameState, GameStatus, PowerUp, PowerUpKind, PowerUpPhase,
};
use crate::config::GameConfig;
use crate::consts::*;
use crate::tuning::Tuning;

/// Advance a running game by one tick
///
/// Any other status, or an uninitialized state, comes back unchanged.
pub fn advance<R: Rng>(
    state: &GameState,
    field: Field,
    now_ms: u64,
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    if state.status != GameStatus::Running || !state.initialized {
        return state.clone();
    }
    let tuning = &config.tuning;
    let mut next = state.clone();

    expire_power_up(&mut next, field, now_ms);
    move_balls(&mut next, field, tuning, rng);

    if next.balls.is_empty() {
        return lose_life(next, field, config);
    }

    update_power_ups(&mut next, field, now_ms, tuning);

    if !next.has_visible_bricks() {
        return complete_level(next, config);
    }

    debug_assert!(next.balls.len() <= tuning.max_balls.max(state.balls.len()));
    next
}

/// Revert the paddle once a timed power-up runs out
fn expire_power_up(state: &mut GameState, field: Field, now_ms: u64) {
    let Some(active) = state.active_power_up else {
        return;
    };
    if now_ms < active.expires_at_ms {
        return;
    }
    if active.kind.affects_paddle() {
        state.paddle = state
            .paddle
            .resized(field.width / PADDLE_BASE_DIVISOR, field);
    }
    state.active_power_up = None;
    log::debug!("{:?} expired", active.kind);
}

/// Integrate every ball and resolve walls, paddle and bricks
fn move_balls<R: Rng>(state: &mut GameState, field: Field, tuning: &Tuning, rng: &mut R) {
    let mut survivors = Vec::with_capacity(state.balls.len());

    for ball in &state.balls {
        let mut ball = Ball {
            pos: ball.pos + ball.vel,
            ..*ball
        };

        ball.vel = reflect_off_walls(ball.vel, wall_contact(&ball.circle(), field));

        if ball_hits_paddle(&ball, &state.paddle.rect) {
            let bounced = Vec2::new(ball.vel.x, -ball.vel.y);
            ball.vel = accelerate(
                bounced,
                tuning.paddle_bounce_multiplier,
                tuning.max_ball_speed,
            );
        }

        // At most one brick per ball per tick
        if let Some(index) = first_brick_hit(&ball.bounding_box(), &state.bricks) {
            let brick = &mut state.bricks[index];
            if let Some(power_up) = hit_brick(brick, &mut state.score, tuning, rng) {
                state.power_ups.push(power_up);
            }
            ball.vel.y = -ball.vel.y;
        }

        if !ball_out_of_bounds(&ball, field) {
            survivors.push(ball);
        }
    }

    state.balls = survivors;
}

/// Damage a brick; returns a dropped power-up if the brick was destroyed
fn hit_brick<R: Rng>(
    brick: &mut Brick,
    score: &mut u32,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<PowerUp> {
    debug_assert!(brick.hp > 0, "hit a brick that is already out of play");
    brick.hp = brick.hp.saturating_sub(1);

    if brick.hp > 0 {
        brick.color = brick.color.scale_alpha(BRICK_DAMAGE_DIM);
        return None;
    }

    *score = score.saturating_add(tuning.brick_score);

    if rng.random::<f32>() < tuning.power_up_spawn_chance {
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        log::debug!("Brick destroyed, dropping {:?}", kind);
        Some(PowerUp::new(brick.rect, kind))
    } else {
        None
    }
}

/// All balls gone: lose a life, then either respawn or end the run
fn lose_life(mut state: GameState, field: Field, config: &GameConfig) -> GameState {
    state.lives = state.lives.saturating_sub(1);

    if state.lives == 0 {
        log::info!("Game over on level {} with score {}", state.level, state.score);
        state.status = GameStatus::GameOver;
        state.balls.clear();
        state.power_ups.clear();
        return state;
    }

    log::info!("Ball lost, {} lives left", state.lives);
    respawn(&state, field, config)
}

/// Drop, catch and expire power-ups
fn update_power_ups(state: &mut GameState, field: Field, now_ms: u64, tuning: &Tuning) {
    let power_ups = std::mem::take(&mut state.power_ups);
    let mut remaining = Vec::with_capacity(power_ups.len());

    for power_up in power_ups {
        if let PowerUpPhase::Absorbing { since_ms } = power_up.phase {
            if now_ms.saturating_sub(since_ms) < tuning.absorption_ms {
                remaining.push(power_up);
            }
            continue;
        }

        let rect = power_up.rect.offset(0.0, tuning.power_up_fall_speed);
        if power_up_caught(&rect, &state.paddle.rect, tuning.power_up_catch_depth) {
            state.paddle_flash_until_ms = now_ms.saturating_add(tuning.paddle_flash_ms);
            remaining.push(PowerUp {
                phase: PowerUpPhase::Absorbing { since_ms: now_ms },
                ..power_up
            });
            apply_power_up(state, power_up.kind, field, now_ms, tuning);
        } else if rect.top < field.height {
            remaining.push(PowerUp { rect, ..power_up });
        }
    }

    state.power_ups = remaining;
}

fn apply_power_up(
    state: &mut GameState,
    kind: PowerUpKind,
    field: Field,
    now_ms: u64,
    tuning: &Tuning,
) {
    log::debug!("Collected {:?}", kind);
    match kind {
        PowerUpKind::WidenPaddle | PowerUpKind::ShrinkPaddle => {
            let divisor = if kind == PowerUpKind::WidenPaddle {
                PADDLE_WIDE_DIVISOR
            } else {
                PADDLE_NARROW_DIVISOR
            };
            state.paddle = state.paddle.resized(field.width / divisor, field);
            state.active_power_up = Some(ActivePowerUp {
                kind,
                expires_at_ms: now_ms.saturating_add(tuning.power_up_duration_ms),
            });
        }
        PowerUpKind::ExtraLife => {
            state.lives = state.lives.saturating_add(1);
        }
        PowerUpKind::MultiBall => {
            if state.balls.len() < tuning.max_balls {
                if let Some(first) = state.balls.first().copied() {
                    state.balls.push(Ball {
                        vel: Vec2::new(-first.vel.x, first.vel.y),
                        ..first
                    });
                }
            }
        }
        PowerUpKind::SpeedUpBall => {
            for ball in &mut state.balls {
                ball.vel = accelerate(ball.vel, tuning.speed_up_multiplier, tuning.max_ball_speed);
            }
        }
    }
}

/// No bricks left: stop the balls and report the level result
fn complete_level(mut state: GameState, config: &GameConfig) -> GameState {
    state.balls.clear();
    state.status = if config.levels.has_level(state.level + 1) {
        GameStatus::LevelComplete
    } else {
        GameStatus::GameWon
    };
    log::info!(
        "Level {} cleared ({:?}), score {}",
        state.level,
        state.status,
        state.score
    );
    state
}
