//! Collision detection and response
//!
//! Balls collide through their bounding boxes: walls, paddle and bricks are
//! all axis-aligned, and a bounce is a sign flip of one velocity component.

use glam::Vec2;

use super::geometry::{Circle, Field, Rect};
use super::state::{Ball, Brick};

/// Which field edges a ball has crossed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Crossed the left or right edge
    pub side: bool,
    /// Crossed the top edge
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Check a ball against the side and top walls (the bottom is open)
pub fn wall_contact(circle: &Circle, field: Field) -> WallContact {
    WallContact {
        side: circle.center.x - circle.radius < 0.0
            || circle.center.x + circle.radius > field.width,
        top: circle.center.y - circle.radius < 0.0,
    }
}

/// Bounce off the walls in `contact`; position is left alone
pub fn reflect_off_walls(vel: Vec2, contact: WallContact) -> Vec2 {
    Vec2::new(
        if contact.side { -vel.x } else { vel.x },
        if contact.top { -vel.y } else { vel.y },
    )
}

/// Clamp each velocity component to `max` magnitude, keeping its sign
#[inline]
pub fn clamp_components(vel: Vec2, max: f32) -> Vec2 {
    vel.clamp(Vec2::splat(-max), Vec2::splat(max))
}

/// Scale a velocity and clamp each component to `max`
pub fn accelerate(vel: Vec2, multiplier: f32, max: f32) -> Vec2 {
    clamp_components(vel * multiplier, max)
}

/// A descending ball whose box overlaps the paddle
pub fn ball_hits_paddle(ball: &Ball, paddle: &Rect) -> bool {
    ball.vel.y > 0.0 && ball.bounding_box().intersects(paddle)
}

/// First visible brick (in scan order) overlapping the ball's box
pub fn first_brick_hit(ball_box: &Rect, bricks: &[Brick]) -> Option<usize> {
    bricks
        .iter()
        .position(|brick| brick.is_visible() && ball_box.intersects(&brick.rect))
}

/// A ball leaves play once its lowest point reaches the bottom edge
pub fn ball_out_of_bounds(ball: &Ball, field: Field) -> bool {
    ball.pos.y + ball.radius >= field.height
}

/// Whether a falling power-up lands on the paddle
///
/// The catch region is the paddle's horizontal span, from its top edge down to
/// `catch_depth` below it.
pub fn power_up_caught(rect: &Rect, paddle: &Rect, catch_depth: f32) -> bool {
    rect.bottom >= paddle.top
        && rect.top < paddle.top + catch_depth
        && rect.right > paddle.left
        && rect.left < paddle.right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;

    fn field() -> Field {
        Field::new(400.0, 800.0)
    }

    fn brick(left: f32, top: f32, hp: u32) -> Brick {
        Brick {
            rect: Rect::new(left, top, left + 40.0, top + 20.0),
            color: Color::BRICK_ORANGE,
            hp,
        }
    }

    #[test]
    fn test_wall_contact() {
        let inside = Circle::new(Vec2::new(200.0, 400.0), 10.0);
        assert!(!wall_contact(&inside, field()).any());

        let left = Circle::new(Vec2::new(5.0, 400.0), 10.0);
        assert_eq!(
            wall_contact(&left, field()),
            WallContact {
                side: true,
                top: false
            }
        );

        let corner = Circle::new(Vec2::new(395.0, 5.0), 10.0);
        assert_eq!(
            wall_contact(&corner, field()),
            WallContact {
                side: true,
                top: true
            }
        );
    }

    #[test]
    fn test_reflect_off_walls() {
        let vel = Vec2::new(8.0, -8.0);
        let contact = WallContact {
            side: true,
            top: true,
        };
        assert_eq!(reflect_off_walls(vel, contact), Vec2::new(-8.0, 8.0));
        assert_eq!(reflect_off_walls(vel, WallContact::default()), vel);
    }

    #[test]
    fn test_accelerate_clamps_components() {
        let vel = accelerate(Vec2::new(14.9, -14.9), 1.02, 15.0);
        assert_eq!(vel, Vec2::new(15.0, -15.0));

        let vel = accelerate(Vec2::new(10.0, -10.0), 1.02, 15.0);
        assert!((vel.x - 10.2).abs() < 1e-5);
        assert!((vel.y + 10.2).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_hit_requires_descending_ball() {
        let paddle = Rect::new(150.0, 700.0, 250.0, 720.0);
        let down = Ball::new(Vec2::new(200.0, 695.0), Vec2::new(3.0, 8.0), 10.0);
        let up = Ball::new(Vec2::new(200.0, 695.0), Vec2::new(3.0, -8.0), 10.0);
        assert!(ball_hits_paddle(&down, &paddle));
        assert!(!ball_hits_paddle(&up, &paddle));
    }

    #[test]
    fn test_first_brick_hit_skips_destroyed_bricks() {
        let bricks = [brick(100.0, 100.0, 0), brick(100.0, 100.0, 2), brick(100.0, 100.0, 1)];
        let ball_box = Rect::new(110.0, 110.0, 120.0, 130.0);
        assert_eq!(first_brick_hit(&ball_box, &bricks), Some(1));

        let miss = Rect::new(300.0, 300.0, 310.0, 310.0);
        assert_eq!(first_brick_hit(&miss, &bricks), None);
    }

    #[test]
    fn test_ball_out_of_bounds() {
        let ball = Ball::new(Vec2::new(200.0, 790.0), Vec2::ZERO, 10.0);
        assert!(ball_out_of_bounds(&ball, field()));
        let ball = Ball::new(Vec2::new(200.0, 789.0), Vec2::ZERO, 10.0);
        assert!(!ball_out_of_bounds(&ball, field()));
    }

    #[test]
    fn test_power_up_catch_region() {
        let paddle = Rect::new(150.0, 700.0, 250.0, 720.0);
        // Resting on the paddle top
        assert!(power_up_caught(&Rect::new(180.0, 680.0, 220.0, 700.0), &paddle, 20.0));
        // Still above the paddle
        assert!(!power_up_caught(&Rect::new(180.0, 670.0, 220.0, 690.0), &paddle, 20.0));
        // Fell past the catch depth
        assert!(!power_up_caught(&Rect::new(180.0, 721.0, 220.0, 741.0), &paddle, 20.0));
        // Beside the paddle
        assert!(!power_up_caught(&Rect::new(260.0, 690.0, 300.0, 710.0), &paddle, 20.0));
    }
}
