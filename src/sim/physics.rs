//! Ball physics: integration, wall bounces, paddle collision response
//!
//! Semi-implicit Euler with a variable per-frame step. Ball trajectories are
//! therefore not bit-identical across frame rates; the clamps below keep the
//! state well-formed regardless of the step size.

use crate::consts::*;
use crate::sim::state::{Ball, Paddle, World};

/// Advance the ball by one frame and resolve collisions.
///
/// Paddle collisions require the ball to be moving toward the paddle
/// (`vel.x` sign test); a ball already receding after a bounce never
/// re-triggers the same paddle.
pub fn advance(world: &mut World, dt: f32) {
    let ball = &mut world.ball;
    ball.pos += ball.vel * dt;

    // Top and bottom walls: clamp and reflect, no energy loss
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y >= SCREEN_HEIGHT - BALL_SIZE {
        ball.pos.y = SCREEN_HEIGHT - BALL_SIZE;
        ball.vel.y = -ball.vel.y;
    }

    // Left paddle: horizontal band at the left edge, ball moving leftward
    if ball.pos.x <= PADDLE_WIDTH
        && ball.pos.x + BALL_SIZE >= 0.0
        && world.left_paddle.overlaps_ball(ball.pos.y)
        && ball.vel.x < 0.0
    {
        bounce_off(ball, &world.left_paddle);
        // Snap to the paddle face so the ball can't tunnel through or stick
        ball.pos.x = PADDLE_WIDTH;
    }

    // Right paddle, mirrored
    if ball.pos.x + BALL_SIZE >= SCREEN_WIDTH - PADDLE_WIDTH
        && ball.pos.x <= SCREEN_WIDTH - PADDLE_WIDTH + BALL_SIZE
        && world.right_paddle.overlaps_ball(ball.pos.y)
        && ball.vel.x > 0.0
    {
        bounce_off(ball, &world.right_paddle);
        ball.pos.x = SCREEN_WIDTH - PADDLE_WIDTH - BALL_SIZE;
    }

    // Bound vertical speed growth from repeated off-center hits
    ball.vel.y = ball.vel.y.clamp(-BALL_MAX_VSPEED, BALL_MAX_VSPEED);
}

/// Shared paddle collision response: reverse and amplify the horizontal
/// speed, and convert the hit offset into spin.
fn bounce_off(ball: &mut Ball, paddle: &Paddle) {
    // -0.5 at the paddle top, +0.5 at the bottom
    let hit_pos = ball.pos.y + BALL_SIZE / 2.0 - paddle.y;
    let normalized = hit_pos / PADDLE_HEIGHT - 0.5;

    ball.vel.x = -ball.vel.x * PADDLE_REBOUND;
    ball.vel.y += normalized * SPIN_FACTOR;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Mode};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_world() -> World {
        let mut world = World::new(12345);
        world.mode = Mode::TwoPlayer;
        world
    }

    #[test]
    fn test_top_wall_bounce_clamps_and_reflects() {
        let mut world = playing_world();
        world.ball = Ball {
            pos: Vec2::new(400.0, 2.0),
            vel: Vec2::new(100.0, -200.0),
        };

        advance(&mut world, 0.05);

        assert_eq!(world.ball.pos.y, 0.0);
        assert_eq!(world.ball.vel.y, 200.0);
    }

    #[test]
    fn test_bottom_wall_bounce_clamps_and_reflects() {
        let mut world = playing_world();
        world.ball = Ball {
            pos: Vec2::new(400.0, SCREEN_HEIGHT - BALL_SIZE - 1.0),
            vel: Vec2::new(100.0, 150.0),
        };

        advance(&mut world, 0.05);

        assert_eq!(world.ball.pos.y, SCREEN_HEIGHT - BALL_SIZE);
        assert_eq!(world.ball.vel.y, -150.0);
    }

    #[test]
    fn test_right_paddle_collision_scenario() {
        // Ball at (790, 300) moving right at 120 toward a paddle at y=250:
        // a dead-center hit reverses and amplifies to -132 and snaps the
        // ball to the paddle face.
        let mut world = playing_world();
        world.right_paddle.y = 250.0;
        world.ball = Ball {
            pos: Vec2::new(790.0, 300.0),
            vel: Vec2::new(120.0, 0.0),
        };

        advance(&mut world, 1.0 / 60.0);

        assert!((world.ball.vel.x - (-132.0)).abs() < 1e-3);
        assert_eq!(world.ball.pos.x, SCREEN_WIDTH - PADDLE_WIDTH - BALL_SIZE);
    }

    #[test]
    fn test_left_paddle_spin_from_hit_offset() {
        let mut world = playing_world();
        world.left_paddle.y = 250.0;
        // Ball center at y=330 against a paddle spanning 250..350:
        // normalized offset (330 - 250)/100 - 0.5 = 0.3 adds 60 of spin
        world.ball = Ball {
            pos: Vec2::new(15.0, 320.0),
            vel: Vec2::new(-100.0, 0.0),
        };

        advance(&mut world, 0.0);

        assert!((world.ball.vel.x - 110.0).abs() < 1e-3);
        assert!((world.ball.vel.y - 60.0).abs() < 1e-3);
        assert_eq!(world.ball.pos.x, PADDLE_WIDTH);
    }

    #[test]
    fn test_collision_directionality_guard() {
        let mut world = playing_world();
        world.left_paddle.y = 250.0;
        world.ball = Ball {
            pos: Vec2::new(10.0, 290.0),
            vel: Vec2::new(-120.0, 0.0),
        };

        advance(&mut world, 0.0);
        let vel_after_bounce = world.ball.vel;
        assert!(vel_after_bounce.x > 0.0);

        // Still inside the paddle band, but now receding: no second bounce
        advance(&mut world, 0.0);
        assert_eq!(world.ball.vel, vel_after_bounce);
    }

    #[test]
    fn test_vertical_speed_clamped_every_frame() {
        let mut world = playing_world();
        world.ball = Ball {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::new(100.0, 1000.0),
        };

        advance(&mut world, 0.0);

        assert_eq!(world.ball.vel.y, BALL_MAX_VSPEED);
    }

    proptest! {
        #[test]
        fn prop_ball_stays_in_vertical_bounds(
            y in 0.0f32..(SCREEN_HEIGHT - BALL_SIZE),
            vx in -400.0f32..400.0,
            vy in -600.0f32..600.0,
            dt in 0.0f32..MAX_DT,
        ) {
            let mut world = playing_world();
            world.ball = Ball {
                pos: Vec2::new(400.0, y),
                vel: Vec2::new(vx, vy),
            };

            for _ in 0..8 {
                advance(&mut world, dt);
                prop_assert!(world.ball.pos.y >= 0.0);
                prop_assert!(world.ball.pos.y <= SCREEN_HEIGHT - BALL_SIZE);
                prop_assert!(world.ball.vel.y.abs() <= BALL_MAX_VSPEED);
            }
        }
    }
}
