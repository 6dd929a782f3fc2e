//! Computer opponent for the right paddle
//!
//! Predicts where the ball will cross the paddle's plane, perturbs the
//! prediction so the computer misreads some shots, and approaches the target
//! at a fraction of full paddle speed. Sensitivity is the difficulty lever:
//! the AI can never out-run a human holding a key.

use rand::Rng;

use crate::consts::*;
use crate::sim::state::World;

/// AI tuning knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Prediction jitter, as a fraction of paddle height
    pub error_margin: f32,
    /// Fraction of PADDLE_SPEED the AI moves at
    pub sensitivity: f32,
}

impl Default for AiProfile {
    fn default() -> Self {
        Self {
            error_margin: 0.2,
            sensitivity: 0.3,
        }
    }
}

/// Move the right paddle one step toward where the ball is headed.
///
/// Runs every frame while in single-player mode, whichever way the ball is
/// moving: when it travels away from the AI the paddle drifts back toward
/// the ball's current height instead of freezing.
pub fn drive(world: &mut World, dt: f32) {
    let ball = world.ball;

    // Strictly positive vel.x both selects "ball incoming" and guards the
    // division below
    let mut predicted_y = ball.pos.y;
    if ball.vel.x > 0.0 {
        let plane_x = SCREEN_WIDTH - AI_PLANE_MARGIN - PADDLE_WIDTH;
        let time_to_reach = (plane_x - ball.pos.x) / ball.vel.x;
        predicted_y = ball.pos.y + ball.vel.y * time_to_reach;
        predicted_y +=
            (world.rng.random::<f32>() - 0.5) * world.ai.error_margin * PADDLE_HEIGHT;
    }

    let target_y =
        (predicted_y - PADDLE_HEIGHT / 2.0).clamp(0.0, SCREEN_HEIGHT - PADDLE_HEIGHT);

    let paddle = &mut world.right_paddle;
    if (paddle.y - target_y).abs() > AI_DEADBAND {
        let step = PADDLE_SPEED * dt * world.ai.sensitivity;
        paddle.y += if paddle.y < target_y { step } else { -step };
    }
}
