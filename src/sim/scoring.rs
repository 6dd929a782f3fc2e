//! Score evaluation and win condition
//!
//! A side wins by reaching WINNING_SCORE with a WIN_MARGIN lead: 11-9 ends
//! the game, 11-10 plays on.

use crate::consts::*;
use crate::sim::state::{Mode, Winner, World};

/// True once `score` satisfies the win condition against `other`
fn has_won(score: u32, other: u32) -> bool {
    score >= WINNING_SCORE && score.abs_diff(other) >= WIN_MARGIN
}

/// Check whether the ball left the playfield and settle the point.
///
/// On a winning point the world transitions to GameOver with the winner
/// recorded; otherwise the rally restarts with a fresh serve and the scores
/// stand.
pub fn evaluate(world: &mut World) {
    if world.ball.pos.x < 0.0 {
        world.score.increment_right();
        log::debug!(
            "right side scores: {}-{}",
            world.score.left,
            world.score.right
        );

        if has_won(world.score.right, world.score.left) {
            world.winner = Some(match world.mode {
                Mode::SinglePlayer => Winner::Computer,
                Mode::TwoPlayer => Winner::PlayerTwo,
                Mode::Title | Mode::Paused | Mode::GameOver => {
                    unreachable!("scoring evaluated outside of play")
                }
            });
            world.mode = Mode::GameOver;
        } else {
            world.reset_ball();
        }
    } else if world.ball.pos.x > SCREEN_WIDTH {
        world.score.increment_left();
        log::debug!(
            "left side scores: {}-{}",
            world.score.left,
            world.score.right
        );

        if has_won(world.score.left, world.score.right) {
            world.winner = Some(Winner::PlayerOne);
            world.mode = Mode::GameOver;
        } else {
            world.reset_ball();
        }
    }
}
