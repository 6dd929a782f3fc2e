//! Per-frame state machine
//!
//! One `tick` call advances the whole game by a frame: screen transitions
//! first, then (only while playing) paddle movement, physics and scoring.

use crate::consts::*;
use crate::sim::{ai, physics, scoring};
use crate::sim::state::{Mode, PlayMode, World};

/// Input snapshot for a single frame
///
/// `pause` and `escape` must be edge-detected by the input layer: true only
/// on the frame the key went down. The movement, select and restart fields
/// are level-sensitive (true while held).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// External quit request (Ctrl-C, terminal hangup)
    pub quit: bool,
    /// Pause toggle (edge)
    pub pause: bool,
    /// Quit while playing, back to the menu from Paused/GameOver (edge)
    pub escape: bool,
    /// Restart from the game-over screen
    pub restart: bool,
    /// Title screen: start a single-player game
    pub select_single: bool,
    /// Title screen: start a two-player game
    pub select_versus: bool,
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

/// What the frame loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickFlow {
    Continue,
    Exit,
}

/// Advance the game by one frame
pub fn tick(world: &mut World, input: &FrameInput, dt: f32) -> TickFlow {
    if input.quit {
        return TickFlow::Exit;
    }

    // A stalled frame can deliver an outsized delta; never integrate it
    let dt = dt.min(MAX_DT);

    if input.escape {
        match world.mode {
            Mode::Paused | Mode::GameOver => {
                log::info!("returning to title screen");
                world.mode = Mode::Title;
            }
            Mode::Title | Mode::SinglePlayer | Mode::TwoPlayer => return TickFlow::Exit,
        }
    }

    if input.pause {
        match world.mode {
            Mode::SinglePlayer | Mode::TwoPlayer => {
                log::info!("paused");
                world.mode = Mode::Paused;
            }
            Mode::Paused => {
                log::info!("resumed");
                world.mode = world.play_mode.mode();
            }
            Mode::Title | Mode::GameOver => {}
        }
    }

    if world.mode == Mode::GameOver && input.restart {
        log::info!("restarting in {:?}", world.play_mode);
        world.mode = world.play_mode.mode();
        world.reset_game();
    }

    if world.mode == Mode::Title {
        if input.select_single {
            start_game(world, PlayMode::Single);
        } else if input.select_versus {
            start_game(world, PlayMode::Versus);
        }
    }

    if world.mode.is_playing() {
        update_playing(world, input, dt);
    }

    TickFlow::Continue
}

fn start_game(world: &mut World, play_mode: PlayMode) {
    log::info!("starting {play_mode:?} game");
    world.play_mode = play_mode;
    world.mode = play_mode.mode();
    world.reset_game();
}

/// The live-gameplay frame step: paddles, then ball, then the score
fn update_playing(world: &mut World, input: &FrameInput, dt: f32) {
    if input.p1_up {
        world.left_paddle.y -= PADDLE_SPEED * dt;
    }
    if input.p1_down {
        world.left_paddle.y += PADDLE_SPEED * dt;
    }

    match world.mode {
        Mode::TwoPlayer => {
            if input.p2_up {
                world.right_paddle.y -= PADDLE_SPEED * dt;
            }
            if input.p2_down {
                world.right_paddle.y += PADDLE_SPEED * dt;
            }
        }
        Mode::SinglePlayer => ai::drive(world, dt),
        Mode::Title | Mode::Paused | Mode::GameOver => {
            unreachable!("playing update outside of play")
        }
    }

    world.left_paddle.clamp();
    world.right_paddle.clamp();

    physics::advance(world, dt);
    scoring::evaluate(world);

    if world.mode == Mode::GameOver {
        if let Some(winner) = world.winner {
            log::info!(
                "game over: {} wins {}-{}",
                winner.label(),
                world.score.left,
                world.score.right
            );
        }
    }
}
