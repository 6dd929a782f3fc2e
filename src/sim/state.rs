//! Game state and core simulation types
//!
//! Everything a frame reads or mutates lives on [`World`]; there is no other
//! mutable state anywhere in the simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ai::AiProfile;
use crate::consts::*;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Menu: pick single player or two players
    Title,
    /// Active gameplay against the computer
    SinglePlayer,
    /// Active gameplay, both paddles human-driven
    TwoPlayer,
    /// Gameplay suspended; resumes into the play mode it came from
    Paused,
    /// A side reached the winning score
    GameOver,
}

impl Mode {
    /// True for the two modes in which the ball is live
    pub fn is_playing(self) -> bool {
        matches!(self, Mode::SinglePlayer | Mode::TwoPlayer)
    }
}

/// Which flavour of gameplay was chosen on the title screen.
///
/// Kept separate from [`Mode`] so that "the mode Paused/GameOver resumes
/// into" can only ever be a playing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Single,
    Versus,
}

impl PlayMode {
    /// The [`Mode`] this play mode runs as
    pub fn mode(self) -> Mode {
        match self {
            PlayMode::Single => Mode::SinglePlayer,
            PlayMode::Versus => Mode::TwoPlayer,
        }
    }
}

/// Who won a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Computer,
}

impl Winner {
    pub fn label(self) -> &'static str {
        match self {
            Winner::PlayerOne => "PLAYER 1",
            Winner::PlayerTwo => "PLAYER 2",
            Winner::Computer => "COMPUTER",
        }
    }
}

/// A paddle, stored as the Y of its top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// A paddle centered vertically on the playfield
    pub fn centered() -> Self {
        Self {
            y: SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    /// Clamp to the valid vertical range
    pub fn clamp(&mut self) {
        self.y = self.y.clamp(0.0, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    /// Whether the ball's vertical span overlaps this paddle
    pub fn overlaps_ball(&self, ball_y: f32) -> bool {
        ball_y + BALL_SIZE >= self.y && ball_y <= self.y + PADDLE_HEIGHT
    }
}

/// The ball; `pos` is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// A motionless ball centered on the playfield
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH / 2.0 - BALL_SIZE / 2.0,
                SCREEN_HEIGHT / 2.0 - BALL_SIZE / 2.0,
            ),
            vel: Vec2::ZERO,
        }
    }
}

/// Per-side points for the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Complete game state
///
/// Owned by the frame loop and mutated only inside [`tick`](super::tick).
/// The renderer gets a shared reference after the update.
#[derive(Debug, Clone)]
pub struct World {
    /// Current screen
    pub mode: Mode,
    /// Play mode chosen on the title screen; what Paused/GameOver resume into
    pub play_mode: PlayMode,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Set on the transition into GameOver, cleared by `reset_game`
    pub winner: Option<Winner>,
    /// AI tuning for the computer-controlled right paddle
    pub ai: AiProfile,
    /// Sole randomness source: ball serves and AI prediction jitter
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a new world showing the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            mode: Mode::Title,
            play_mode: PlayMode::Single,
            left_paddle: Paddle::centered(),
            right_paddle: Paddle::centered(),
            ball: Ball::centered(),
            score: Score::default(),
            winner: None,
            ai: AiProfile::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Re-center the ball and serve it with a fresh velocity: horizontal
    /// direction a coin flip, vertical component uniform in
    /// `[-0.6, 0.6] * BASE_BALL_SPEED`
    pub fn reset_ball(&mut self) {
        self.ball = Ball::centered();
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(
            BASE_BALL_SPEED * dir,
            BASE_BALL_SPEED * self.rng.random_range(-0.6..0.6),
        );
    }

    /// Start a fresh game: paddles centered, scores zeroed, ball served
    pub fn reset_game(&mut self) {
        self.left_paddle = Paddle::centered();
        self.right_paddle = Paddle::centered();
        self.score = Score::default();
        self.winner = None;
        self.reset_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_title_defaults() {
        let world = World::new(7);
        assert_eq!(world.mode, Mode::Title);
        assert_eq!(world.play_mode, PlayMode::Single);
        assert_eq!(world.score, Score::default());
        assert_eq!(world.winner, None);
        assert_eq!(world.ball.vel, Vec2::ZERO);
        assert_eq!(world.left_paddle, Paddle::centered());
        assert_eq!(world.right_paddle, Paddle::centered());
    }

    #[test]
    fn test_reset_ball_centered_with_serve_velocity() {
        let mut world = World::new(42);
        world.ball.pos = Vec2::new(-50.0, 10.0);

        world.reset_ball();

        assert_eq!(world.ball.pos.x, SCREEN_WIDTH / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(world.ball.pos.y, SCREEN_HEIGHT / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(world.ball.vel.x.abs(), BASE_BALL_SPEED);
        assert!(world.ball.vel.y.abs() <= 0.6 * BASE_BALL_SPEED);
    }

    #[test]
    fn test_reset_game_round_trip() {
        let mut world = World::new(42);
        world.score = Score { left: 5, right: 9 };
        world.left_paddle.y = 0.0;
        world.right_paddle.y = 400.0;
        world.winner = Some(Winner::PlayerOne);

        world.reset_game();

        assert_eq!(world.score, Score::default());
        assert_eq!(world.winner, None);
        assert_eq!(world.left_paddle, Paddle::centered());
        assert_eq!(world.right_paddle, Paddle::centered());
        assert_eq!(world.ball.vel.x.abs(), BASE_BALL_SPEED);
    }

    #[test]
    fn test_reset_ball_deterministic_per_seed() {
        let mut a = World::new(99999);
        let mut b = World::new(99999);
        for _ in 0..16 {
            a.reset_ball();
            b.reset_ball();
            assert_eq!(a.ball.vel, b.ball.vel);
        }
    }

    #[test]
    fn test_paddle_clamp_bounds() {
        let mut paddle = Paddle { y: -250.0 };
        paddle.clamp();
        assert_eq!(paddle.y, 0.0);

        paddle.y = SCREEN_HEIGHT * 2.0;
        paddle.clamp();
        assert_eq!(paddle.y, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_paddle_ball_overlap() {
        let paddle = Paddle { y: 250.0 };
        // Ball bottom touches paddle top
        assert!(paddle.overlaps_ball(250.0 - BALL_SIZE));
        // Ball top touches paddle bottom
        assert!(paddle.overlaps_ball(250.0 + PADDLE_HEIGHT));
        // Clear miss above and below
        assert!(!paddle.overlaps_ball(250.0 - BALL_SIZE - 1.0));
        assert!(!paddle.overlaps_ball(250.0 + PADDLE_HEIGHT + 1.0));
    }

    #[test]
    fn test_winner_labels() {
        assert_eq!(Winner::PlayerOne.label(), "PLAYER 1");
        assert_eq!(Winner::PlayerTwo.label(), "PLAYER 2");
        assert_eq!(Winner::Computer.label(), "COMPUTER");
    }

    #[test]
    fn test_play_mode_maps_to_playing_mode() {
        assert_eq!(PlayMode::Single.mode(), Mode::SinglePlayer);
        assert_eq!(PlayMode::Versus.mode(), Mode::TwoPlayer);
        assert!(PlayMode::Single.mode().is_playing());
        assert!(PlayMode::Versus.mode().is_playing());
    }
}
