//! Retro Pong - a classic two-paddle arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, AI, scoring)
//! - `settings`: User preferences persisted between sessions
//!
//! Rendering and input live in the binary; the simulation never touches I/O.

pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (world units; the renderer scales to the terminal)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle travel speed for a held movement key (units/sec)
    pub const PADDLE_SPEED: f32 = 200.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Horizontal speed a fresh rally starts with
    pub const BASE_BALL_SPEED: f32 = 150.0;
    /// Vertical speed is clamped to this magnitude every frame
    pub const BALL_MAX_VSPEED: f32 = 300.0;
    /// Horizontal speed multiplier applied on each paddle hit
    pub const PADDLE_REBOUND: f32 = 1.1;
    /// Vertical speed added per unit of normalized hit offset (spin)
    pub const SPIN_FACTOR: f32 = 200.0;

    /// Points needed to win a game
    pub const WINNING_SCORE: u32 = 11;
    /// Lead required on top of WINNING_SCORE (win by two)
    pub const WIN_MARGIN: u32 = 2;

    /// Gap between the AI's prediction plane and the screen edge
    pub const AI_PLANE_MARGIN: f32 = 10.0;
    /// The AI ignores target errors smaller than this (units)
    pub const AI_DEADBAND: f32 = 1.0;

    /// Upper bound on a single simulation step; protects the integrator
    /// from a stalled frame delivering a huge delta
    pub const MAX_DT: f32 = 0.1;
}
