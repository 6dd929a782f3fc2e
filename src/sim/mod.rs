//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - One `tick` per frame, driven entirely by the input snapshot and `dt`

pub mod ai;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;

pub use ai::AiProfile;
pub use state::{Ball, Mode, Paddle, PlayMode, Score, Winner, World};
pub use tick::{FrameInput, TickFlow, tick};
