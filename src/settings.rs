//! Game settings and preferences
//!
//! Persisted as JSON in the user's home directory, separately from any
//! per-session state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sim::AiProfile;

/// Computer opponent difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "med" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// AI tuning for this difficulty: how badly the computer misreads
    /// shots, and how fast it chases its target
    pub fn profile(&self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                error_margin: 0.35,
                sensitivity: 0.2,
            },
            Difficulty::Normal => AiProfile::default(),
            Difficulty::Hard => AiProfile {
                error_margin: 0.1,
                sensitivity: 0.45,
            },
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Computer opponent difficulty (single player only)
    pub difficulty: Difficulty,
    /// Show the FPS counter in the corner of the playfield
    pub show_fps: bool,
    /// Plain white-on-black rendering instead of the colored screens
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    fn path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".retro_pong_settings.json")
    }

    /// Load settings, falling back to defaults on a missing or corrupt file
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::path()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {:?}", Self::path());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring corrupt settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; best-effort, failures are only logged
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::path(), json) {
                    log::warn!("failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_normal_profile_matches_defaults() {
        assert_eq!(Difficulty::Normal.profile(), AiProfile::default());
    }

    #[test]
    fn test_harder_difficulty_is_faster_and_more_accurate() {
        let easy = Difficulty::Easy.profile();
        let hard = Difficulty::Hard.profile();
        assert!(hard.sensitivity > easy.sensitivity);
        assert!(hard.error_margin < easy.error_margin);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            show_fps: true,
            high_contrast: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.difficulty, Difficulty::Hard);
        assert!(back.show_fps);
    }
}
