//! Input device detection.
//!
//! The only thing that depends on the device is which instructions are
//! shown: keyboard users are told about the number keys, touch users about
//! tapping cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Environment variables that only exist on touch-first terminals.
const TOUCH_MARKERS: [&str; 2] = ["TERMUX_VERSION", "ANDROID_ROOT"];

/// How the player is expected to give input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum InputProfile {
    /// Physical keyboard with digits or a numpad.
    Keyboard,
    /// Touch screen; cells are tapped.
    Touch,
}

impl InputProfile {
    /// Detects the profile from an environment lookup.
    ///
    /// Pure: the lookup is passed in so callers and tests control it.
    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if TOUCH_MARKERS.into_iter().any(|key| lookup(key).is_some()) {
            InputProfile::Touch
        } else {
            InputProfile::Keyboard
        }
    }

    /// Detects the profile from the process environment.
    #[instrument]
    pub fn from_env() -> Self {
        Self::detect(|key| std::env::var(key).ok())
    }

    /// Instructions for tic-tac-toe.
    pub fn tictactoe_instructions(self) -> &'static str {
        match self {
            InputProfile::Keyboard => "Use numpad (789/456/123) to play!",
            InputProfile::Touch => "Tap a square to place your mark!",
        }
    }

    /// Instructions for the number grid.
    pub fn grid_instructions(self) -> &'static str {
        match self {
            InputProfile::Keyboard => {
                "Use the arrow keys to pick a square and the numpad or number keys to fill it"
            }
            InputProfile::Touch => "Touch a square to select it, then touch again to set a number",
        }
    }
}

/// Configured choice of input profile.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSetting {
    /// Detect from the environment.
    #[default]
    Auto,
    /// Always keyboard.
    Keyboard,
    /// Always touch.
    Touch,
}

impl ProfileSetting {
    /// Resolves the setting into a concrete profile.
    #[instrument]
    pub fn resolve(self) -> InputProfile {
        match self {
            ProfileSetting::Auto => InputProfile::from_env(),
            ProfileSetting::Keyboard => InputProfile::Keyboard,
            ProfileSetting::Touch => InputProfile::Touch,
        }
    }
}
