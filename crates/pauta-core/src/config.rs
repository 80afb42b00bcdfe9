//! Parser configuration: venue stamp and the fallback segmenter's window sizes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;

pub const DEFAULT_VENUE: &str = "Fórum Clemente Mariani - Camaçari";
pub const DEFAULT_FALLBACK_PAIR_DISTANCE: usize = 100;
pub const DEFAULT_FALLBACK_LOOKBEHIND: usize = 50;
pub const DEFAULT_FALLBACK_WINDOW: usize = 500;

/// Environment variable that overrides [`ParserConfig::venue`].
pub const VENUE_ENV: &str = "PAUTA_VENUE";

/// Tunables for one parse invocation. Distances are counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Venue stamped on every event; the export does not carry one.
    #[serde(default = "default_venue")]
    pub venue: String,
    /// A case number must start strictly closer than this to the date it is paired with.
    #[serde(default = "default_pair_distance")]
    pub fallback_pair_distance: usize,
    /// Context kept before the date, to catch header text.
    #[serde(default = "default_lookbehind")]
    pub fallback_lookbehind: usize,
    /// Context kept after the date. Must not reach the next hearing.
    #[serde(default = "default_window")]
    pub fallback_window: usize,
}

fn default_venue() -> String {
    DEFAULT_VENUE.into()
}
fn default_pair_distance() -> usize {
    DEFAULT_FALLBACK_PAIR_DISTANCE
}
fn default_lookbehind() -> usize {
    DEFAULT_FALLBACK_LOOKBEHIND
}
fn default_window() -> usize {
    DEFAULT_FALLBACK_WINDOW
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            venue: default_venue(),
            fallback_pair_distance: DEFAULT_FALLBACK_PAIR_DISTANCE,
            fallback_lookbehind: DEFAULT_FALLBACK_LOOKBEHIND,
            fallback_window: DEFAULT_FALLBACK_WINDOW,
        }
    }
}

impl ParserConfig {
    /// Load config from a JSON file, falling back to defaults, then apply env overrides.
    pub fn load(config_path: &Path) -> Self {
        let config = match std::fs::read_to_string(config_path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config {}: {}", config_path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No config at {}, using defaults", config_path.display());
                Self::default()
            }
        };
        config.with_env_overrides()
    }

    /// Defaults plus env overrides.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(venue) = std::env::var(VENUE_ENV) {
            if !venue.trim().is_empty() {
                self.venue = venue.trim().to_string();
            }
        }
        self
    }

    /// Reject settings the fallback segmenter cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.venue.trim().is_empty() {
            return Err(Error::Config("venue must not be empty".into()));
        }
        if self.fallback_pair_distance == 0 {
            return Err(Error::Config("fallback_pair_distance must be positive".into()));
        }
        if self.fallback_window < self.fallback_pair_distance {
            return Err(Error::Config(format!(
                "fallback_window ({}) must cover fallback_pair_distance ({})",
                self.fallback_window, self.fallback_pair_distance
            )));
        }
        Ok(())
    }
}
