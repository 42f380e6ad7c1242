/// Application settings
///
/// Loaded once at startup from an optional JSON file in the user's config
/// directory. Every field has a sensible default, so a missing or partial
/// file is fine; a malformed file logs a warning and falls back to defaults.
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::upload::SimulationParams;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation tick interval in milliseconds.
    pub tick_ms: u64,
    /// Upper bound of the per-tick progress increment.
    pub max_step: f32,
    /// Probability that a finished upload lands on `Completed`.
    pub success_rate: f64,
    /// Route path to open on startup, e.g. "/upload".
    pub start_page: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 300,
            max_step: 20.0,
            success_rate: 0.8,
            start_page: None,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed settings file, using defaults");
                    Self::default()
                }
            },
            // A missing file is the common case, not an error.
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fair-validator").join("settings.json"))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(50))
    }

    /// Simulation knobs, clamped so hand-edited files cannot produce an
    /// empty step range or an out-of-range probability.
    pub fn simulation(&self) -> SimulationParams {
        SimulationParams {
            max_step: self.max_step.max(0.1),
            success_rate: self.success_rate.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulated_pipeline() {
        let settings = Settings::default();
        assert_eq!(settings.tick_ms, 300);
        assert_eq!(settings.max_step, 20.0);
        assert_eq!(settings.success_rate, 0.8);
        assert!(settings.start_page.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tick_ms": 100}"#).unwrap();
        assert_eq!(settings.tick_ms, 100);
        assert_eq!(settings.success_rate, 0.8);
    }

    #[test]
    fn start_page_is_parsed() {
        let settings: Settings =
            serde_json::from_str(r#"{"start_page": "/upload"}"#).unwrap();
        assert_eq!(settings.start_page.as_deref(), Some("/upload"));
    }

    #[test]
    fn simulation_clamps_out_of_range_values() {
        let settings = Settings {
            max_step: -3.0,
            success_rate: 2.0,
            ..Settings::default()
        };
        let params = settings.simulation();
        assert_eq!(params.max_step, 0.1);
        assert_eq!(params.success_rate, 1.0);
    }

    #[test]
    fn tick_has_a_floor() {
        let settings = Settings {
            tick_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.tick(), Duration::from_millis(50));
    }
}
