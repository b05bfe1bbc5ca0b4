//! Widget configuration
//!
//! Timing and geometry knobs. Read once at startup from an optional JSON
//! block embedded in the page; nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Largest timer delay a browser accepts (ms)
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;
/// Largest No button offset accepted (px)
pub const MAX_OFFSET_LIMIT: f64 = 10_000.0;
/// Longest fall animation accepted (s)
pub const MAX_FALL_SECS: f64 = 600.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid widget config: {0}")]
    Invalid(String),
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    // === Petals ===
    /// Interval between petal spawns (ms)
    pub spawn_period_ms: u32,
    /// Time before a spawned petal is removed (ms)
    pub petal_lifetime_ms: u32,
    /// Shortest fall animation (s)
    pub fall_secs_min: f64,
    /// Longest fall animation (s, exclusive)
    pub fall_secs_max: f64,

    // === Evasion ===
    /// Max horizontal offset of the No button from its origin (px)
    pub max_offset_x: f64,
    /// Max vertical offset of the No button from its origin (px)
    pub max_offset_y: f64,
    /// Delay between clearing and re-applying the shake animation (ms)
    pub shake_restart_delay_ms: u32,

    /// Fixed RNG seed (defaults to the page load time on the web)
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            spawn_period_ms: SPAWN_PERIOD_MS,
            petal_lifetime_ms: PETAL_LIFETIME_MS,
            fall_secs_min: FALL_SECS_MIN,
            fall_secs_max: FALL_SECS_MAX,
            max_offset_x: MAX_OFFSET_X,
            max_offset_y: MAX_OFFSET_Y,
            shake_restart_delay_ms: SHAKE_RESTART_DELAY_MS,
            seed: None,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, ms) in [
            ("spawn_period_ms", self.spawn_period_ms),
            ("petal_lifetime_ms", self.petal_lifetime_ms),
        ] {
            if ms == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be > 0")));
            }
        }
        // Browser timers take an i32 delay
        for (name, ms) in [
            ("spawn_period_ms", self.spawn_period_ms),
            ("petal_lifetime_ms", self.petal_lifetime_ms),
            ("shake_restart_delay_ms", self.shake_restart_delay_ms),
        ] {
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be <= {MAX_TIMER_MS}"
                )));
            }
        }
        let fall_ok = self.fall_secs_min.is_finite()
            && self.fall_secs_max.is_finite()
            && self.fall_secs_min > 0.0
            && self.fall_secs_min < self.fall_secs_max
            && self.fall_secs_max <= MAX_FALL_SECS;
        if !fall_ok {
            return Err(ConfigError::Invalid(format!(
                "fall range {}..{} must be non-empty within (0, {MAX_FALL_SECS}]",
                self.fall_secs_min, self.fall_secs_max
            )));
        }
        for (name, offset) in [
            ("max_offset_x", self.max_offset_x),
            ("max_offset_y", self.max_offset_y),
        ] {
            if !(offset.is_finite() && (0.0..=MAX_OFFSET_LIMIT).contains(&offset)) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0..={MAX_OFFSET_LIMIT}px"
                )));
            }
        }
        Ok(())
    }

    /// Rough steady-state number of live petals
    pub fn expected_live_petals(&self) -> u32 {
        self.petal_lifetime_ms / self.spawn_period_ms
    }

    /// Element id of the embedded config block
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "widget-config";

    /// Load config from the page's `<script id="widget-config">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded widget config from page");
                    config
                }
                Err(e) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default widget config");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.expected_live_petals(), 25);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{ "spawn_period_ms": 100, "seed": 7 }"#).unwrap();
        assert_eq!(config.spawn_period_ms, 100);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.petal_lifetime_ms, 5000);
        assert_eq!(config.max_offset_x, 150.0);
    }

    #[test]
    fn test_rejects_zero_period() {
        let err = WidgetConfig::from_json(r#"{ "spawn_period_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_inverted_fall_range() {
        let err =
            WidgetConfig::from_json(r#"{ "fall_secs_min": 5.0, "fall_secs_max": 3.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_huge_offset() {
        let err = WidgetConfig::from_json(r#"{ "max_offset_x": 1e308 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = WidgetConfig::from_json(r#"{ "max_offset_y": 10001.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(WidgetConfig::from_json(r#"{ "max_offset_x": 10000.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let config = WidgetConfig {
            fall_secs_max: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = WidgetConfig {
            fall_secs_min: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = WidgetConfig {
            max_offset_y: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_timer_delays_past_i32() {
        let json = format!(r#"{{ "petal_lifetime_ms": {} }}"#, u64::from(MAX_TIMER_MS) + 1);
        assert!(matches!(
            WidgetConfig::from_json(&json).unwrap_err(),
            ConfigError::Invalid(_)
        ));
        let config = WidgetConfig {
            shake_restart_delay_ms: u32::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = WidgetConfig {
            spawn_period_ms: MAX_TIMER_MS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = WidgetConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
