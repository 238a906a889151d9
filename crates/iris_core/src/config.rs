//! Configuration: aggregated tuning plus the driver-facing settings,
//! loadable from a TOML file with environment-variable overrides on top.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::blink::BlinkTuning;
use crate::face::LidTuning;
use crate::gaze::GazeTuning;
use crate::mood::MoodTuning;
use crate::pupil::PupilTuning;

/// Every numeric knob of the simulation, grouped per controller. All
/// fields default to the stock parameterization, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaceTuning {
    pub gaze: GazeTuning,
    pub blink: BlinkTuning,
    pub pupil: PupilTuning,
    pub mood: MoodTuning,
    pub lid: LidTuning,
}

/// Top-level settings: where to publish, how fast to tick, and the tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IrisConfig {
    /// OSC receiver host.
    pub host: String,
    /// OSC receiver port.
    pub port: u16,
    /// Target tick rate in Hz.
    pub rate_hz: f32,
    /// Random seed; a seeded run replays bit-for-bit.
    pub seed: Option<u64>,
    /// Also publish the raw mood value as a debug channel.
    pub send_mood: bool,
    /// Seconds between diagnostic log lines; 0 disables them.
    pub print_every: f32,
    pub face: FaceTuning,
}

impl Default for IrisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
            rate_hz: 60.0,
            seed: None,
            send_mood: false,
            print_every: 1.0,
            face: FaceTuning::default(),
        }
    }
}

impl IrisConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. Env var overrides are applied after loading.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: IrisConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path` when given; on a missing or invalid file fall back
    /// to defaults. Env var overrides always apply.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load(p).unwrap_or_else(|e| {
                tracing::info!("Config file not usable ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }),
            None => {
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("IRIS_OSC_HOST") {
            self.host = v;
        }
        if let Ok(v) = std::env::var("IRIS_OSC_PORT") {
            if let Ok(n) = v.parse() {
                self.port = n;
            }
        }
        if let Ok(v) = std::env::var("IRIS_RATE_HZ") {
            if let Ok(n) = v.parse() {
                self.rate_hz = n;
            }
        }
        if let Ok(v) = std::env::var("IRIS_SEED") {
            if let Ok(n) = v.parse() {
                self.seed = Some(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_parameterization() {
        let cfg = IrisConfig::default();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.rate_hz, 60.0);
        assert_eq!(cfg.face.pupil.mean, 0.55);
        assert_eq!(cfg.face.blink.micro_probability, 0.15);
    }

    #[test]
    fn test_partial_toml_keeps_defaults_elsewhere() {
        let cfg: IrisConfig = toml::from_str(
            r#"
            port = 9100

            [face.mood]
            amplitude = 0.5
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.face.mood.amplitude, 0.5);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.face.mood.speed, 0.08);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.face.gaze.vergence_max, 0.08);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(IrisConfig::load("/nonexistent/iris.toml").is_err());
    }
}
