//! Model configuration
//!
//! All physical constants used by the calorie model live here so they can be
//! tuned, loaded from JSON, or overridden in tests.

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::types::ActivityKind;

/// Step length derived from height, as a fraction of it
pub const DEFAULT_STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Fixed step length (m) used when height is not taken into account
pub const DEFAULT_FIXED_STEP_LENGTH_M: f64 = 0.65;

/// How step length is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum StepLengthPolicy {
    /// `height × coefficient`
    HeightBased { coefficient: f64 },
    /// Constant step length regardless of height
    Fixed { meters: f64 },
}

impl StepLengthPolicy {
    pub fn fixed_default() -> Self {
        StepLengthPolicy::Fixed {
            meters: DEFAULT_FIXED_STEP_LENGTH_M,
        }
    }
}

impl Default for StepLengthPolicy {
    fn default() -> Self {
        StepLengthPolicy::HeightBased {
            coefficient: DEFAULT_STEP_LENGTH_COEFFICIENT,
        }
    }
}

/// Calorie multipliers per activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCoefficients {
    pub running: f64,
    pub walking: f64,
}

impl ActivityCoefficients {
    pub fn for_kind(&self, kind: ActivityKind) -> f64 {
        match kind {
            ActivityKind::Running => self.running,
            ActivityKind::Walking => self.walking,
        }
    }
}

impl Default for ActivityCoefficients {
    fn default() -> Self {
        Self {
            running: 1.0,
            walking: 0.5,
        }
    }
}

/// Configuration for the calorie model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub step_length: StepLengthPolicy,
    pub meters_in_km: f64,
    pub minutes_in_hour: f64,
    pub activity_coefficients: ActivityCoefficients,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            step_length: StepLengthPolicy::default(),
            meters_in_km: 1000.0,
            minutes_in_hour: 60.0,
            activity_coefficients: ActivityCoefficients::default(),
        }
    }
}

impl ModelConfig {
    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ComputeError> {
        let config: ModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ComputeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every constant must be finite and positive
    pub fn validate(&self) -> Result<(), ComputeError> {
        let (policy_name, policy_value) = match self.step_length {
            StepLengthPolicy::HeightBased { coefficient } => {
                ("step_length.coefficient", coefficient)
            }
            StepLengthPolicy::Fixed { meters } => ("step_length.meters", meters),
        };

        let checks = [
            (policy_name, policy_value),
            ("meters_in_km", self.meters_in_km),
            ("minutes_in_hour", self.minutes_in_hour),
            ("activity_coefficients.running", self.activity_coefficients.running),
            ("activity_coefficients.walking", self.activity_coefficients.walking),
        ];

        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ComputeError::ConfigError(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ModelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.step_length,
            StepLengthPolicy::HeightBased { coefficient: 0.45 }
        );
        assert_eq!(config.activity_coefficients.for_kind(ActivityKind::Running), 1.0);
        assert_eq!(config.activity_coefficients.for_kind(ActivityKind::Walking), 0.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ModelConfig::from_json(
            r#"{"step_length": {"policy": "fixed", "meters": 0.65}}"#,
        )
        .unwrap();

        assert_eq!(config.step_length, StepLengthPolicy::fixed_default());
        assert_eq!(config.meters_in_km, 1000.0);
        assert_eq!(config.activity_coefficients.walking, 0.5);
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        let result = ModelConfig::from_json(r#"{"activity_coefficients": {"walking": 0.0}}"#);
        assert!(matches!(result, Err(ComputeError::ConfigError(_))));

        let result = ModelConfig::from_json(r#"{"minutes_in_hour": -60}"#);
        assert!(matches!(result, Err(ComputeError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = ModelConfig::from_json("not valid json");
        assert!(matches!(result, Err(ComputeError::JsonError(_))));
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = ModelConfig {
            step_length: StepLengthPolicy::fixed_default(),
            ..Default::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"policy\": \"fixed\""));
        assert_eq!(ModelConfig::from_json(&json).unwrap(), config);
    }
}
