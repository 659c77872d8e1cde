//! Calorie model
//!
//! Pure functions computing step length, distance, mean speed and calories
//! from validated inputs. Inputs are checked in a fixed order (steps, weight,
//! height, duration) and the first failing check is reported.

use chrono::Duration;

use crate::config::{ModelConfig, StepLengthPolicy};
use crate::duration::{hours, minutes};
use crate::error::{ComputeError, ValidationError};
use crate::types::{ActivityKind, BodyParams, CalorieResult};

/// Calorie model parameterized by a validated [`ModelConfig`]
#[derive(Debug, Clone)]
pub struct CalorieModel {
    config: ModelConfig,
}

impl Default for CalorieModel {
    fn default() -> Self {
        Self {
            config: ModelConfig::default(),
        }
    }
}

impl CalorieModel {
    pub fn new(config: ModelConfig) -> Result<Self, ComputeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Step length (m) for the given height (m) under the configured policy
    pub fn step_length(&self, height_m: f64) -> f64 {
        match self.config.step_length {
            StepLengthPolicy::HeightBased { coefficient } => height_m * coefficient,
            StepLengthPolicy::Fixed { meters } => meters,
        }
    }

    /// Distance (km) covered in `steps` strides of `step_length_m`
    pub fn distance_km(&self, steps: u64, step_length_m: f64) -> f64 {
        steps as f64 * step_length_m / self.config.meters_in_km
    }

    /// Mean speed (km/h); 0 for a non-positive duration
    pub fn mean_speed_kmh(&self, distance_km: f64, duration: &Duration) -> f64 {
        if *duration <= Duration::zero() {
            return 0.0;
        }
        distance_km / hours(duration)
    }

    pub fn calories_burned(
        &self,
        weight_kg: f64,
        speed_kmh: f64,
        duration_minutes: f64,
        activity_coefficient: f64,
    ) -> f64 {
        weight_kg * speed_kmh * duration_minutes / self.config.minutes_in_hour
            * activity_coefficient
    }

    pub fn validate_params(
        &self,
        steps: u64,
        body: &BodyParams,
        duration: &Duration,
    ) -> Result<(), ValidationError> {
        if steps == 0 {
            return Err(ValidationError::NonPositiveSteps(0));
        }
        if !is_positive(body.weight_kg) {
            return Err(ValidationError::NonPositiveWeight(body.weight_kg));
        }
        if !is_positive(body.height_m) {
            return Err(ValidationError::NonPositiveHeight(body.height_m));
        }
        if *duration <= Duration::zero() {
            return Err(ValidationError::NonPositiveDuration(duration.to_string()));
        }
        Ok(())
    }

    /// Validate inputs and derive distance, speed and calories for `kind`
    pub fn compute(
        &self,
        steps: u64,
        kind: ActivityKind,
        duration: &Duration,
        body: &BodyParams,
    ) -> Result<CalorieResult, ComputeError> {
        self.validate_params(steps, body, duration)?;

        let step_length_m = self.step_length(body.height_m);
        log::trace!(
            "step length {:.4} m from {:?}",
            step_length_m,
            self.config.step_length
        );

        let distance_km = self.distance_km(steps, step_length_m);
        let mean_speed_kmh = self.mean_speed_kmh(distance_km, duration);
        if !is_positive(mean_speed_kmh) {
            return Err(ValidationError::NonPositiveSpeed(mean_speed_kmh).into());
        }

        let coefficient = self.config.activity_coefficients.for_kind(kind);
        let calories = self.calories_burned(
            body.weight_kg,
            mean_speed_kmh,
            minutes(duration),
            coefficient,
        );
        if !is_positive(calories) {
            return Err(ValidationError::NonPositiveCalories(calories).into());
        }

        let result = CalorieResult {
            step_length_m,
            distance_km,
            mean_speed_kmh,
            calories,
        };
        log::debug!("computed {} result: {:?}", kind.as_str(), result);
        Ok(result)
    }

    /// Calories burned running
    pub fn running_spent_calories(
        &self,
        steps: u64,
        body: &BodyParams,
        duration: &Duration,
    ) -> Result<f64, ComputeError> {
        Ok(self
            .compute(steps, ActivityKind::Running, duration, body)?
            .calories)
    }

    /// Calories burned walking
    pub fn walking_spent_calories(
        &self,
        steps: u64,
        body: &BodyParams,
        duration: &Duration,
    ) -> Result<f64, ComputeError> {
        Ok(self
            .compute(steps, ActivityKind::Walking, duration, body)?
            .calories)
    }
}

/// Finite and strictly positive; NaN fails
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
