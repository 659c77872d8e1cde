//! Pipeline orchestration
//!
//! This module provides the public API for step-calories.
//! It runs a raw record through parsing, the calorie model and report
//! rendering, returning either a complete report or the first error.

use crate::config::ModelConfig;
use crate::duration::hours;
use crate::error::{ComputeError, ValidationError};
use crate::model::CalorieModel;
use crate::parser::RecordParser;
use crate::report::{DayReport, TrainingReport};
use crate::types::{ActivityKind, BodyParams};

/// Summarize a daily-steps record using the default model configuration.
///
/// # Arguments
/// * `data` - Record in `<steps>,<duration>` form
/// * `weight` - Body weight (kg)
/// * `height` - Body height (m)
///
/// # Returns
/// Multi-line report with step count, distance and calories
///
/// # Example
/// ```
/// let report = step_calories::day_action_info("4000,1h0m", 70.0, 1.75)?;
/// assert!(report.starts_with("Количество шагов: 4000."));
/// # Ok::<(), step_calories::ComputeError>(())
/// ```
pub fn day_action_info(data: &str, weight: f64, height: f64) -> Result<String, ComputeError> {
    StepsProcessor::new().day_action_info(data, &BodyParams::new(weight, height))
}

/// Summarize a training record using the default model configuration.
///
/// # Arguments
/// * `data` - Record in `<steps>,<activity>,<duration>` form
/// * `weight` - Body weight (kg)
/// * `height` - Body height (m)
///
/// # Returns
/// Multi-line report with activity, duration, distance, speed and calories
///
/// # Example
/// ```
/// let report = step_calories::training_info("3456,Ходьба,3h00m", 75.0, 1.75)?;
/// assert!(report.starts_with("Тип тренировки: Ходьба"));
/// # Ok::<(), step_calories::ComputeError>(())
/// ```
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String, ComputeError> {
    StepsProcessor::new().training_info(data, &BodyParams::new(weight, height))
}

/// Processor bound to one calorie model configuration.
///
/// Immutable after construction; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct StepsProcessor {
    model: CalorieModel,
}

impl StepsProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: ModelConfig) -> Result<Self, ComputeError> {
        Ok(Self {
            model: CalorieModel::new(config)?,
        })
    }

    pub fn model(&self) -> &CalorieModel {
        &self.model
    }

    /// Daily-steps records are always treated as walking
    pub fn day_report(&self, data: &str, body: &BodyParams) -> Result<DayReport, ComputeError> {
        let record = RecordParser::parse_day_steps(data)?;
        let result = self.model.compute(
            record.steps(),
            ActivityKind::Walking,
            &record.duration(),
            body,
        )?;
        Ok(DayReport::new(record.steps(), &result))
    }

    pub fn training_report(
        &self,
        data: &str,
        body: &BodyParams,
    ) -> Result<TrainingReport, ComputeError> {
        let record = RecordParser::parse_training(data)?;
        let kind = record
            .kind()
            .ok_or_else(|| ValidationError::UnknownActivity(record.label().to_string()))?;

        let duration = record.duration();
        let result = self.model.compute(record.steps(), kind, &duration, body)?;
        Ok(TrainingReport::new(
            record.label(),
            record.steps(),
            hours(&duration),
            &result,
        ))
    }

    pub fn day_action_info(&self, data: &str, body: &BodyParams) -> Result<String, ComputeError> {
        Ok(self.day_report(data, body)?.to_string())
    }

    pub fn training_info(&self, data: &str, body: &BodyParams) -> Result<String, ComputeError> {
        Ok(self.training_report(data, body)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepLengthPolicy;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_day_action_info() {
        let report = day_action_info("4000,1h0m", 70.0, 1.75).unwrap();
        assert_eq!(
            report,
            "Количество шагов: 4000.\nДистанция составила 3.15 км.\nВы сожгли 110.25 ккал."
        );
    }

    #[test]
    fn test_training_info_walking() {
        let report = training_info("3456,Ходьба,3h0m", 75.0, 1.75).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Ходьба\nДлительность: 3.00 ч.\nДистанция: 2.72 км.\nСкорость: 0.91 км/ч\nСожгли калорий: 102.06"
        );
    }

    #[test]
    fn test_walking_is_half_of_running() {
        let processor = StepsProcessor::new();
        let body = BodyParams::new(75.0, 1.75);

        let walking = processor.training_report("3456,Ходьба,3h0m", &body).unwrap();
        let running = processor.training_report("3456,running,3h0m", &body).unwrap();

        assert_eq!(walking.distance_km, running.distance_km);
        assert!((walking.calories * 2.0 - running.calories).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_activity() {
        let err = training_info("5,sprinting,1h0m", 70.0, 1.75).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ValidationError(ValidationError::UnknownActivity(ref label)) if label == "sprinting"
        ));
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let err = day_action_info("", 70.0, 1.75).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = day_action_info("-5,1h0m", 70.0, 1.75).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = training_info("5,Ходьба,0h0m", 70.0, 1.75).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = training_info("5,running,soon", 70.0, 1.75).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = day_action_info("4000,1h", 0.0, 1.75).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ValidationError(ValidationError::NonPositiveWeight(_))
        ));
    }

    #[test]
    fn test_degenerate_calories_are_errors() {
        let err = training_info("1000000,running,1h", 1e308, 1.75).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ValidationError(ValidationError::NonPositiveCalories(_))
        ));

        let err = training_info("1,walking,1h", f64::from_bits(1), 1.75).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::ValidationError(ValidationError::NonPositiveCalories(_))
        ));

        let err = day_action_info("1,1h", f64::from_bits(1), 1.75).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = training_info("3456,running,1h0m", 75.0, 1.75).unwrap();
        let second = training_info("3456,running,1h0m", 75.0, 1.75).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_config() {
        let config = ModelConfig {
            step_length: StepLengthPolicy::fixed_default(),
            ..Default::default()
        };
        let processor = StepsProcessor::with_config(config).unwrap();
        let report = processor
            .day_report("4000,1h0m", &BodyParams::new(70.0, 1.75))
            .unwrap();

        // 4000 × 0.65 m = 2.6 km
        assert!((report.distance_km - 2.6).abs() < 1e-9);
        assert!((report.calories - 70.0 * 2.6 * 0.5).abs() < 1e-9);
    }
}
