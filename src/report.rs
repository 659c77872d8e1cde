//! Report rendering
//!
//! Reports have a fixed text layout (via `Display`) and a JSON form (via
//! serde) for machine consumers.

use std::fmt;

use serde::Serialize;

use crate::types::CalorieResult;

/// Summary of a daily-steps record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl DayReport {
    pub fn new(steps: u64, result: &CalorieResult) -> Self {
        Self {
            steps,
            distance_km: result.distance_km,
            calories: result.calories,
        }
    }
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            self.steps, self.distance_km, self.calories
        )
    }
}

/// Summary of a training record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Activity label as displayed, first letter capitalized
    pub activity: String,
    pub steps: u64,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl TrainingReport {
    pub fn new(label: &str, steps: u64, duration_hours: f64, result: &CalorieResult) -> Self {
        Self {
            activity: capitalize(label),
            steps,
            duration_hours,
            distance_km: result.distance_km,
            mean_speed_kmh: result.mean_speed_kmh,
            calories: result.calories,
        }
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
            self.activity,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_result() -> CalorieResult {
        CalorieResult {
            step_length_m: 0.7875,
            distance_km: 3.15,
            mean_speed_kmh: 3.15,
            calories: 110.25,
        }
    }

    #[test]
    fn test_day_report_layout() {
        let report = DayReport::new(4000, &sample_result());
        assert_eq!(
            report.to_string(),
            "Количество шагов: 4000.\nДистанция составила 3.15 км.\nВы сожгли 110.25 ккал."
        );
    }

    #[test]
    fn test_training_report_layout() {
        let report = TrainingReport::new("ходьба", 4000, 1.0, &sample_result());
        assert_eq!(
            report.to_string(),
            "Тип тренировки: Ходьба\nДлительность: 1.00 ч.\nДистанция: 3.15 км.\nСкорость: 3.15 км/ч\nСожгли калорий: 110.25"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("running"), "Running");
        assert_eq!(capitalize("бег"), "Бег");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = TrainingReport::new("running", 4000, 1.0, &sample_result());
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["activity"], "Running");
        assert_eq!(json["steps"], 4000);
        assert_eq!(json["calories"], 110.25);
    }
}
