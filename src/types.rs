//! Core types for step-calories
//!
//! This module defines the data structures that flow through each stage of the
//! computation: parsed records, caller-supplied body parameters, and derived
//! calorie results.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Activity performed during a training record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
}

/// Accepted labels (already case-folded) for each activity kind
const ACTIVITY_LABELS: &[(&str, ActivityKind)] = &[
    ("walking", ActivityKind::Walking),
    ("ходьба", ActivityKind::Walking),
    ("running", ActivityKind::Running),
    ("бег", ActivityKind::Running),
];

impl ActivityKind {
    /// Resolve a label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        let folded = label.trim().to_lowercase();
        ACTIVITY_LABELS
            .iter()
            .find(|(name, _)| *name == folded)
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "walking",
            ActivityKind::Running => "running",
        }
    }
}

/// A parsed `<steps>,<activity>,<duration>` training record
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    steps: u64,
    label: String,
    kind: Option<ActivityKind>,
    duration: Duration,
}

impl ActivityRecord {
    pub(crate) fn new(steps: u64, label: String, duration: Duration) -> Self {
        let kind = ActivityKind::from_label(&label);
        Self {
            steps,
            label,
            kind,
            duration,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Case-folded activity label as written in the record
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Recognized activity, or `None` if the label is not in the label table
    pub fn kind(&self) -> Option<ActivityKind> {
        self.kind
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// A parsed `<steps>,<duration>` daily-steps record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayStepsRecord {
    steps: u64,
    duration: Duration,
}

impl DayStepsRecord {
    pub(crate) fn new(steps: u64, duration: Duration) -> Self {
        Self { steps, duration }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Body parameters supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body height (m)
    pub height_m: f64,
}

impl BodyParams {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// Quantities derived from a validated record and body parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Step length used for the distance (m)
    pub step_length_m: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed over the whole duration (km/h)
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}
