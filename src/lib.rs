//! step-calories - Step, distance and calorie calculations
//!
//! Turns comma-delimited activity records into human-readable summaries
//! through a deterministic pipeline: record parsing → validation → calorie
//! model → report rendering.
//!
//! ## Records
//!
//! - **Daily steps**: `<steps>,<duration>`, e.g. `4000,1h30m`
//! - **Training**: `<steps>,<activity>,<duration>`, e.g. `3456,Ходьба,3h00m`

pub mod config;
pub mod duration;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::{ActivityCoefficients, ModelConfig, StepLengthPolicy};
pub use error::{ComputeError, ErrorKind, ValidationError};
pub use model::CalorieModel;
pub use parser::RecordParser;
pub use pipeline::{day_action_info, training_info, StepsProcessor};
pub use report::{DayReport, TrainingReport};
pub use types::{ActivityKind, ActivityRecord, BodyParams, CalorieResult, DayStepsRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
