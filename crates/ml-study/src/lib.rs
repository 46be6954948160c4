//! ml-study: study file format, validation and execution.
//!
//! A study names a stage geometry, a gas, and a list of cases. Each case is
//! a sweep grid over speed, mass flow, slip factor and efficiency.

pub mod compile;
pub mod run;
pub mod schema;
pub mod validate;

pub use run::{CaseOutput, RunOptions, run_case, run_study, write_outputs};
pub use schema::*;
pub use validate::{ValidationError, validate_study};

pub const LATEST_VERSION: u32 = 1;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ml_model::ModelError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] ml_sweep::SweepError),

    #[error("Results error: {0}")]
    Results(#[from] ml_results::ResultsError),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_yaml::from_str(&content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn save_yaml(path: &std::path::Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}
