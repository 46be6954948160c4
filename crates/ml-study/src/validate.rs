//! Study validation logic.

use crate::schema::Study;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} ({reason})")]
    InvalidValue { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Study has no cases")]
    NoCases,
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    study
        .geometry
        .to_geometry()
        .map_err(|e| ValidationError::InvalidValue {
            field: "geometry".to_string(),
            reason: e.to_string(),
        })?;

    study.gas.to_gas().map_err(|e| ValidationError::InvalidValue {
        field: "gas".to_string(),
        reason: e.to_string(),
    })?;

    study
        .output
        .writer()
        .map_err(|e| ValidationError::InvalidValue {
            field: "output.delimiter".to_string(),
            reason: e.to_string(),
        })?;

    if study.cases.is_empty() {
        return Err(ValidationError::NoCases);
    }

    let mut case_ids = HashSet::new();
    for case in &study.cases {
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        case.grid().map_err(|e| ValidationError::InvalidValue {
            field: format!("cases.{}", case.id),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}
