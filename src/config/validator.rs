use thiserror::Error;

use crate::config::{DatasetSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_dataset(&settings.dataset) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_dataset(dataset: &DatasetSettings) -> Result<(), Vec<ValidationError>> {
        match &dataset.path {
            Some(path) if !path.is_file() => Err(vec![ValidationError::InvalidValue {
                field: "dataset.path".to_string(),
                reason: format!("'{}' is not a readable file", path.display()),
            }]),
            _ => Ok(()),
        }
    }
}
