//! Configuration validation
//!
//! Rules:
//! - remote token and channel are non-empty
//! - remote api_url, when given, is a URL

use contracts::{ContractError, LoggerConfig};
use validator::{Validate, ValidationErrors};

/// Validate a LoggerConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &LoggerConfig) -> Result<(), ContractError> {
    config.validate().map_err(|e| first_error("", &e))
}

/// Flatten the validator error tree into the first failing field
fn first_error(prefix: &str, errors: &ValidationErrors) -> ContractError {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let message = list
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "invalid value".to_string());
                return ContractError::config_validation(path, message);
            }
            ValidationErrorsKind::Struct(nested) => return first_error(&path, nested),
            ValidationErrorsKind::List(items) => {
                if let Some((idx, nested)) = items.iter().next() {
                    return first_error(&format!("{path}[{idx}]"), nested);
                }
            }
        }
    }
    ContractError::config_validation(prefix, "invalid configuration")
}
