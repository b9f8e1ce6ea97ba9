use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("No field rule registered for '{id}'")]
    UnknownField { id: String },
}

impl FormError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::IoError(e) => format!("Could not read or write a file: {}", e),
            FormError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            FormError::ConfigValidationError { field, message } => {
                format!("The configuration could not be parsed ({}): {}", field, message)
            }
            FormError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            FormError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            FormError::UnknownField { id } => {
                format!("'{}' is not a known form field", id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::IoError(_) => "Check that the path exists and is readable",
            FormError::SerializationError(_) => "Re-run with --verbose and report the failing input",
            FormError::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            FormError::InvalidConfigValueError { .. } => "Fix the highlighted value and try again",
            FormError::MissingConfigError { .. } => "Add the missing field to the file",
            FormError::UnknownField { .. } => "Run `form-enhancer fields` to list the registered ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err: FormError = source.into();

        assert!(matches!(err, FormError::SerializationError(_)));
        assert!(err.user_friendly_message().starts_with("Could not produce JSON output"));
        assert!(err.recovery_suggestion().contains("--verbose"));
    }

    #[test]
    fn test_unknown_field_points_at_fields_command() {
        let err = FormError::UnknownField { id: "senha".to_string() };
        assert_eq!(err.user_friendly_message(), "'senha' is not a known form field");
        assert!(err.recovery_suggestion().contains("form-enhancer fields"));
    }
}
