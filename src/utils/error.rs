use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Validation error on {field} = {value}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity} {id} not found")]
    NotFoundError { entity: &'static str, id: i64 },

    #[error("Foreign key violation ({constraint}): no row with id {value}")]
    ForeignKeyError { constraint: String, value: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Integrity,
    Storage,
    Configuration,
}

impl ModelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::ValidationError { .. } => ErrorCategory::Validation,
            ModelError::NotFoundError { .. } => ErrorCategory::NotFound,
            ModelError::ForeignKeyError { .. } => ErrorCategory::Integrity,
            ModelError::IoError(_)
            | ModelError::SerializationError(_)
            | ModelError::StorageError { .. } => ErrorCategory::Storage,
            ModelError::TomlError(_) | ModelError::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub(crate) fn storage(message: impl Into<String>) -> Self {
        ModelError::StorageError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = ModelError::ValidationError {
            field: "price".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 30".to_string(),
        };
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error on price = 0: Value must be between 1 and 30"
        );

        let err = ModelError::ForeignKeyError {
            constraint: "fk_restaurant_pizzas_pizza_id_pizzas".to_string(),
            value: 9,
        };
        assert_eq!(err.category(), ErrorCategory::Integrity);
        assert_eq!(ModelError::storage("poisoned").category(), ErrorCategory::Storage);
    }
}
