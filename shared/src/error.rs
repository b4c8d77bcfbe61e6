use std::fmt;

use validator::{ValidationError, ValidationErrors};

#[derive(Debug)]
pub enum WheelError {
    Validation(String),
    Storage(String),
    Serialization(String),
    Service(String),
    NotFound(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            WheelError::Storage(msg) => write!(f, "Storage error: {}", msg),
            WheelError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            WheelError::Service(msg) => write!(f, "Service error: {}", msg),
            WheelError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<ValidationError> for WheelError {
    fn from(err: ValidationError) -> Self {
        let msg = err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| err.code.to_string());
        WheelError::Validation(msg)
    }
}

impl From<ValidationErrors> for WheelError {
    fn from(errs: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errs
            .field_errors()
            .into_iter()
            .map(|(field, list)| {
                let codes: Vec<String> = list.iter().map(|e| e.code.to_string()).collect();
                format!("{} ({})", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        WheelError::Validation(fields.join("; "))
    }
}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        WheelError::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for WheelError {
    fn from(err: base64::DecodeError) -> Self {
        WheelError::Serialization(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for WheelError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        WheelError::Serialization(err.to_string())
    }
}
