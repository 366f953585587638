use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonsError {
    #[error("Null reference: {message}")]
    NullReference { message: String },

    #[error("Illegal argument: {message}")]
    IllegalArgument { message: String },

    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    #[error("Runtime error: {message}")]
    Runtime { message: String },

    #[error("Type mismatch: value is not a {expected}")]
    TypeMismatch { expected: &'static str },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Reference,
    Argument,
    State,
    Runtime,
    Type,
    Config,
}

impl CommonsError {
    pub fn null_reference(message: impl Into<String>) -> Self {
        Self::NullReference {
            message: message.into(),
        }
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The caller-supplied message, without the category prefix.
    pub fn message(&self) -> String {
        match self {
            Self::NullReference { message }
            | Self::IllegalArgument { message }
            | Self::IllegalState { message }
            | Self::Runtime { message }
            | Self::Config { message } => message.clone(),
            Self::TypeMismatch { expected } => format!("value is not a {}", expected),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NullReference { .. } => ErrorCategory::Reference,
            Self::IllegalArgument { .. } => ErrorCategory::Argument,
            Self::IllegalState { .. } => ErrorCategory::State,
            Self::Runtime { .. } => ErrorCategory::Runtime,
            Self::TypeMismatch { .. } => ErrorCategory::Type,
            Self::Config { .. } => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommonsError>;
