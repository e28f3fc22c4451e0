pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Failure while handing a click to a collector. Never reaches the UI.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("failed to serialize click event")]
    Serialize(#[from] serde_json::Error),
    #[error("collector {collector} rejected click: {reason}")]
    Rejected {
        collector: &'static str,
        reason: String,
    },
}

impl DispatchError {
    pub fn rejected(collector: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            collector,
            reason: reason.into(),
        }
    }
}
