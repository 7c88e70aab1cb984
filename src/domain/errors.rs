/// Unified application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Caller passed data the operation cannot work with.
    InvalidArgument(String),
    /// Transport, status or decode failure while talking to the asset endpoint.
    Network(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type DomainResult<T> = Result<T, AppError>;
