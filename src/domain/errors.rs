/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Bad or missing user input. Handled locally, never reaches the network.
    Validation(String),
    /// Request could not be sent, came back non-2xx, or decoded into garbage.
    Network(String),
    /// A static side resource (ticker catalog) failed to load.
    ResourceLoad(String),
    /// Canvas / drawing failure.
    Rendering(String),
}

impl AppError {
    /// Message suitable for a user-facing notice.
    pub fn user_notice(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Network(msg) => msg,
            AppError::ResourceLoad(msg) => msg,
            AppError::Rendering(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::ResourceLoad(msg) => write!(f, "Resource Load Error: {}", msg),
            AppError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderResult<T> = Result<T, AppError>;
