use std::fmt;

/// Configuration errors raised while building a login view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginViewError {
    /// Provider name is empty or cannot be used as a class selector
    InvalidProviderName(String),
    /// Provider name registered more than once
    DuplicateProvider(String),
}

impl fmt::Display for LoginViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginViewError::InvalidProviderName(name) => {
                write!(f, "Invalid service provider name: {:?}", name)
            }
            LoginViewError::DuplicateProvider(name) => {
                write!(f, "Service provider registered twice: {}", name)
            }
        }
    }
}

impl std::error::Error for LoginViewError {}
