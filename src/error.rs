use login_view::LoginViewError;
use std::fmt;

/// Central error types for the login app
#[derive(Debug)]
pub enum AppError {
    /// Filesystem error (config file)
    Filesystem(std::io::Error),
    /// Config file is not valid TOML or has unknown values
    Config(toml::de::Error),
    /// Provider setup rejected by the login view
    Provider(LoginViewError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(e) => write!(f, "Config error: {}", e),
            AppError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<LoginViewError> for AppError {
    fn from(e: LoginViewError) -> Self {
        AppError::Provider(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Filesystem(_) => "The login configuration could not be read.".to_string(),
            AppError::Config(_) => "The login configuration is invalid.".to_string(),
            AppError::Provider(e) => e.to_string(),
        }
    }
}
