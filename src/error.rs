use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the fallible edges of the library
///
/// The utility functions themselves are total and never return this type.
/// Only configuration loading and text parsing of option values can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Error with context chain
    #[error("{message}")]
    WithContext {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    // Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            message: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code, looking through context wrappers
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config(_) => "E_CONFIG",
            Error::InvalidInput(_) => "E_INVALID_INPUT",
            Error::Io(_) => "E_IO",
            #[cfg(feature = "config")]
            Error::Toml(_) => "E_TOML",
            Error::WithContext { source, .. } => source.error_code(),
        }
    }
}
