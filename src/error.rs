//! Error types for the DNA lab.
//!
//! The prompt-transformation core is total over its input domain; the only
//! core failure is an empty trope list handed to the blueprint generator or
//! the remix engine. The remaining variants belong to the lab session,
//! configuration loading and the random source guard.

use thiserror::Error;

/// Errors produced by the DNA lab.
#[derive(Debug, Error)]
pub enum DnaError {
    /// A caller broke an operation precondition (e.g. an empty trope list).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Segmentation of a loaded source found no prompts.
    #[error(
        "Could not find any prompts in that source. \
         Make sure prompts are separated by new lines or bullet points."
    )]
    NoPromptsFound,

    /// A generation was requested while the prompt catalogue is empty.
    #[error("The prompt catalogue is empty; load a source or keep the sample prompts to remix.")]
    EmptyCatalogue,

    /// The random source kept repeating the signature trope.
    #[error("Random source produced the same trope {attempts} times in a row")]
    RandomSourceStalled { attempts: usize },

    /// Invalid lab configuration.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// I/O failure while reading a configuration file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DnaError {
    /// Shorthand for [`DnaError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for [`DnaError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DnaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = DnaError::invalid_argument("trope list must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument: trope list must not be empty"
        );
    }

    #[test]
    fn test_json_error_is_transparent() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = parse_err.to_string();
        let err: DnaError = parse_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
