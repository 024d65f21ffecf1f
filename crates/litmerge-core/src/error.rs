use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in litmerge-core.
#[derive(Debug, Error)]
pub enum LitmergeError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Malformed input file {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InputMissing = 2,
    InvalidArgs = 3,
    FileSystemError = 4,
}

impl LitmergeError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InputNotFound(_) => ExitCode::InputMissing,
            Self::ConfigError(_) | Self::TomlParse(_) => ExitCode::InvalidArgs,
            Self::Io(_) => ExitCode::FileSystemError,
            Self::MalformedInput { .. } | Self::Json(_) | Self::TomlSerialize(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LitmergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = LitmergeError::InputNotFound(PathBuf::from("data/google_books.json"));
        assert_eq!(missing.exit_code(), ExitCode::InputMissing);
        assert_eq!(missing.exit_code() as i32, 2);
        assert!(missing.to_string().contains("google_books.json"));

        let config = LitmergeError::ConfigError("bad".to_string());
        assert_eq!(config.exit_code() as i32, 3);

        let io = LitmergeError::from(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), ExitCode::FileSystemError);
    }
}
