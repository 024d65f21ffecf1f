use litmerge_core::{ExitCode, LitmergeError, SourceKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkageError {
    #[error(transparent)]
    Core(#[from] LitmergeError),

    #[error("{phase} phase failed")]
    Phase {
        phase: SourceKind,
        #[source]
        source: LitmergeError,
    },

    #[error("invalid threshold: {0}")]
    InvalidThreshold(f64),
}

impl LinkageError {
    pub fn phase(phase: SourceKind, source: LitmergeError) -> Self {
        Self::Phase { phase, source }
    }

    /// The core error underneath, if any.
    pub fn core(&self) -> Option<&LitmergeError> {
        match self {
            Self::Core(err) | Self::Phase { source: err, .. } => Some(err),
            Self::InvalidThreshold(_) => None,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.core()
            .map_or(ExitCode::InvalidArgs, LitmergeError::exit_code)
    }
}

pub type Result<T> = std::result::Result<T, LinkageError>;
