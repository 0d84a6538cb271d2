//! Engine error type
//!
//! Every failure belongs to one of two kinds: the caller passed a bad
//! argument, or the engine is in a state where the call is not allowed.

use thiserror::Error;

/// Broad classification of an [`EngineError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter was out of range or repeated
    InvalidArgument,
    /// The engine's state does not permit the operation
    IllegalState,
}

/// The errors `CandidateEngine` can produce
///
/// No variant is produced after state has been mutated: a failed call
/// leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested word length was zero.
    #[error("word length must be at least 1")]
    ZeroLength,

    /// The initial guess budget was negative.
    #[error("guess budget must not be negative, got {0}")]
    NegativeBudget(i32),

    /// The letter was already submitted in an earlier guess.
    #[error("the letter '{0}' has already been guessed")]
    AlreadyGuessed(char),

    /// The guess budget is exhausted.
    #[error("no guesses remain")]
    OutOfGuesses,

    /// No dictionary word is consistent with the game so far.
    #[error("no candidate words remain")]
    NoCandidates,
}

impl EngineError {
    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroLength | Self::NegativeBudget(_) | Self::AlreadyGuessed(_) => {
                ErrorKind::InvalidArgument
            }
            Self::OutOfGuesses | Self::NoCandidates => ErrorKind::IllegalState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors() {
        for err in [
            EngineError::ZeroLength,
            EngineError::NegativeBudget(-1),
            EngineError::AlreadyGuessed('e'),
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{err}");
        }
    }

    #[test]
    fn state_errors() {
        assert_eq!(EngineError::OutOfGuesses.kind(), ErrorKind::IllegalState);
        assert_eq!(EngineError::NoCandidates.kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn messages() {
        assert_eq!(
            EngineError::AlreadyGuessed('q').to_string(),
            "the letter 'q' has already been guessed"
        );
        assert_eq!(
            EngineError::NegativeBudget(-3).to_string(),
            "guess budget must not be negative, got -3"
        );
    }
}
