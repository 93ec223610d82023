use thiserror::Error;

use crate::domain::{MIN_VERTICES, ParseError};

/// Why a known command rejected its arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing argument, expected {expected}")]
    Missing { expected: &'static str },

    #[error("unexpected argument `{token}`, expected {expected}")]
    Unexpected {
        token: String,
        expected: &'static str,
    },

    #[error("vertex count must be at least {min}, got {0}", min = MIN_VERTICES)]
    VertexCount(usize),

    #[error("the polygon collection is empty")]
    EmptyCollection,

    #[error("invalid polygon argument: {0}")]
    Polygon(#[from] ParseError),
}

/// Outcome of a command line that produced no result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
}

impl CommandError {
    /// The single line written to the result sink in place of a reply
    pub fn diagnostic(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) => "<INVALID COMMAND>",
            CommandError::InvalidArgument(_) => "<INVALID ARGUMENT>",
        }
    }
}
