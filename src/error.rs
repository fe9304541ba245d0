//! Error and result types shared across the crate.

use thiserror::Error;

/// Anything that can go wrong outside the game rules themselves.
///
/// The model never fails -- it's a pure state machine. Errors come from the
/// world around it: the terminal, the input stream, the file the text was
/// loaded from. An `Err` out of a game session means "no verdict", which the
/// caller must keep distinct from losing.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input source closed or died before the game reached a verdict.
    #[error("input stream closed before the game finished")]
    InputClosed,
    /// The session was torn down without ever resolving win or loss.
    #[error("game aborted without a result")]
    Aborted,
    /// Plumbing failures from the terminal or the filesystem.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
