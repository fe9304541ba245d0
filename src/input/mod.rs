//! Where keystrokes come from.

pub mod term;
pub mod test;

use async_trait::async_trait;

use crate::error::Result;

/// A source of keystrokes.
///
/// `next_key` is the whole interface: suspend until the user presses
/// something, then hand it over, one character at a time. No chords, no
/// modifier semantics, no upper bound on how long a key can take. The wait
/// must be cancel-safe -- the controller abandons a pending one when the
/// timer ends the game first.
#[async_trait]
pub trait Input: Send {
    /// Wait for the next keystroke.
    ///
    /// An `Err` means the source is gone for good (stream closed, terminal
    /// died): the game can't continue, and the session reports an abort
    /// rather than a loss.
    async fn next_key(&mut self) -> Result<char>;
}
