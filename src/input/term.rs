//! Keystrokes from a real terminal, via crossterm.
//!
//! crossterm's event read blocks, so it lives on its own blocking task and
//! feeds an unbounded channel that the async side receives from. A oneshot
//! stop channel plus a drain-on-drop makes sure the reader never outlives
//! whoever spawned it.

use std::mem;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{self as ct, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::{mpsc, oneshot};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::error::{GameError, Result};
use super::Input;

/// How long each poll blocks before re-checking the stop channel.
const POLL_PERIOD: Duration = Duration::from_millis(100);

fn read_keys(keys: mpsc::UnboundedSender<Result<char>>, mut stop: oneshot::Receiver<()>) {
    loop {
        match stop.try_recv() {
            Err(oneshot::error::TryRecvError::Empty) => (),
            _ => return,
        }
        match ct::poll(POLL_PERIOD) {
            Ok(false) => continue,
            Ok(true) => (),
            Err(err) => {
                let _ = keys.send(Err(err.into()));
                return;
            }
        }
        let event = match ct::read() {
            Ok(event) => event,
            Err(err) => {
                let _ = keys.send(Err(err.into()));
                return;
            }
        };
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            // raw mode swallows the signal, so ^C arrives as a plain key;
            // treat it as the stream closing instead of feeding it to the
            // game
            let _ = keys.send(Err(GameError::InputClosed));
            return;
        }
        let key = match code {
            KeyCode::Char(c) => c,
            // game texts are newline-flattened, so Enter can only ever mean
            // the space between two lines
            KeyCode::Enter => ' ',
            _ => continue,
        };
        if keys.send(Ok(key)).is_err() {
            return;
        }
    }
}

/// Terminal-backed [`Input`].
///
/// Expects the terminal to already be in raw mode (the frontend owns that
/// lifecycle); this only owns the reader task.
pub struct TermInput {
    keys: mpsc::UnboundedReceiver<Result<char>>,
    stop: Option<oneshot::Sender<()>>,
}

impl TermInput {
    /// Spawn the blocking reader and hook it up. Must be called from within
    /// a tokio runtime.
    pub fn spawn() -> Self {
        let (keys_tx, keys_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();
        spawn_blocking(move || read_keys(keys_tx, stop_rx));
        TermInput {
            keys: keys_rx,
            stop: Some(stop_tx),
        }
    }
}

#[async_trait]
impl Input for TermInput {
    async fn next_key(&mut self) -> Result<char> {
        self.keys.recv().await.unwrap_or(Err(GameError::InputClosed))
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let stop = mem::take(&mut self.stop).expect("TermInput dropped twice");
        // the reader may already be gone after an error; nothing to stop
        // then
        let _ = stop.send(());
        loop {
            match self.keys.try_recv() {
                Err(mpsc::error::TryRecvError::Disconnected) => break,
                // drain until the reader hangs up, so it can't outlive us
                // and steal events from whoever reads the terminal next
                _ => (),
            }
        }
        debug!("terminal input reader stopped");
    }
}
