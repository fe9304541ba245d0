//! The real-terminal frontend.
//!
//! Owns the terminal lifecycle (raw mode, alternate screen, restoring both
//! even on panic), shows the banner until a key is pressed, drives the game
//! on a current-thread tokio runtime, and keeps the final screen up until
//! the player quits.

use std::io;

use crossterm::{
    cursor::{Hide, Show},
    event::{self as ct, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use crate::error::{GameError, Result};
use crate::game::{GameController, GameModel};
use crate::input::term::TermInput;
use crate::params;
use crate::view::term::TermView;
use super::Frontend;

/// Raw mode + alternate screen, restored on drop and from the panic hook so
/// a crash doesn't leave the shell unusable.
struct TermGuard;

impl TermGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = Self::restore();
            default_hook(info);
        }));
        Ok(TermGuard)
    }

    fn restore() -> io::Result<()> {
        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        // the panic hook may have beaten us to it; restoring twice is
        // harmless
        let _ = Self::restore();
    }
}

/// Read one key press, blocking. Only used outside the game proper, when
/// the async input pipeline isn't running.
fn next_press() -> Result<KeyCode> {
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = ct::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Err(GameError::InputClosed);
        }
        return Ok(code);
    }
}

/// [`Frontend`] for an interactive terminal.
pub struct TermFrontend;

impl Frontend for TermFrontend {
    fn run(&mut self, text: &str) -> Result<bool> {
        let _guard = TermGuard::enter()?;

        // the model draws the banner screen as soon as it exists
        let model = GameModel::new(TermView::new(), text);
        let _ = next_press()?;
        info!("game starting");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let verdict = runtime.block_on(async {
            let controller = GameController::new(model, TermInput::spawn());
            controller.run().await
        });
        debug!(?verdict, "session finished");

        if verdict.is_ok() {
            // leave the win/death screen up until the player is done with it
            while next_press()? != KeyCode::Char(params::QUIT_KEY) {}
        }
        verdict
    }
}
