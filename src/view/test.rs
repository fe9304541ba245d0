//! A [`GameView`] that just writes down everything it's told, for tests and
//! headless runs.

use std::sync::{Arc, Mutex};

use super::GameView;

/// One notification as seen by a [`RecordingView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Init,
    GameScreen(String),
    MovePlayer,
    DropFloor,
    Message(String),
    Win,
    Death,
    Refresh,
}

/// Shared handle to a [`RecordingView`]'s event log. Keep a clone around to
/// assert on after the view has been moved into a model.
pub type ViewLog = Arc<Mutex<Vec<ViewEvent>>>;

/// Test/headless implementation of [`GameView`].
pub struct RecordingView {
    log: ViewLog,
    window: usize,
}

impl RecordingView {
    /// A view with an effectively unlimited screen.
    pub fn new() -> (Self, ViewLog) {
        Self::windowed(usize::MAX)
    }

    /// A view that only ever fits `window` characters, so scrolling can be
    /// exercised without a real terminal.
    pub fn windowed(window: usize) -> (Self, ViewLog) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            RecordingView {
                log: Arc::clone(&log),
                window,
            },
            log,
        )
    }

    fn push(&self, event: ViewEvent) {
        self.log.lock().expect("view log poisoned").push(event);
    }
}

impl GameView for RecordingView {
    fn init_screen(&mut self) {
        self.push(ViewEvent::Init);
    }

    fn game_screen(&mut self, text: &str) -> usize {
        self.push(ViewEvent::GameScreen(text.to_string()));
        text.chars().count().min(self.window)
    }

    fn move_player(&mut self) {
        self.push(ViewEvent::MovePlayer);
    }

    fn drop_floor(&mut self) {
        self.push(ViewEvent::DropFloor);
    }

    fn print_message(&mut self, msg: &str) {
        self.push(ViewEvent::Message(msg.to_string()));
    }

    fn win_screen(&mut self) {
        self.push(ViewEvent::Win);
    }

    fn death_screen(&mut self) {
        self.push(ViewEvent::Death);
    }

    fn refresh(&mut self) {
        self.push(ViewEvent::Refresh);
    }
}

/// How many times `pred` matches in the log.
pub fn count(log: &ViewLog, pred: impl Fn(&ViewEvent) -> bool) -> usize {
    log.lock()
        .expect("view log poisoned")
        .iter()
        .filter(|event| pred(event))
        .count()
}
