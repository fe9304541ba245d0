//! The game rules: one small state machine, two counters racing each other.
//!
//! [`GameModel`] owns the text and two cursors. `player` is the index of the
//! next character to type; `tracer` is how far the floor collapse has come,
//! starting [`PLAYER_INIT_OFFSET`](crate::params::PLAYER_INIT_OFFSET) steps
//! below zero so the player gets a grace window. A correct keystroke moves
//! `player`, a wrong keystroke or a timer tick moves `tracer`, and the game
//! ends the moment `player` reaches the end of the text (win) or `tracer`
//! catches `player` (loss).
//!
//! The model is synchronous and infallible; all the concurrency lives in
//! [`controller`], and everything visual goes through the
//! [`GameView`](crate::view::GameView) the model was built with.

pub mod controller;
pub mod signal;

pub use controller::GameController;
pub use signal::{Completion, Verdict, Waiter};

use crate::params::{PLAYER_INIT_OFFSET, WRONG_KEY_MSG};
use crate::view::GameView;

/// Where a game stands. Set exactly once, then final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Pending,
    Won,
    Lost,
}

impl GameResult {
    /// Whether the game has concluded either way.
    pub fn is_set(&self) -> bool {
        !matches!(self, GameResult::Pending)
    }

    /// The verdict as the controller reports it, if there is one yet:
    /// `true` for a win, `false` for a loss.
    pub fn outcome(&self) -> Option<bool> {
        match self {
            GameResult::Pending => None,
            GameResult::Won => Some(true),
            GameResult::Lost => Some(false),
        }
    }
}

/// The typing-game state machine.
///
/// Driven exclusively through [`Self::start`], [`Self::player_move`] and
/// [`Self::timer_fired`]; every transition is a plain synchronous call, and
/// all three become no-ops once the result is set, so a late event after the
/// game ends can't double-count.
pub struct GameModel<V> {
    view: V,
    text: Vec<char>,
    player: usize,
    tracer: i64,
    /// How far (in text indices) the currently-rendered window extends.
    border: usize,
    result: GameResult,
}

impl<V: GameView> GameModel<V> {
    /// Build the model and show the banner screen.
    pub fn new(mut view: V, text: &str) -> Self {
        view.init_screen();
        GameModel {
            view,
            text: text.chars().collect(),
            player: 0,
            tracer: -PLAYER_INIT_OFFSET,
            border: 0,
            result: GameResult::Pending,
        }
    }

    /// Push the first window of text to the display. Call once, before any
    /// transition.
    ///
    /// An empty text is an instant win: there is nothing to type, so the
    /// game resolves before any keystroke is ever required.
    pub fn start(&mut self) {
        if self.result.is_set() {
            return;
        }
        if self.text.is_empty() {
            self.result = GameResult::Won;
            self.view.win_screen();
        } else {
            self.push_window(0);
        }
        self.view.refresh();
    }

    /// Process one keystroke.
    ///
    /// A match advances the player and wins the game if that was the last
    /// character -- reaching the end takes precedence over any loss that
    /// would otherwise trigger on the same event. A mismatch crumbles one
    /// cell of floor, which loses the game if the collapse catches up.
    pub fn player_move(&mut self, key: char) {
        if self.result.is_set() {
            return;
        }
        if key == self.text[self.player] {
            self.player += 1;
            self.view.print_message("");
            self.view.move_player();
            if self.player == self.text.len() {
                self.result = GameResult::Won;
                self.view.win_screen();
            } else if self.player == self.border {
                self.push_window(self.border);
            }
        } else {
            self.view.print_message(WRONG_KEY_MSG);
            self.crumble();
        }
        self.view.refresh();
    }

    /// The periodic tick: the floor crumbles whether or not anyone typed.
    pub fn timer_fired(&mut self) {
        if self.result.is_set() {
            return;
        }
        self.crumble();
        self.view.refresh();
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn player(&self) -> usize {
        self.player
    }

    pub fn tracer(&self) -> i64 {
        self.tracer
    }

    pub fn border(&self) -> usize {
        self.border
    }

    /// Advance the collapse one step and check whether it caught the player.
    fn crumble(&mut self) {
        self.tracer += 1;
        self.view.drop_floor();
        if self.tracer == self.player as i64 {
            self.result = GameResult::Lost;
            self.view.death_screen();
        }
    }

    /// Hand the text from `from` onward to the view and record how far the
    /// rendered window now reaches.
    fn push_window(&mut self, from: usize) {
        let window: String = self.text[from..].iter().collect();
        let shown = self.view.game_screen(&window);
        self.border = (from + shown).min(self.text.len());
    }
}
