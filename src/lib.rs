//! Lavarun is a small typing game for your terminal: the floor crumbles
//! behind you, one cell per timer tick or typo, and the only way forward is
//! to type the text faster than the lava eats the ground.
//!
//! Architecturally there are three layers:
//!
//! - [`game`], the engine: a [`GameModel`](game::GameModel) state machine
//!   fed by two concurrently-scheduled actors (keyboard and timer) under a
//!   [`GameController`](game::GameController). The actors race to resolve a
//!   one-shot [`Completion`](game::Completion) signal, which is how exactly
//!   one verdict ever comes out of a session.
//! - The collaborator traits at the seams: [`view::GameView`] for everything
//!   drawn, [`input::Input`] for "give me the next keystroke". The engine
//!   only ever talks to these, so it runs headless just as happily.
//! - The terminal implementations of both, plus the [`frontend`] that wires
//!   a whole session together for the binary.

pub mod error;
pub mod frontend;
pub mod game;
pub mod input;
pub mod params;
pub mod view;

pub use error::{GameError, Result};
