//! Drives a [`GameModel`] with two concurrent actors until one of them
//! resolves the verdict.
//!
//! The input actor awaits keystrokes; the timer actor wakes on a fixed
//! period. Each actor's step is: await its event, lock the model, bail out
//! if the game already ended, apply its transition, and resolve the
//! [`Completion`] if that transition just ended the game. The lock is never
//! held across an await, so exactly one actor mutates the model at a time
//! and nothing touches it after the result is set.
//!
//! No ordering is promised between the two actors. If a tick and the final
//! correct keystroke are both pending, whichever task runs first decides the
//! game -- the model's rules (win precedence, `tracer` can never pass
//! `player`) keep either outcome consistent, and the loser of the race hits
//! the bail-out check and exits quietly.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::error::Result;
use crate::input::Input;
use crate::params::TIMER_PERIOD;
use crate::view::GameView;
use super::signal::Completion;
use super::GameModel;

/// Runs one game session to its verdict.
pub struct GameController<V, I> {
    model: GameModel<V>,
    input: I,
    period: Duration,
}

impl<V, I> GameController<V, I>
where
    V: GameView + Send + 'static,
    I: Input + 'static,
{
    pub fn new(model: GameModel<V>, input: I) -> Self {
        GameController {
            model,
            input,
            period: TIMER_PERIOD,
        }
    }

    /// Override how often the floor crumbles on its own.
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Run the game: `Ok(true)` win, `Ok(false)` loss, `Err` if the input
    /// source died before a verdict.
    ///
    /// Resumes exactly once, and no actor outlives the call: once the
    /// verdict is in, the still-pending actor (usually a sleeping timer or
    /// a key wait that will never finish) is aborted and reaped.
    pub async fn run(self) -> Result<bool> {
        let GameController {
            mut model,
            input,
            period,
        } = self;

        model.start();
        if let Some(win) = model.result().outcome() {
            // degenerate game (empty text): resolved before any event
            return Ok(win);
        }

        let model = Arc::new(Mutex::new(model));
        let (completion, waiter) = Completion::channel();

        debug!(?period, "game running");
        let keys = tokio::spawn(input_actor(
            Arc::clone(&model),
            input,
            completion.clone(),
        ));
        let ticks = tokio::spawn(timer_actor(model, period, completion));

        let verdict = waiter.wait().await;
        debug!(?verdict, "game over");

        keys.abort();
        ticks.abort();
        // reap both so nothing (including the input source's reader) is
        // still alive when we hand the terminal back
        let _ = keys.await;
        let _ = ticks.await;

        verdict
    }
}

async fn input_actor<V, I>(model: Arc<Mutex<GameModel<V>>>, mut input: I, completion: Completion)
where
    V: GameView,
    I: Input,
{
    loop {
        let key = match input.next_key().await {
            Ok(key) => key,
            Err(err) => {
                debug!(%err, "input source closed");
                completion.resolve(Err(err));
                return;
            }
        };
        let mut model = model.lock().expect("game model lock poisoned");
        if model.result().is_set() {
            return;
        }
        model.player_move(key);
        if let Some(win) = model.result().outcome() {
            completion.resolve(Ok(win));
            return;
        }
    }
}

async fn timer_actor<V>(model: Arc<Mutex<GameModel<V>>>, period: Duration, completion: Completion)
where
    V: GameView,
{
    let mut ticks = time::interval(period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // an interval's first tick completes immediately; the floor shouldn't
    ticks.tick().await;
    loop {
        ticks.tick().await;
        let mut model = model.lock().expect("game model lock poisoned");
        if model.result().is_set() {
            return;
        }
        model.timer_fired();
        if let Some(win) = model.result().outcome() {
            completion.resolve(Ok(win));
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::GameError;
    use crate::input::test::{ScriptedKeys, Silent, TimedKeys};
    use crate::params::PLAYER_INIT_OFFSET;
    use crate::view::test::{count, RecordingView, ViewEvent};

    const TEXT: &str = "TEXT";
    /// Long enough that the timer never interferes with input-driven tests.
    const SLOW: Duration = Duration::from_secs(3600);

    fn controller<I: Input + 'static>(
        text: &str,
        input: I,
    ) -> (GameController<RecordingView, I>, crate::view::test::ViewLog) {
        let (view, log) = RecordingView::new();
        let model = GameModel::new(view, text);
        (GameController::new(model, input), log)
    }

    #[tokio::test]
    async fn typing_the_text_wins() {
        let (controller, log) = controller(TEXT, ScriptedKeys::of(TEXT));
        let verdict = controller.period(SLOW).run().await;

        assert!(matches!(verdict, Ok(true)));
        assert_eq!(count(&log, |e| *e == ViewEvent::Win), 1);
        assert_eq!(count(&log, |e| *e == ViewEvent::Death), 0);
    }

    #[tokio::test]
    async fn wrong_keys_lose() {
        let script: String = "\0".repeat(PLAYER_INIT_OFFSET as usize);
        let (controller, log) = controller(TEXT, ScriptedKeys::of(&script));
        let verdict = controller.period(SLOW).run().await;

        assert!(matches!(verdict, Ok(false)));
        assert_eq!(count(&log, |e| *e == ViewEvent::Death), 1);
        assert_eq!(count(&log, |e| *e == ViewEvent::MovePlayer), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn silent_player_loses_to_the_timer() {
        let (controller, log) = controller(TEXT, Silent);
        let verdict = controller.run().await;

        assert!(matches!(verdict, Ok(false)));
        assert_eq!(
            count(&log, |e| *e == ViewEvent::DropFloor),
            PLAYER_INIT_OFFSET as usize
        );
        assert_eq!(count(&log, |e| *e == ViewEvent::Death), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn steady_typist_beats_the_timer() {
        // a key every 100ms against a 250ms timer: the text is done long
        // before the collapse covers its head start
        let input = TimedKeys::of(TEXT, Duration::from_millis(100));
        let (controller, log) = controller(TEXT, input);
        let verdict = controller.period(Duration::from_millis(250)).run().await;

        assert!(matches!(verdict, Ok(true)));
        assert_eq!(count(&log, |e| *e == ViewEvent::Win), 1);
    }

    #[tokio::test]
    async fn input_running_dry_aborts() {
        let (controller, log) = controller(TEXT, ScriptedKeys::of("TE"));
        let verdict = controller.period(SLOW).run().await;

        assert!(matches!(verdict, Err(GameError::InputClosed)));
        // no terminal screen was ever shown
        assert_eq!(count(&log, |e| *e == ViewEvent::Win), 0);
        assert_eq!(count(&log, |e| *e == ViewEvent::Death), 0);
    }

    #[tokio::test]
    async fn empty_text_wins_without_reading_input() {
        let (controller, log) = controller("", ScriptedKeys::of(""));
        let verdict = controller.period(SLOW).run().await;

        assert!(matches!(verdict, Ok(true)));
        assert_eq!(count(&log, |e| *e == ViewEvent::Win), 1);
    }
}
