//! Canned key sources for tests and automated replays.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{GameError, Result};
use super::Input;

/// Feeds out a fixed sequence of keys as fast as they're asked for, then
/// reports the stream closed.
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn of(keys: &str) -> Self {
        ScriptedKeys {
            keys: keys.chars().collect(),
        }
    }
}

#[async_trait]
impl Input for ScriptedKeys {
    async fn next_key(&mut self) -> Result<char> {
        self.keys.pop_front().ok_or(GameError::InputClosed)
    }
}

/// Feeds out keys with a fixed delay before each one, like a very steady
/// typist.
pub struct TimedKeys {
    keys: VecDeque<char>,
    delay: Duration,
}

impl TimedKeys {
    pub fn of(keys: &str, delay: Duration) -> Self {
        TimedKeys {
            keys: keys.chars().collect(),
            delay,
        }
    }
}

#[async_trait]
impl Input for TimedKeys {
    async fn next_key(&mut self) -> Result<char> {
        // sleep before popping so a cancelled wait doesn't eat a key
        tokio::time::sleep(self.delay).await;
        self.keys.pop_front().ok_or(GameError::InputClosed)
    }
}

/// Never produces a key. For exercising the timer on its own.
pub struct Silent;

#[async_trait]
impl Input for Silent {
    async fn next_key(&mut self) -> Result<char> {
        std::future::pending().await
    }
}
