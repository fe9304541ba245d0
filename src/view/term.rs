//! The crossterm-backed display.
//!
//! Fixed layout inside a box border: title and prompt rows up top, then the
//! row the player runs along (text included), the floor row under it, and
//! the lava row under that. Everything is queued into the stdout buffer and
//! only hits the terminal on [`GameView::refresh`] (or the handful of
//! screens that flush themselves, same as the drawing they replace).
//!
//! The model tracks positions as text indices; this view keeps its own
//! *visual* columns for the player glyph and the collapse edge, which reset
//! on every window swap while preserving their gap.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::warn;

use crate::params;
use super::GameView;

/// Columns the playfield is shifted right when the lag readout needs more
/// room than the head start leaves free.
const DRAW_OFFSET: i32 = {
    let lag = params::FLOOR_LAG_WIDTH as i32;
    let head = params::PLAYER_INIT_OFFSET as i32;
    if lag > head {
        lag - head
    } else {
        0
    }
};

pub struct TermView {
    out: Stdout,
    rng: SmallRng,
    /// Visual column of the player glyph.
    player: i32,
    /// Visual column of the collapse edge; below 1 while the collapse is
    /// still off-screen to the left.
    floor: i32,
}

impl TermView {
    pub fn new() -> Self {
        TermView {
            out: io::stdout(),
            rng: SmallRng::from_entropy(),
            player: params::PLAYER_INIT_OFFSET as i32 + DRAW_OFFSET,
            floor: 1 + DRAW_OFFSET,
        }
    }

    /// Usable columns and rows inside the border.
    fn limits(&self) -> (i32, i32) {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        (cols.saturating_sub(2) as i32, rows.saturating_sub(2) as i32)
    }

    fn put(&mut self, x: i32, y: u16, text: &str) -> io::Result<()> {
        if x < 1 {
            // off the playfield; the lag readout covers this range instead
            return Ok(());
        }
        queue!(self.out, MoveTo(x as u16, y), Print(text))
    }

    fn put_styled(
        &mut self,
        x: i32,
        y: u16,
        text: &str,
        color: Color,
        reverse: bool,
    ) -> io::Result<()> {
        if x < 1 {
            return Ok(());
        }
        queue!(
            self.out,
            MoveTo(x as u16, y),
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
        )?;
        if reverse {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            self.out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    fn draw_border(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let inner = cols.saturating_sub(2) as usize;
        let horiz = "-".repeat(inner);
        queue!(
            self.out,
            MoveTo(0, 0),
            Print(format!("+{horiz}+")),
            MoveTo(0, rows.saturating_sub(1)),
            Print(format!("+{horiz}+")),
        )?;
        for y in 1..rows.saturating_sub(1) {
            queue!(
                self.out,
                MoveTo(0, y),
                Print("|"),
                MoveTo(cols.saturating_sub(1), y),
                Print("|")
            )?;
        }
        Ok(())
    }

    fn clear_title_prompt(&mut self) -> io::Result<()> {
        let (xmax, _) = self.limits();
        let blank = " ".repeat(xmax.max(0) as usize);
        self.put(1, params::TITLE_LINE, &blank)?;
        self.put(1, params::PROMPT_LINE, &blank)
    }

    fn clear_player_line(&mut self) -> io::Result<()> {
        let (xmax, _) = self.limits();
        let blank = " ".repeat(xmax.max(0) as usize);
        self.put(1, params::PLAYER_LINE, &blank)
    }

    /// Numeric countdown shown while the collapse edge is still left of the
    /// playfield.
    fn draw_floor_lag(&mut self) -> io::Result<()> {
        let lag = format!("{:>width$}", self.floor, width = params::FLOOR_LAG_WIDTH as usize);
        self.put_styled(1, params::FLOOR_LINE, &lag, Color::Yellow, true)
    }

    fn try_init_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        self.draw_border()?;
        self.put(1, params::TITLE_LINE, params::INIT_TITLE)?;
        self.put(1, params::PROMPT_LINE, params::INIT_PROMPT)?;
        self.out.flush()
    }

    fn try_game_screen(&mut self, text: &str) -> io::Result<usize> {
        self.clear_title_prompt()?;
        self.clear_player_line()?;

        // new window: player snaps back to the start column, the collapse
        // edge keeps its distance
        let gap = self.player - self.floor;
        self.player = params::PLAYER_INIT_OFFSET as i32 + DRAW_OFFSET;
        self.floor = self.player - gap;

        let (xmax, _) = self.limits();
        let to_display = (xmax - self.player).max(0) as usize;
        let display: String = text.chars().take(to_display).collect();
        let shown = display.chars().count();

        self.put(1, params::TITLE_LINE, params::GAME_TITLE)?;
        self.put(1, params::PROMPT_LINE, params::GAME_PROMPT)?;

        let floor_from = self.floor.max(1);
        let floor_run = (xmax - floor_from + 1).max(0) as usize;
        let floor: String = params::FLOOR_GLYPH.to_string().repeat(floor_run);
        self.put_styled(floor_from, params::FLOOR_LINE, &floor, Color::Yellow, false)?;

        let glyphs: Vec<char> = params::LAVA_GLYPHS.chars().collect();
        let lava: String = (0..xmax)
            .map(|_| glyphs[self.rng.gen_range(0..glyphs.len())])
            .collect();
        self.put_styled(1, params::LAVA_LINE, &lava, Color::Red, true)?;

        let player = self.player;
        self.put_styled(
            player,
            params::PLAYER_LINE,
            &params::PLAYER_GLYPH.to_string(),
            Color::Green,
            false,
        )?;
        self.put_styled(player + 1, params::PLAYER_LINE, &display, Color::Blue, false)?;

        if self.floor < 1 {
            self.draw_floor_lag()?;
        }

        self.out.flush()?;
        Ok(shown)
    }

    fn try_move_player(&mut self) -> io::Result<()> {
        let player = self.player;
        self.put(player, params::PLAYER_LINE, " ")?;
        self.put_styled(
            player + 1,
            params::PLAYER_LINE,
            &params::PLAYER_GLYPH.to_string(),
            Color::Green,
            false,
        )?;
        self.player += 1;
        Ok(())
    }

    fn try_drop_floor(&mut self) -> io::Result<()> {
        if self.floor < 0 {
            self.draw_floor_lag()?;
        } else if self.floor == 0 {
            // the collapse just reached the playfield: the countdown strip
            // turns back into floor
            let strip = params::FLOOR_GLYPH
                .to_string()
                .repeat(params::FLOOR_LAG_WIDTH as usize);
            self.put_styled(1, params::FLOOR_LINE, &strip, Color::Yellow, false)?;
        } else {
            let floor = self.floor;
            self.put(floor, params::FLOOR_LINE, " ")?;
            self.put_styled(
                floor + 1,
                params::FLOOR_LINE,
                &params::FLOOR_GLYPH.to_string(),
                Color::Yellow,
                true,
            )?;
        }
        self.floor += 1;
        Ok(())
    }

    fn try_print_message(&mut self, msg: &str) -> io::Result<()> {
        let (xmax, _) = self.limits();
        let col = params::MESSAGE_COLUMN as i32;
        if msg.is_empty() {
            let blank = " ".repeat((xmax - col).max(0) as usize);
            self.put(col, params::MESSAGE_LINE, &blank)
        } else {
            self.put_styled(col, params::MESSAGE_LINE, msg, Color::Red, true)
        }
    }

    fn try_win_screen(&mut self) -> io::Result<()> {
        self.clear_title_prompt()?;
        self.put(1, params::TITLE_LINE, params::WIN_TITLE)?;
        self.put(1, params::PROMPT_LINE, params::WIN_PROMPT)?;
        self.out.flush()
    }

    fn try_death_screen(&mut self) -> io::Result<()> {
        self.clear_title_prompt()?;
        self.put(1, params::TITLE_LINE, params::OVER_TITLE)?;
        self.put(1, params::PROMPT_LINE, params::OVER_PROMPT)?;
        // the player drops off the floor row into the lava
        let player = self.player;
        self.put(player, params::PLAYER_LINE, " ")?;
        self.put_styled(
            player,
            params::LAVA_LINE,
            &params::PLAYER_GLYPH.to_string(),
            Color::Red,
            true,
        )?;
        self.out.flush()
    }

    fn lossy(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            warn!(%err, "terminal draw failed");
        }
    }
}

impl Default for TermView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for TermView {
    fn init_screen(&mut self) {
        let result = self.try_init_screen();
        self.lossy(result);
    }

    fn game_screen(&mut self, text: &str) -> usize {
        match self.try_game_screen(text) {
            Ok(shown) => shown,
            Err(err) => {
                // claim the whole text so border bookkeeping still advances
                // on a dead terminal
                warn!(%err, "terminal draw failed");
                text.chars().count()
            }
        }
    }

    fn move_player(&mut self) {
        let result = self.try_move_player();
        self.lossy(result);
    }

    fn drop_floor(&mut self) {
        let result = self.try_drop_floor();
        self.lossy(result);
    }

    fn print_message(&mut self, msg: &str) {
        let result = self.try_print_message(msg);
        self.lossy(result);
    }

    fn win_screen(&mut self) {
        let result = self.try_win_screen();
        self.lossy(result);
    }

    fn death_screen(&mut self) {
        let result = self.try_death_screen();
        self.lossy(result);
    }

    fn refresh(&mut self) {
        if let Err(err) = self.out.flush() {
            warn!(%err, "terminal flush failed");
        }
    }
}
