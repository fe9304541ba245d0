//! Game tunables and fixed UI text.

use std::time::Duration;

/// How often the floor crumbles on its own.
pub const TIMER_PERIOD: Duration = Duration::from_millis(250);

/// How far ahead of the collapse the player starts.
///
/// The tracer begins this many steps behind the start of the text, so
/// exactly this many typos/ticks are survivable before the first correct
/// keystroke.
pub const PLAYER_INIT_OFFSET: i64 = 7;

/// Status line shown on a bad keystroke; cleared by the next good one.
pub const WRONG_KEY_MSG: &str = "WRONG KEY";

/// Key that leaves the win/death screen.
pub const QUIT_KEY: char = 'q';

// Fixed screen geometry: row numbers inside the border.
pub const TITLE_LINE: u16 = 1;
pub const PROMPT_LINE: u16 = 2;
pub const PLAYER_LINE: u16 = 4;
pub const FLOOR_LINE: u16 = 5;
pub const LAVA_LINE: u16 = 6;
pub const MESSAGE_LINE: u16 = 8;
pub const MESSAGE_COLUMN: u16 = 12;

/// Room reserved at the left edge of the floor row for the collapse
/// countdown: a minus sign, four digits and a space.
pub const FLOOR_LAG_WIDTH: u16 = 6;

pub const PLAYER_GLYPH: char = '@';
pub const FLOOR_GLYPH: char = '=';
/// The lava row is a random strip of these.
pub const LAVA_GLYPHS: &str = "~#%&*^?";

pub const INIT_TITLE: &str = "LAVARUN - THE FLOOR IS LAVA, TYPE FOR YOUR LIFE";
pub const INIT_PROMPT: &str = "Press any key to start running";
pub const GAME_TITLE: &str = "RUN!";
pub const GAME_PROMPT: &str = "Type the text to stay ahead of the collapse";
pub const OVER_TITLE: &str = "THE LAVA CAUGHT YOU";
pub const OVER_PROMPT: &str = "Press q to quit";
pub const WIN_TITLE: &str = "YOU MADE IT OUT";
pub const WIN_PROMPT: &str = "You outran the lava. Press q to quit";

/// Played when no text file is given on the command line.
pub const DEFAULT_TEXT: &str = "You can race through your own words - \
pass a path to a text file as a command line argument";
