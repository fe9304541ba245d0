//! The render sink the engine draws through.

pub mod term;
pub mod test;

/// Everything the game needs a display to do.
///
/// The model calls these as fire-and-forget notifications; the one return
/// channel is [`Self::game_screen`], which reports how many characters of
/// text it managed to fit so the model can keep its scroll border straight.
/// Implementations own their error handling -- a display that can't draw
/// should complain to its own log, not to the state machine.
pub trait GameView {
    /// One-time setup, before gameplay starts.
    fn init_screen(&mut self);
    /// Render (a window of) the text to type. Returns how many characters
    /// were displayed.
    fn game_screen(&mut self, text: &str) -> usize;
    /// Advance the player marker one cell.
    fn move_player(&mut self);
    /// Crumble one more cell of floor.
    fn drop_floor(&mut self);
    /// Show a transient status message; the empty string clears it.
    fn print_message(&mut self, msg: &str);
    /// Terminal success screen.
    fn win_screen(&mut self);
    /// Terminal failure screen.
    fn death_screen(&mut self);
    /// Flush pending drawing, for displays that buffer.
    fn refresh(&mut self);
}
