//! Terminal setup and teardown for the quiz client.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen. Once both succeed, a panic hook
/// guarantees [`restore`] runs even if rendering panics.
pub fn init() -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
