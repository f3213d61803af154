//! Alternate-screen session for the chart
//!
//! The menu may open the chart many times in one run, so the panic hook that
//! puts the terminal back is installed once per process and the screen is
//! restored when the session is dropped.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode, alternate-screen terminal that is restored on drop
pub struct ChartSession {
    terminal: Tui,
}

impl ChartSession {
    pub fn enter() -> Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                let _ = leave();
                previous(info);
            }));
        });

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for ChartSession {
    fn drop(&mut self) {
        if let Err(e) = leave() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn leave() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
