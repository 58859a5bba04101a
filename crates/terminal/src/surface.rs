//! Scoped ownership of the terminal: alternate screen and hidden cursor are
//! set up on acquire and restored on drop, including on error paths.

use std::io::{self, IsTerminal, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use sandfall_simulation::Error;

use crate::render::{TerminalRenderer, Theme};

#[derive(Debug)]
pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    /// Takes over stdout. Fails if stdout is not an interactive terminal.
    pub fn acquire(frame_width: usize, frame_height: usize) -> Result<Self, Error> {
        let mut out = io::stdout();
        if !out.is_terminal() {
            return Err(Error::Initialization(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is not a terminal",
            )));
        }

        match terminal::size() {
            Ok((cols, rows))
                if usize::from(cols) < frame_width || usize::from(rows) < frame_height =>
            {
                log::warn!(
                    "terminal is {cols}x{rows}, frame needs {frame_width}x{frame_height}; \
                     output will be clipped"
                );
            }
            Ok(_) => {}
            Err(err) => log::debug!("could not query terminal size: {err}"),
        }

        execute!(out, EnterAlternateScreen).map_err(Error::Initialization)?;
        // From here on the guard exists, so a failure below still leaves the
        // alternate screen through Drop.
        let mut surface = Self { out };
        execute!(surface.out, Hide, Clear(ClearType::All)).map_err(Error::Initialization)?;
        log::debug!("terminal surface acquired");
        Ok(surface)
    }

    pub fn renderer(&mut self, theme: Theme) -> TerminalRenderer<&mut Stdout> {
        TerminalRenderer::new(&mut self.out, theme)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}
