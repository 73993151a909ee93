//! Terminal setup, teardown and diff-based flushing.

use std::io::{self, Write};
use std::panic;
use std::sync::Once;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use signup_form::render::{Buffer, Rgb, TextStyle, char_width};

/// Owns the terminal for the lifetime of the app and restores it on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        let size = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .and_then(|()| terminal::size());
        let (width, height) = match size {
            Ok(size) => size,
            Err(e) => {
                let _ = restore_terminal();
                return Err(e);
            }
        };
        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input, then drain anything else pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Draw a frame with `paint` and write only the changed cells.
    pub fn draw<F>(&mut self, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        paint(&mut self.current_buffer);
        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                // Attributes are not individually reversible; reset and reapply.
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.reversed {
                    queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Restore the terminal before the previous hook prints the panic.
/// Returns `false` when a hook was already installed by an earlier call.
fn install_panic_hook() -> bool {
    static INSTALL: Once = Once::new();
    let mut installed = false;
    INSTALL.call_once(|| {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            previous_hook(panic_info);
        }));
        installed = true;
    });
    installed
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    Ok(())
}
