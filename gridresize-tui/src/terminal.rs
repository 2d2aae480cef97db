use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::view::Canvas;

pub struct Terminal {
    stdout: io::Stdout,
    previous: Option<Canvas>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            event::EnableFocusChange
        )?;

        Ok(Self {
            stdout,
            previous: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Write the cells that changed since the last frame.
    pub fn draw(&mut self, canvas: Canvas) -> io::Result<()> {
        let resized = self
            .previous
            .as_ref()
            .is_none_or(|p| p.width() != canvas.width() || p.height() != canvas.height());
        if resized {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            // Force a full repaint against an impossible frame.
            self.previous = Some(Canvas::new(canvas.width(), canvas.height(), Color::AnsiValue(0)));
        }

        let Some(previous) = self.previous.as_ref() else {
            return Ok(());
        };

        let mut last: Option<(u16, u16, u16)> = None;
        let mut last_fg = None;
        let mut last_bg = None;
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in canvas.diff(previous) {
            if cell.wide_continuation {
                continue;
            }
            let sequential = last.is_some_and(|(lx, ly, lw)| ly == y && lx + lw == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(cell.fg))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(cell.bg))?;
                last_bg = Some(cell.bg);
            }
            write!(self.stdout, "{}", cell.ch)?;
            last = Some((x, y, cell.ch.width().unwrap_or(1).max(1) as u16));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.previous = Some(canvas);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableFocusChange,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
