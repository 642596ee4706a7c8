//! A ratatui backend that feeds a `vt100` parser, so tests can read the
//! screen the way a terminal would show it.

use std::fmt::Write as _;
use std::io;

use crossterm::{Command, cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::Color;

pub struct VirtualTerminal {
    parser: vt100::Parser,
    size: Size,
}

impl VirtualTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// One screen row, trailing blanks trimmed.
    pub fn row(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.size.width)
            .nth(usize::from(row))
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    fn emit(&mut self, command: impl Command) {
        let mut buf = String::new();
        let _ = command.write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
    }
}

impl Backend for VirtualTerminal {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut buf = String::new();
        let mut next: Option<(u16, u16)> = None;
        let mut last_style = None;

        for (x, y, cell) in content {
            if next != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut buf);
            }
            let cell_style = cell.style();
            if last_style != Some(cell_style) {
                let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(&mut buf);
                if let Some(fg) = cell_style.fg.and_then(ansi_color) {
                    let _ = style::SetForegroundColor(fg).write_ansi(&mut buf);
                }
                if let Some(bg) = cell_style.bg.and_then(ansi_color) {
                    let _ = style::SetBackgroundColor(bg).write_ansi(&mut buf);
                }
                last_style = Some(cell_style);
            }
            let _ = write!(buf, "{}", cell.symbol());
            next = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        self.emit(cursor::MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.emit(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::new(self.size.width * 8, self.size.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn ansi_color(color: Color) -> Option<style::Color> {
    use style::Color as C;
    Some(match color {
        Color::Reset => return None,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    })
}
