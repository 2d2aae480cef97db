use crossterm::style::Color;
use gridresize::{Bounds, Cursor, GeometryProvider, LayoutHost, ResizeController};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::grid::{Grid, TABLE_ID};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    /// Second half of a wide character; the terminal skips it.
    pub wide_continuation: bool,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg,
            wide_continuation: false,
        }
    }
}

/// A frame of terminal cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, bg: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(bg); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Fill `width` cells starting at `x` with the background color.
    fn fill(&mut self, x: u16, y: u16, width: u16, bg: Color) {
        for dx in 0..width {
            self.set(x.saturating_add(dx), y, Cell::blank(bg));
        }
    }

    /// Write text at `x`, clipped to `max_width` cells. Returns the width used.
    fn put_str(&mut self, x: u16, y: u16, s: &str, max_width: u16, fg: Color, bg: Color) -> u16 {
        let text = truncate_to_width(s, max_width as usize);
        let mut col = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            self.set(
                col,
                y,
                Cell {
                    ch,
                    fg,
                    bg,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    col + 1,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        wide_continuation: true,
                    },
                );
            }
            col = col.saturating_add(w);
        }
        col - x
    }

    /// Iterate cells that differ from `previous`.
    pub fn diff<'a>(&'a self, previous: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Render the grid, the guide line and the status bar.
///
/// `hovered` is the header cell currently under the pointer; its resize
/// cursor is shown as a highlight since terminals have no pointer shapes.
pub fn render(
    grid: &Grid,
    controller: &ResizeController<LayoutHost>,
    theme: &Theme,
    hovered: Option<&str>,
    size: (u16, u16),
) -> Canvas {
    let (width, height) = size;
    let mut canvas = Canvas::new(width, height, theme.background);
    let host = controller.host();

    canvas.put_str(
        1,
        0,
        "Hover a header border, drag to resize. Esc cancels, q quits.",
        width.saturating_sub(2),
        theme.muted,
        theme.background,
    );

    let Some(table) = host.bounds_of(TABLE_ID) else {
        return canvas;
    };

    for (index, column) in grid.columns.iter().enumerate() {
        let id = Grid::header_id(column);
        let Some(cell) = host.bounds_of(&id).filter(|b| !b.is_empty()) else {
            continue;
        };
        let (x, y, w) = cell_span(&cell);
        let armed = hovered == Some(id.as_str()) && host.cursor(&id) == Cursor::ColResize;
        let bg = if armed { theme.armed_bg } else { theme.header_bg };

        canvas.fill(x, y, w, bg);
        canvas.put_str(x, y, &column.title, w.saturating_sub(1), theme.header_fg, bg);
        canvas.put_str(x + w.saturating_sub(1), y, "│", 1, theme.muted, bg);

        for (row_index, row) in grid.rows.iter().enumerate() {
            let row_y = y + 1 + row_index as u16;
            if f64::from(row_y) >= table.bottom {
                break;
            }
            let text = row.get(index).map(String::as_str).unwrap_or("");
            canvas.put_str(x, row_y, text, w.saturating_sub(1), theme.text, theme.background);
            canvas.put_str(
                x + w.saturating_sub(1),
                row_y,
                "│",
                1,
                theme.muted,
                theme.background,
            );
        }
    }

    let guide = controller.guide();
    if guide.visible() {
        // The boundary sits just past the separator column.
        let gx = (table.left + guide.left()).round() as i32 - 1;
        let top = (table.top + guide.top()).round() as i32;
        let rows = guide.height().round() as i32;
        if gx >= 0 {
            for dy in 0..rows {
                let gy = top + dy;
                if gy >= 0 {
                    canvas.put_str(gx as u16, gy as u16, "┃", 1, theme.guide, theme.background);
                }
            }
        }
    }

    let status_y = height.saturating_sub(1);
    canvas.fill(0, status_y, width, theme.status_bg);
    canvas.put_str(
        1,
        status_y,
        &status_line(grid, controller),
        width.saturating_sub(2),
        theme.text,
        theme.status_bg,
    );

    canvas
}

fn status_line(grid: &Grid, controller: &ResizeController<LayoutHost>) -> String {
    if let Some(session) = controller.session() {
        let preview = session.committed_width(controller.guide().left());
        return format!("resizing {} → {}", session.column_key(), preview);
    }
    grid.columns
        .iter()
        .map(|c| {
            let width = c.width.to_css().unwrap_or_else(|| "auto".to_string());
            format!("{} {}", c.title, width)
        })
        .collect::<Vec<_>>()
        .join("  ·  ")
}

fn cell_span(bounds: &Bounds) -> (u16, u16, u16) {
    (
        bounds.left.max(0.0) as u16,
        bounds.top.max(0.0) as u16,
        bounds.width.max(0.0) as u16,
    )
}
