//! Demo grid model and its terminal layout.

use gridresize::{Bounds, Column, ColumnWidth, LayoutHost};

pub const WRAPPER_ID: &str = "wrapper";
pub const TABLE_ID: &str = "table";
pub const GUIDE_ID: &str = "guide";

/// Cells given to a column with no usable width.
const AUTO_WIDTH: u16 = 14;

/// Table origin inside the terminal.
const TABLE_LEFT: u16 = 1;
const TABLE_TOP: u16 = 2;

pub struct Grid {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn sample() -> Self {
        let columns = vec![
            Column::new("id", "ID").fixed(6).min_width(4).max_width(10),
            Column::new("name", "Name").fixed(18),
            Column::new("email", "Email").width("24px"),
            Column::new("role", "Role"),
            Column::new("joined", "Joined").fixed(12).min_width(12).max_width(12),
        ];
        let rows = [
            ["1", "Ada Lovelace", "ada@example.com", "Admin", "1843-07-01"],
            ["2", "Grace Hopper", "grace@example.com", "Editor", "1952-05-12"],
            ["3", "Alan Turing", "alan@example.com", "Viewer", "1936-11-30"],
            ["4", "Edsger Dijkstra", "edsger@example.com", "Editor", "1959-01-15"],
            ["5", "Barbara Liskov", "barbara@example.com", "Admin", "1974-04-02"],
            ["6", "Ken Thompson", "ken@example.com", "Viewer", "1969-08-20"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect();

        Self { columns, rows }
    }

    pub fn header_id(column: &Column) -> String {
        format!("th-{}", column.key)
    }

    /// Rendered width of a column in cells.
    pub fn column_width(column: &Column) -> u16 {
        match column.width {
            ColumnWidth::Auto => AUTO_WIDTH,
            ref other => other
                .numeric()
                .filter(|n| *n > 0)
                .map_or(AUTO_WIDTH, |n| n.min(i64::from(u16::MAX)) as u16),
        }
    }

    /// The column at `index` and the one before it.
    pub fn pair(&self, index: usize) -> Option<(&Column, Option<&Column>)> {
        let column = self.columns.get(index)?;
        let previous = index.checked_sub(1).and_then(|i| self.columns.get(i));
        Some((column, previous))
    }

    /// Lay the grid out into `host` for a terminal of `size`.
    ///
    /// The header row sits at the top of the table and each data row takes
    /// one line. Rows that don't fit above the status bar are cut.
    pub fn layout(&self, host: &mut LayoutHost, size: (u16, u16)) {
        let (width, height) = size;
        host.clear_layout();

        let wrapper_height = height.saturating_sub(2);
        host.insert(
            WRAPPER_ID,
            Bounds::new(0.0, 1.0, f64::from(width), f64::from(wrapper_height)),
        );

        let visible_rows = (self.rows.len() as u16).min(wrapper_height.saturating_sub(2));
        let table_width: u16 = self.columns.iter().map(Self::column_width).sum();
        host.insert(
            TABLE_ID,
            Bounds::new(
                f64::from(TABLE_LEFT),
                f64::from(TABLE_TOP),
                f64::from(table_width),
                f64::from(visible_rows + 1),
            ),
        );
        host.set_parent(TABLE_ID, WRAPPER_ID);

        let mut x = TABLE_LEFT;
        for column in &self.columns {
            let w = Self::column_width(column);
            host.insert(
                Self::header_id(column),
                Bounds::new(f64::from(x), f64::from(TABLE_TOP), f64::from(w), 1.0),
            );
            x = x.saturating_add(w);
        }
        host.set_header_row(self.columns.iter().map(Self::header_id));
    }
}
