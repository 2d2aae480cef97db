use crate::geometry::Cursor;

/// Visual state of the resize guide line.
///
/// The view renders an element bound to this state; only the drag session
/// writes to it. All offsets are relative to the table container.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    visible: bool,
    top: f64,
    height: f64,
    left: f64,
    /// Distance from the container's bottom edge to its parent's bottom edge.
    bottom: f64,
    cursor: Cursor,
}

impl Default for GuideLine {
    fn default() -> Self {
        Self {
            visible: false,
            top: 0.0,
            height: 0.0,
            left: 0.0,
            bottom: 0.0,
            cursor: Cursor::ColResize,
        }
    }
}

impl GuideLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Show the line spanning `top..top + height` at `left`.
    pub(crate) fn show(&mut self, top: f64, height: f64, left: f64, bottom: f64) {
        self.visible = true;
        self.top = top;
        self.height = height;
        self.left = left;
        self.bottom = bottom;
    }

    /// Move the line horizontally; nothing else changes.
    pub(crate) fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    /// Hide the line and reset its offset.
    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.left = 0.0;
    }
}
