/// Identifies an element in the host's layout (header cells, the table
/// container, the guide line anchor).
pub type ElementId = String;

/// Bounding rectangle of a rendered element, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            left: x,
            right: x + width,
            bottom: y + height,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Cursor override applied to a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No override, the host's default cursor applies.
    #[default]
    Default,
    /// Column resize indicator.
    ColResize,
}

/// Read access to rendered geometry plus the one style mutation the
/// resize core needs.
///
/// Hosts implement this over whatever backs their layout (a DOM, a
/// terminal cell grid, a test fixture).
pub trait GeometryProvider {
    /// Bounding rectangle of an element, `None` if it isn't laid out.
    fn bounds_of(&self, id: &str) -> Option<Bounds>;

    /// Set the inline cursor style of an element.
    fn set_cursor(&mut self, id: &str, cursor: Cursor);

    /// The element immediately to the left of `id`, only if it is itself
    /// a header cell.
    fn previous_header_cell(&self, id: &str) -> Option<ElementId>;

    /// Parent element of `id`.
    fn parent_of(&self, id: &str) -> Option<ElementId>;
}
