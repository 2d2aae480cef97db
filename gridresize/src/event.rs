use crossterm::event::{MouseEvent, MouseEventKind};

/// A pointer event delivered to the resize controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Header cell the event was delivered to. Empty for document-level
    /// events, which aren't targeted.
    pub target: String,
    pub x: f64,
    pub y: f64,
    /// Button pressed, held or released; `None` for plain moves.
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    /// Pointer movement over `target`.
    pub fn moved(target: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            target: target.into(),
            x,
            y,
            button: None,
        }
    }

    /// Button press on `target`.
    pub fn pressed(target: impl Into<String>, x: f64, y: f64, button: MouseButton) -> Self {
        Self {
            target: target.into(),
            x,
            y,
            button: Some(button),
        }
    }

    /// Untargeted document event at `x`, `y`.
    pub fn document(x: f64, y: f64) -> Self {
        Self {
            target: String::new(),
            x,
            y,
            button: None,
        }
    }

    /// Convert a terminal mouse event. One cell maps to one unit.
    pub fn from_mouse(event: MouseEvent, target: Option<String>) -> Self {
        let button = match event.kind {
            MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => {
                Some(b.into())
            }
            _ => None,
        };
        Self {
            target: target.unwrap_or_default(),
            x: f64::from(event.column),
            y: f64::from(event.row),
            button,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a column drag.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
