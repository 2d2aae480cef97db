//! Drag session: the state between a press on an armed boundary and the
//! matching release.

use log::debug;

use crate::column::Column;
use crate::config::ResizeConfig;
use crate::document::{DocumentEvents, DocumentSubscriptions};
use crate::geometry::{Cursor, ElementId, GeometryProvider};
use crate::hover::ArmedTarget;

/// Vertical placement of the guide line, relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSpan {
    pub top: f64,
    pub height: f64,
    pub bottom: f64,
}

/// An open column drag.
#[derive(Debug)]
pub struct DragSession {
    target: ElementId,
    /// Cell the press landed on; differs from `target` for neighbor drags.
    hovered: ElementId,
    column_key: String,
    origin_x: f64,
    uses_neighbor: bool,
    scale: f64,
    /// Guide offset at press time: the target's right edge.
    resize_line_pos: f64,
    /// The target's left edge.
    col_left: f64,
    min_offset: f64,
    max_offset: f64,
    span: GuideSpan,
    subscriptions: DocumentSubscriptions,
}

impl DragSession {
    /// Open a session on `armed`, resizing `column`.
    ///
    /// Returns `None` without touching the host when the target or the
    /// container has no geometry yet. On success the document listeners
    /// are registered and owned by the session until [`end`](Self::end).
    pub fn begin<H>(
        host: &mut H,
        config: &ResizeConfig,
        container: &str,
        armed: &ArmedTarget,
        column: &Column,
        origin_x: f64,
    ) -> Option<Self>
    where
        H: GeometryProvider + DocumentEvents,
    {
        let target = host.bounds_of(&armed.element)?;
        let table = host.bounds_of(container)?;
        let parent_bottom = host
            .parent_of(container)
            .and_then(|id| host.bounds_of(&id))
            .map_or(table.bottom, |b| b.bottom);

        let resize_line_pos = target.right - table.left;
        let col_left = target.left - table.left;
        let (min_width, max_width) = column.resize.effective(config);

        let span = GuideSpan {
            top: target.top - table.top,
            height: table.bottom - target.top,
            bottom: parent_bottom - table.bottom,
        };

        let subscriptions = DocumentSubscriptions::acquire(host);

        debug!(
            "[drag] begin column={} target={} origin_x={} line={} col_left={} range=[{}, {}]",
            column.key,
            armed.element,
            origin_x,
            resize_line_pos,
            col_left,
            min_width,
            max_width
        );

        Some(Self {
            target: armed.element.clone(),
            hovered: armed.hovered.clone(),
            column_key: column.key.clone(),
            origin_x,
            uses_neighbor: armed.uses_neighbor,
            scale: armed.scale,
            resize_line_pos,
            col_left,
            min_offset: col_left + f64::from(min_width),
            max_offset: col_left + f64::from(max_width),
            span,
            subscriptions,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Key of the column the release will write to.
    pub fn column_key(&self) -> &str {
        &self.column_key
    }

    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn uses_neighbor(&self) -> bool {
        self.uses_neighbor
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn resize_line_pos(&self) -> f64 {
        self.resize_line_pos
    }

    pub fn col_left(&self) -> f64 {
        self.col_left
    }

    /// Clamp range for the guide offset.
    pub fn offset_range(&self) -> (f64, f64) {
        (self.min_offset, self.max_offset)
    }

    pub fn span(&self) -> GuideSpan {
        self.span
    }

    /// Guide offset for a pointer at `x`, clamped to the column's limits.
    pub fn guide_offset(&self, x: f64) -> f64 {
        let raw = self.resize_line_pos + (x - self.origin_x);
        raw.max(self.min_offset).min(self.max_offset)
    }

    /// Logical width committed when the guide ends at `final_offset`.
    pub fn committed_width(&self, final_offset: f64) -> u32 {
        ((final_offset - self.col_left) / self.scale).floor().max(0.0) as u32
    }

    /// Restore the cursors the drag set and release the document listeners.
    pub fn end<H>(self, host: &mut H)
    where
        H: GeometryProvider + DocumentEvents,
    {
        host.set_cursor(&self.target, Cursor::Default);
        if self.hovered != self.target {
            host.set_cursor(&self.hovered, Cursor::Default);
        }
        self.subscriptions.release(host);
    }
}
