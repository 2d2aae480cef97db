//! The resize controller: one per grid instance.
//!
//! Wire header cell pointer-move to [`on_column_mouseover`] and pointer-down
//! to [`on_column_mousedown`]. While the host has document listeners
//! registered (see [`DocumentEvents`]), route document-wide moves to
//! [`on_document_mousemove`] and the release to [`on_document_mouseup`].
//!
//! [`on_column_mouseover`]: ResizeController::on_column_mouseover
//! [`on_column_mousedown`]: ResizeController::on_column_mousedown
//! [`on_document_mousemove`]: ResizeController::on_document_mousemove
//! [`on_document_mouseup`]: ResizeController::on_document_mouseup

use log::{debug, trace, warn};

use crate::column::{find_column_mut, Column, ColumnWidth};
use crate::config::{ConfigError, ResizeConfig};
use crate::document::DocumentEvents;
use crate::drag::DragSession;
use crate::event::{EventResult, MouseButton, PointerEvent};
use crate::geometry::{Cursor, ElementId, GeometryProvider};
use crate::guide::GuideLine;
use crate::hover::{detect_hover, ArmedTarget, HoverOutcome};

pub struct ResizeController<H> {
    host: H,
    config: ResizeConfig,
    /// The table's content container, used for guide line coordinates.
    container: Option<ElementId>,
    /// Element the view binds to the guide line state, once mounted.
    guide_anchor: Option<ElementId>,
    guide: GuideLine,
    armed: Option<ArmedTarget>,
    session: Option<DragSession>,
    refresh: Box<dyn FnMut()>,
}

impl<H: GeometryProvider + DocumentEvents> ResizeController<H> {
    /// Create a controller with the default config.
    pub fn new(host: H, container: Option<ElementId>, refresh: impl FnMut() + 'static) -> Self {
        Self {
            host,
            config: ResizeConfig::default(),
            container,
            guide_anchor: None,
            guide: GuideLine::new(),
            armed: None,
            session: None,
            refresh: Box::new(refresh),
        }
    }

    /// Create a controller with a custom config.
    pub fn with_config(
        host: H,
        container: Option<ElementId>,
        config: ResizeConfig,
        refresh: impl FnMut() + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self::new(host, container, refresh);
        controller.config = config;
        Ok(controller)
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    pub fn set_container(&mut self, container: Option<ElementId>) {
        self.container = container;
    }

    pub fn guide_anchor(&self) -> Option<&str> {
        self.guide_anchor.as_deref()
    }

    /// Called by the view once the guide line element is mounted (or
    /// unmounted). Hover stays inert until an anchor is set.
    pub fn set_guide_anchor(&mut self, anchor: Option<ElementId>) {
        self.guide_anchor = anchor;
    }

    pub fn guide(&self) -> &GuideLine {
        &self.guide
    }

    pub fn armed_target(&self) -> Option<&ArmedTarget> {
        self.armed.as_ref()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer moved over a header cell.
    ///
    /// Arms or disarms the boundary under the pointer and sets the cell's
    /// cursor accordingly. Does nothing during a drag.
    pub fn on_column_mouseover(
        &mut self,
        event: &PointerEvent,
        column: &Column,
        previous: Option<&Column>,
    ) -> EventResult {
        if self.guide_anchor.is_none() || self.session.is_some() {
            return EventResult::Ignored;
        }

        match detect_hover(&self.host, &self.config, event, column, previous) {
            HoverOutcome::Armed(target) => {
                self.host.set_cursor(&event.target, Cursor::ColResize);
                if self.armed.as_ref() != Some(&target) {
                    trace!(
                        "[hover] armed {} (neighbor={}, scale={})",
                        target.element,
                        target.uses_neighbor,
                        target.scale
                    );
                }
                self.armed = Some(target);
                EventResult::Consumed
            }
            HoverOutcome::Disarmed => {
                self.host.set_cursor(&event.target, Cursor::Default);
                if let Some(previous) = self.armed.take() {
                    trace!("[hover] disarmed {}", previous.element);
                }
                EventResult::Ignored
            }
        }
    }

    /// Pointer pressed on a header cell.
    ///
    /// Opens a drag session if hover armed a boundary on this cell. Presses
    /// that can't start a drag (nothing armed, armed for another cell or
    /// column, container not laid out, disabled column) are ignored.
    pub fn on_column_mousedown(
        &mut self,
        event: &PointerEvent,
        column: &Column,
        previous: Option<&Column>,
    ) -> EventResult {
        if self.session.is_some() {
            return EventResult::Ignored;
        }
        let Some(armed) = self.armed.clone() else {
            return EventResult::Ignored;
        };
        if self.config.left_button_only
            && event.button.is_some_and(|b| b != MouseButton::Left)
        {
            return EventResult::Ignored;
        }

        let effective = if armed.uses_neighbor {
            match previous {
                Some(col) => col,
                None => return EventResult::Ignored,
            }
        } else {
            column
        };
        // The press must land where hover armed, on the same column.
        if event.target != armed.hovered || effective.key != armed.column_key {
            debug!(
                "[resize] press on {} ignored, armed for {} ({})",
                event.target, armed.hovered, armed.column_key
            );
            return EventResult::Ignored;
        }
        if !effective.resize.is_resizable(&self.config) {
            return EventResult::Ignored;
        }

        let Some(container) = self.container.as_deref() else {
            debug!("[resize] press ignored, no table container");
            return EventResult::Ignored;
        };
        let Some(session) = DragSession::begin(
            &mut self.host,
            &self.config,
            container,
            &armed,
            effective,
            event.x,
        ) else {
            debug!("[resize] press ignored, geometry not ready");
            return EventResult::Ignored;
        };

        if self.guide_anchor.is_some() {
            let span = session.span();
            self.guide
                .show(span.top, span.height, session.resize_line_pos(), span.bottom);
        } else {
            self.guide.set_left(session.resize_line_pos());
        }
        self.session = Some(session);
        EventResult::StartDrag
    }

    /// Document-wide pointer move while a drag is open: moves the guide line.
    /// Column widths are left alone until release.
    pub fn on_document_mousemove(&mut self, event: &PointerEvent) -> EventResult {
        let Some(session) = &self.session else {
            return EventResult::Ignored;
        };
        let offset = session.guide_offset(event.x);
        trace!("[drag] x={} guide={}", event.x, offset);
        self.guide.set_left(offset);
        EventResult::Consumed
    }

    /// Document-wide pointer release.
    ///
    /// Commits the guide position as the effective column's new width and
    /// closes the session. The refresh callback runs whether or not a
    /// session was open.
    pub fn on_document_mouseup(&mut self, columns: &mut [Column]) -> EventResult {
        let result = match self.session.take() {
            Some(session) => {
                let width = session.committed_width(self.guide.left());
                match find_column_mut(columns, session.column_key()) {
                    Some(column) => {
                        debug!("[resize] column {} -> {}px", column.key, width);
                        column.width = ColumnWidth::Pixels(width);
                    }
                    None => warn!(
                        "[resize] column {} not found, width {}px dropped",
                        session.column_key(),
                        width
                    ),
                }
                self.close(session);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        };

        (self.refresh)();
        result
    }

    /// Abandon an open drag without changing any width.
    ///
    /// Hosts call this when the release may never arrive: focus loss,
    /// Escape, the grid going away. Returns true if a session was open.
    pub fn cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        debug!("[resize] drag on {} cancelled", session.column_key());
        self.close(session);
        (self.refresh)();
        true
    }

    fn close(&mut self, session: DragSession) {
        self.armed = None;
        session.end(&mut self.host);
        self.guide.hide();
    }
}
