//! Hover detection over header cells.
//!
//! Decides, for a pointer position over a header cell, whether the pointer
//! is close enough to a column boundary to arm a resize, and which column
//! that resize would target.

use crate::column::{Column, ColumnWidth};
use crate::config::ResizeConfig;
use crate::event::PointerEvent;
use crate::geometry::{ElementId, GeometryProvider};

/// A boundary ready to be dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmedTarget {
    /// Element whose right edge is the boundary: the hovered cell, or its
    /// left sibling when resizing the neighbor.
    pub element: ElementId,
    /// Header cell the pointer was over when the boundary armed.
    pub hovered: ElementId,
    /// Key of the column a drag from here would resize.
    pub column_key: String,
    /// True when the boundary belongs to the previous column.
    pub uses_neighbor: bool,
    /// Rendered width over logical width of the effective column.
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverOutcome {
    Disarmed,
    Armed(ArmedTarget),
}

/// Work out what hovering at `event` over `column` arms.
///
/// The neighbor's boundary is checked first and wins when both bands
/// overlap (narrow columns). A neighbor is only considered when the host
/// reports a header cell to the left and the grid supplied its column.
pub fn detect_hover<G: GeometryProvider + ?Sized>(
    geometry: &G,
    config: &ResizeConfig,
    event: &PointerEvent,
    column: &Column,
    previous: Option<&Column>,
) -> HoverOutcome {
    let Some(cell) = geometry.bounds_of(&event.target) else {
        return HoverOutcome::Disarmed;
    };

    let neighbor = previous.and_then(|col| {
        let id = geometry.previous_header_cell(&event.target)?;
        let bounds = geometry.bounds_of(&id)?;
        Some((id, bounds, col))
    });

    let x = event.x;
    let near_own_edge = cell.right - x <= config.activation_band;
    let near_neighbor = neighbor.as_ref().is_some_and(|(_, bounds, _)| {
        let distance = x - bounds.right;
        distance >= -config.neighbor_tolerance && distance <= config.activation_band
    });

    let (element, bounds, effective, uses_neighbor) = match neighbor {
        Some((id, bounds, col)) if near_neighbor => (id, bounds, col, true),
        _ => (event.target.clone(), cell, column, false),
    };

    if !effective.resize.is_resizable(config) || !(near_own_edge || near_neighbor) {
        return HoverOutcome::Disarmed;
    }

    HoverOutcome::Armed(ArmedTarget {
        element,
        hovered: event.target.clone(),
        column_key: effective.key.clone(),
        uses_neighbor,
        scale: scale_factor(bounds.width, &effective.width),
    })
}

/// Ratio between a column's rendered width and its logical width.
///
/// Widths that don't parse to a positive number map pixel for pixel.
pub fn scale_factor(rendered_width: f64, width: &ColumnWidth) -> f64 {
    width
        .numeric()
        .filter(|w| *w > 0)
        .map(|w| rendered_width / w as f64)
        .filter(|scale| scale.is_finite() && *scale > 0.0)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(200.0, &ColumnWidth::Pixels(100)), 2.0);
        assert_eq!(scale_factor(150.0, &ColumnWidth::Css("50%".into())), 3.0);
        assert_eq!(scale_factor(200.0, &ColumnWidth::Auto), 1.0);
        assert_eq!(scale_factor(200.0, &ColumnWidth::Pixels(0)), 1.0);
        assert_eq!(scale_factor(0.0, &ColumnWidth::Pixels(100)), 1.0);
    }
}
