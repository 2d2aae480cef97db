use std::cell::Cell;
use std::rc::Rc;

use gridresize::{
    Bounds, Column, Cursor, EventResult, LayoutHost, MouseButton, PointerEvent, ResizeController,
};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Header cells as (id, left, width), all 40 tall, inside a 400x300 table.
fn create_host(cells: &[(&str, f64, f64)]) -> LayoutHost {
    let mut host = LayoutHost::new();
    host.insert("wrapper", Bounds::new(0.0, 0.0, 400.0, 320.0));
    host.insert("table", Bounds::new(0.0, 0.0, 400.0, 300.0));
    host.set_parent("table", "wrapper");
    for (id, left, width) in cells {
        host.insert(*id, Bounds::new(*left, 0.0, *width, 40.0));
    }
    host.set_header_row(cells.iter().map(|(id, _, _)| *id));
    host
}

fn create_controller(host: LayoutHost) -> ResizeController<LayoutHost> {
    init_logger();
    let refreshes = Rc::new(Cell::new(0));
    let mut controller = ResizeController::new(host, Some("table".to_string()), move || {
        refreshes.set(refreshes.get() + 1)
    });
    controller.set_guide_anchor(Some("guide".to_string()));
    controller
}

fn two_columns() -> (Column, Column) {
    (
        Column::new("a", "A").fixed(100),
        Column::new("b", "B").fixed(100),
    )
}

fn hover(
    controller: &mut ResizeController<LayoutHost>,
    target: &str,
    x: f64,
    column: &Column,
    previous: Option<&Column>,
) -> EventResult {
    controller.on_column_mouseover(&PointerEvent::moved(target, x, 20.0), column, previous)
}

// ============================================================================
// Activation Band
// ============================================================================

#[test]
fn test_hover_near_own_right_edge_arms_current_column() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    for x in [192.0, 195.5, 199.0, 200.0] {
        assert_eq!(hover(&mut controller, "th-b", x, &b, Some(&a)), EventResult::Consumed);
        let armed = controller.armed_target().expect("armed");
        assert_eq!(armed.element, "th-b", "x={x}");
        assert!(!armed.uses_neighbor);
    }
}

#[test]
fn test_hover_near_neighbor_edge_arms_neighbor() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    for x in [99.0, 100.0, 104.0, 108.0] {
        assert_eq!(hover(&mut controller, "th-b", x, &b, Some(&a)), EventResult::Consumed);
        let armed = controller.armed_target().expect("armed");
        assert_eq!(armed.element, "th-a", "x={x}");
        assert!(armed.uses_neighbor);
    }
}

#[test]
fn test_hover_outside_bands_disarms() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    for x in [98.5, 109.0, 150.0, 191.0] {
        assert_eq!(hover(&mut controller, "th-b", x, &b, Some(&a)), EventResult::Ignored);
        assert!(controller.armed_target().is_none(), "x={x}");
        assert_eq!(controller.host().cursor("th-b"), Cursor::Default);
    }
}

#[test]
fn test_first_column_has_no_neighbor() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, _) = two_columns();
    let stray = Column::new("stray", "Stray").fixed(100);

    // A previous column without a header cell to its left can't be targeted.
    assert_eq!(hover(&mut controller, "th-a", 2.0, &a, Some(&stray)), EventResult::Ignored);
    assert!(controller.armed_target().is_none());

    assert_eq!(hover(&mut controller, "th-a", 95.0, &a, None), EventResult::Consumed);
    assert_eq!(controller.armed_target().unwrap().element, "th-a");
}

#[test]
fn test_neighbor_needs_previous_column() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (_, b) = two_columns();

    assert_eq!(hover(&mut controller, "th-b", 102.0, &b, None), EventResult::Ignored);
    assert!(controller.armed_target().is_none());
}

#[test]
fn test_neighbor_wins_when_bands_overlap() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-n", 100.0, 5.0)]));
    let a = Column::new("a", "A").fixed(100);
    let narrow = Column::new("n", "N").fixed(5);

    // 103 is within 8 of both 100 (neighbor) and 105 (own edge).
    assert_eq!(hover(&mut controller, "th-n", 103.0, &narrow, Some(&a)), EventResult::Consumed);
    let armed = controller.armed_target().unwrap();
    assert_eq!(armed.element, "th-a");
    assert!(armed.uses_neighbor);
}

#[test]
fn test_custom_activation_band() {
    let host = create_host(&[("th-a", 0.0, 10.0), ("th-b", 10.0, 10.0)]);
    let mut controller = ResizeController::with_config(
        host,
        Some("table".to_string()),
        gridresize::ResizeConfig::new()
            .activation_band(1.0)
            .default_min_width(2)
            .default_max_width(40),
        || {},
    )
    .unwrap();
    controller.set_guide_anchor(Some("guide".to_string()));
    let a = Column::new("a", "A").fixed(10);
    let b = Column::new("b", "B").fixed(10);

    assert_eq!(hover(&mut controller, "th-b", 19.0, &b, Some(&a)), EventResult::Consumed);
    assert_eq!(hover(&mut controller, "th-b", 18.0, &b, Some(&a)), EventResult::Ignored);
    assert_eq!(hover(&mut controller, "th-b", 10.0, &b, Some(&a)), EventResult::Consumed);
    assert!(controller.armed_target().unwrap().uses_neighbor);
}

// ============================================================================
// Disabled Resize
// ============================================================================

#[test]
fn test_disabled_column_never_arms() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let a = Column::new("a", "A").fixed(100);
    let fixed = Column::new("b", "B").fixed(100).min_width(300).max_width(200);
    let pinned = Column::new("b", "B").fixed(100).min_width(150).max_width(150);

    for column in [&fixed, &pinned] {
        for x in [150.0, 192.0, 196.0, 200.0] {
            assert_eq!(hover(&mut controller, "th-b", x, column, Some(&a)), EventResult::Ignored);
            assert!(controller.armed_target().is_none());
            assert_eq!(controller.host().cursor("th-b"), Cursor::Default);
        }
    }
}

#[test]
fn test_disabled_neighbor_blocks_its_band() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let locked = Column::new("a", "A").fixed(100).min_width(600);
    let b = Column::new("b", "B").fixed(100);

    assert_eq!(hover(&mut controller, "th-b", 104.0, &b, Some(&locked)), EventResult::Ignored);
    assert!(controller.armed_target().is_none());

    // Own edge of the resizable column still works.
    assert_eq!(hover(&mut controller, "th-b", 196.0, &b, Some(&locked)), EventResult::Consumed);
}

// ============================================================================
// Cursor and Scale
// ============================================================================

#[test]
fn test_cursor_follows_arming() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    assert_eq!(controller.host().cursor("th-b"), Cursor::ColResize);

    hover(&mut controller, "th-b", 150.0, &b, Some(&a));
    assert_eq!(controller.host().cursor("th-b"), Cursor::Default);

    // Hovering the neighbor's edge puts the cursor on the hovered cell.
    hover(&mut controller, "th-b", 103.0, &b, Some(&a));
    assert_eq!(controller.host().cursor("th-b"), Cursor::ColResize);
    assert_eq!(controller.host().cursor("th-a"), Cursor::Default);
}

#[test]
fn test_scale_uses_effective_column() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 300.0)]));
    let a = Column::new("a", "A").width("50px");
    let b = Column::new("b", "B").fixed(100);

    hover(&mut controller, "th-b", 395.0, &b, Some(&a));
    assert_eq!(controller.armed_target().unwrap().scale, 3.0);

    hover(&mut controller, "th-b", 101.0, &b, Some(&a));
    assert_eq!(controller.armed_target().unwrap().scale, 2.0);
}

#[test]
fn test_unparseable_width_scales_one_to_one() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let a = Column::new("a", "A");
    let b = Column::new("b", "B").width("fit-content");

    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    assert_eq!(controller.armed_target().unwrap().scale, 1.0);
    hover(&mut controller, "th-b", 101.0, &b, Some(&a));
    assert_eq!(controller.armed_target().unwrap().scale, 1.0);
}

// ============================================================================
// Suppression
// ============================================================================

#[test]
fn test_repeated_hover_is_idempotent() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    let first = controller.armed_target().cloned();
    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    hover(&mut controller, "th-b", 196.0, &b, Some(&a));

    assert_eq!(controller.armed_target().cloned(), first);
    assert_eq!(controller.host().cursor("th-b"), Cursor::ColResize);
    assert_eq!(controller.host().listener_count(), 0);
}

#[test]
fn test_hover_without_guide_anchor_is_inert() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    controller.set_guide_anchor(None);
    let (a, b) = two_columns();

    assert_eq!(hover(&mut controller, "th-b", 196.0, &b, Some(&a)), EventResult::Ignored);
    assert!(controller.armed_target().is_none());
    assert_eq!(controller.host().cursor("th-b"), Cursor::Default);
}

#[test]
fn test_hover_suppressed_during_drag() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    let press = PointerEvent::pressed("th-b", 196.0, 20.0, MouseButton::Left);
    assert_eq!(controller.on_column_mousedown(&press, &b, Some(&a)), EventResult::StartDrag);

    // Pointer wanders over the other cell's center mid-drag.
    assert_eq!(hover(&mut controller, "th-a", 50.0, &a, None), EventResult::Ignored);
    assert_eq!(controller.armed_target().unwrap().element, "th-b");
    assert_eq!(controller.host().cursor("th-b"), Cursor::ColResize);
}

#[test]
fn test_hover_over_unlaid_cell_disarms() {
    let mut controller = create_controller(create_host(&[("th-a", 0.0, 100.0), ("th-b", 100.0, 100.0)]));
    let (a, b) = two_columns();

    hover(&mut controller, "th-b", 196.0, &b, Some(&a));
    assert!(controller.armed_target().is_some());

    assert_eq!(hover(&mut controller, "th-ghost", 196.0, &b, Some(&a)), EventResult::Ignored);
    assert!(controller.armed_target().is_none());
}
