pub mod column;
pub mod config;
pub mod controller;
pub mod document;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod guide;
pub mod hover;
pub mod layout;

pub use column::{find_column_mut, Column, ColumnWidth, ResizeConstraints};
pub use config::{ConfigError, ResizeConfig};
pub use controller::ResizeController;
pub use document::{DocumentEvents, DocumentSubscriptions, ListenerId, ListenerKind};
pub use drag::DragSession;
pub use event::{EventResult, MouseButton, PointerEvent};
pub use geometry::{Bounds, Cursor, ElementId, GeometryProvider};
pub use guide::GuideLine;
pub use hover::{detect_hover, ArmedTarget, HoverOutcome};
pub use layout::LayoutHost;
