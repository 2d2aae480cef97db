//! Document-level pointer listeners.
//!
//! While a drag is running the pointer can leave the grid, so move and
//! release events have to come from the whole document rather than the
//! header cells. The host owns the actual listener table; the drag session
//! holds a [`DocumentSubscriptions`] for as long as it runs.

use log::trace;

/// Kind of document listener a drag needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseMove,
    MouseUp,
}

/// Handle returned by [`DocumentEvents::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Document-scoped listener registration.
pub trait DocumentEvents {
    /// Register a listener; the host starts routing events of `kind` to the
    /// controller's document handlers.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Remove a listener added with [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, id: ListenerId);

    /// Suppress (or restore) text selection and native drag start.
    fn set_selection_suppressed(&mut self, suppressed: bool);
}

/// The two listeners a drag session holds, plus selection suppression.
///
/// Released by value, so the same subscription can't be removed twice.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "subscriptions leak unless released"]
pub struct DocumentSubscriptions {
    mouse_move: ListenerId,
    mouse_up: ListenerId,
}

impl DocumentSubscriptions {
    /// Register the move and release listeners and suppress selection.
    pub fn acquire(doc: &mut impl DocumentEvents) -> Self {
        let mouse_up = doc.add_listener(ListenerKind::MouseUp);
        let mouse_move = doc.add_listener(ListenerKind::MouseMove);
        doc.set_selection_suppressed(true);
        trace!(
            "[document] acquired move={:?} up={:?}",
            mouse_move,
            mouse_up
        );
        Self {
            mouse_move,
            mouse_up,
        }
    }

    /// Remove both listeners and restore selection.
    pub fn release(self, doc: &mut impl DocumentEvents) {
        doc.remove_listener(self.mouse_move);
        doc.remove_listener(self.mouse_up);
        doc.set_selection_suppressed(false);
        trace!(
            "[document] released move={:?} up={:?}",
            self.mouse_move,
            self.mouse_up
        );
    }
}
