//! Toolkit-independent type-ahead widget: state machine, options and input
//! editing. Rendering and event dispatch live in [`crate::tui`].

mod controller;
mod input;
mod options;
mod suggestion;

use std::sync::atomic::{AtomicU64, Ordering};

pub use controller::{DropdownState, TypeAhead, TypeAheadBuilder, WidgetEvent};
pub use input::InputState;
pub use options::Options;
pub use suggestion::Suggestion;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier of one widget instance, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate the next id. The counter is never reset.
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}
