//! Type-ahead suggestion widget for the terminal.
//!
//! The state machine in [`widget`] is toolkit-independent: it consumes
//! [`widget::WidgetEvent`]s, matches against a static list or asks the host
//! to run a remote lookup, and exposes its items and selection for any
//! render surface. The [`tui`] module is the bundled ratatui surface.

pub mod error;
pub mod matcher;
pub mod remote;
pub mod tui;
pub mod widget;

pub use error::{Error, Result};
pub use widget::{InputState, Suggestion, TypeAhead, WidgetEvent};
