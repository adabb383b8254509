//! The widget state machine: input-change detection, dropdown rebuild,
//! selection tracking and select/hover dispatch.

use tracing::{debug, warn};

use super::{InputState, Options, Suggestion, WidgetId};
use crate::{
    error::{ConfigError, Result},
    matcher,
    remote::LookupRequest,
};

/// Dropdown visibility state. `Hidden` means no items are rendered at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Hidden,
    Open,
}

/// Events the host feeds into the widget. Edit events mutate the bound
/// input; the rest drive selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Char(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Up,
    Down,
    Enter,
    /// Pointer moved over the item at this position.
    Hover(usize),
    /// Pointer pressed on the item at this position.
    Click(usize),
}

/// One type-ahead instance bound to an input.
///
/// All mutation happens synchronously inside [`TypeAhead::handle_event`] and
/// [`TypeAhead::apply_lookup`]; remote lookups run outside the widget and
/// re-enter through `apply_lookup`, which discards anything stale.
#[derive(Debug)]
pub struct TypeAhead {
    id: WidgetId,
    input: InputState,
    /// Last input value the widget reacted to.
    snapshot: String,
    items: Vec<Suggestion>,
    /// Position of the single active item, `None` when nothing is active.
    selected: Option<usize>,
    state: DropdownState,
    options: Options,
}

impl TypeAhead {
    pub fn builder() -> TypeAheadBuilder {
        TypeAheadBuilder::default()
    }

    pub const fn id(&self) -> WidgetId {
        self.id
    }

    pub const fn input(&self) -> &InputState {
        &self.input
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub const fn state(&self) -> DropdownState {
        self.state
    }

    pub fn active_class(&self) -> &str {
        &self.options.active_class
    }

    /// Feed one event through the state machine. Returns a lookup request
    /// when the host must query the remote source for the new input value.
    pub fn handle_event(&mut self, event: WidgetEvent) -> Option<LookupRequest> {
        match event {
            WidgetEvent::Char(c) => {
                self.input.insert(c);
                return self.refresh();
            }
            WidgetEvent::Backspace => {
                self.input.backspace();
                return self.refresh();
            }
            WidgetEvent::Delete => {
                self.input.delete();
                return self.refresh();
            }
            WidgetEvent::CursorLeft => self.input.move_left(),
            WidgetEvent::CursorRight => self.input.move_right(),
            WidgetEvent::CursorHome => self.input.move_home(),
            WidgetEvent::CursorEnd => self.input.move_end(),
            WidgetEvent::Up => self.move_up(),
            WidgetEvent::Down => self.move_down(),
            WidgetEvent::Enter => {
                if let Some(index) = self.selected {
                    self.trigger_select(index);
                }
            }
            WidgetEvent::Hover(index) => self.trigger_hover(index),
            WidgetEvent::Click(index) => {
                if index < self.items.len() {
                    self.trigger_select(index);
                }
            }
        }
        None
    }

    /// Deliver the outcome of a remote lookup issued for `query`.
    ///
    /// Responses for anything but the latest observed input value are
    /// discarded, so an early request resolving late can never clobber a
    /// newer result (last-request-wins). Failed lookups are reported and
    /// leave the dropdown exactly as it was.
    pub fn apply_lookup(&mut self, query: &str, result: Result<Vec<Suggestion>>) {
        if query != self.snapshot {
            debug!(
                widget = self.id.value(),
                "discarding stale lookup for {query:?}, current is {:?}", self.snapshot
            );
            return;
        }
        match result {
            Ok(items) => self.update_dropdown(items),
            Err(e) => warn!(widget = self.id.value(), "lookup for {query:?} failed: {e}"),
        }
    }

    /// React to an input edit: when the value actually changed, run the
    /// static matcher or hand back a remote request for the host to issue.
    fn refresh(&mut self) -> Option<LookupRequest> {
        let value = self.input.value().to_string();
        if value == self.snapshot {
            return None;
        }
        self.snapshot.clone_from(&value);

        if let Some(list) = &self.options.list {
            let items = matcher::find_matches(&value, list)
                .into_iter()
                .map(Suggestion::new)
                .collect();
            self.update_dropdown(items);
            return None;
        }

        if let Some(source) = &self.options.source {
            // An emptied input clears the dropdown without a network call.
            if value.is_empty() {
                self.update_dropdown(Vec::new());
                return None;
            }
            return Some(LookupRequest {
                source: source.clone(),
                query: value,
                property: self.options.property.clone(),
            });
        }

        None
    }

    /// Replace all items wholesale. Selection resets; an empty set hides
    /// the dropdown.
    fn update_dropdown(&mut self, items: Vec<Suggestion>) {
        self.selected = None;
        self.items = items;
        self.state = if self.items.is_empty() {
            DropdownState::Hidden
        } else {
            DropdownState::Open
        };
    }

    fn move_down(&mut self) {
        let next = match self.selected {
            None if !self.items.is_empty() => 0,
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => return,
        };
        self.selected = Some(next);
    }

    fn move_up(&mut self) {
        match self.selected {
            Some(i) if i > 0 => self.selected = Some(i - 1),
            _ => {}
        }
    }

    /// Bounds-checked selection move; out-of-range positions are ignored.
    fn set_selected(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Shared by Enter and click: the chosen item becomes the single active
    /// one, then the select callback fires.
    fn trigger_select(&mut self, index: usize) {
        if !self.set_selected(index) {
            return;
        }
        if let Some(callback) = self.options.on_select.as_mut() {
            callback(index, &self.items[index]);
        }
    }

    fn trigger_hover(&mut self, index: usize) {
        if !self.set_selected(index) {
            return;
        }
        if let Some(callback) = self.options.on_hover.as_mut() {
            callback(index, &self.items[index]);
        }
    }
}

/// Builds a [`TypeAhead`]. Binding an input is mandatory; everything else
/// has defaults.
#[derive(Default)]
pub struct TypeAheadBuilder {
    input: Option<InputState>,
    options: Options,
}

impl TypeAheadBuilder {
    /// Bind the input the widget observes. Required.
    #[must_use]
    pub fn input(mut self, input: InputState) -> Self {
        self.input = Some(input);
        self
    }

    #[must_use]
    pub fn list(mut self, list: Vec<String>) -> Self {
        self.options.list = Some(list);
        self
    }

    #[must_use]
    pub fn source(mut self, url: impl Into<String>) -> Self {
        self.options.source = Some(url.into());
        self
    }

    #[must_use]
    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.options.property = property.into();
        self
    }

    #[must_use]
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.options.active_class = class.into();
        self
    }

    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(usize, &Suggestion) + Send + 'static) -> Self {
        self.options.on_select = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_hover(mut self, callback: impl FnMut(usize, &Suggestion) + Send + 'static) -> Self {
        self.options.on_hover = Some(Box::new(callback));
        self
    }

    /// Fails fast with [`ConfigError::MissingInput`] when no input was
    /// bound; no instance is created in that case.
    pub fn build(self) -> Result<TypeAhead> {
        let input = self.input.ok_or(ConfigError::MissingInput)?;
        let snapshot = input.value().to_string();
        Ok(TypeAhead {
            id: WidgetId::next(),
            input,
            snapshot,
            items: Vec::new(),
            selected: None,
            state: DropdownState::Hidden,
            options: self.options,
        })
    }
}
