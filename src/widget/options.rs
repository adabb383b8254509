use super::Suggestion;

/// Callback invoked with the item's position and the suggestion itself.
pub type ItemCallback = Box<dyn FnMut(usize, &Suggestion) + Send>;

pub const DEFAULT_PROPERTY: &str = "name";
pub const DEFAULT_ACTIVE_CLASS: &str = "highlight";

/// Per-instance configuration. Every field, including the active style
/// class, is owned by the instance it configures; nothing is shared across
/// widgets.
pub struct Options {
    /// Static candidate list. Takes priority over `source` when both are set.
    pub list: Option<Vec<String>>,
    /// Remote suggestion endpoint, queried as `GET <source>?query=<term>`.
    pub source: Option<String>,
    /// Field extracted as the label from object-shaped remote results.
    pub property: String,
    /// Style class applied to the single active item.
    pub active_class: String,
    pub(crate) on_select: Option<ItemCallback>,
    pub(crate) on_hover: Option<ItemCallback>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            list: None,
            source: None,
            property: DEFAULT_PROPERTY.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            on_select: None,
            on_hover: None,
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("list", &self.list)
            .field("source", &self.source)
            .field("property", &self.property)
            .field("active_class", &self.active_class)
            .field("on_select", &self.on_select.is_some())
            .field("on_hover", &self.on_hover.is_some())
            .finish()
    }
}
