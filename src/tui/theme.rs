//! Styling for the dropdown. An instance's active class names an entry in
//! this table.

use ratatui::style::{Color, Modifier, Style};

pub const ROW: Style = Style::new().fg(Color::White);
pub const STATUS: Style = Style::new().fg(Color::DarkGray);
pub const BORDER: Color = Color::Cyan;

/// Resolve an active-class name to a concrete style. Unknown classes fall
/// back to reversed video so the active row is always visible.
pub fn style_for(class: &str) -> Style {
    match class {
        "highlight" => Style::new().fg(Color::Black).bg(Color::Yellow),
        "accent" => Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        _ => Style::new().add_modifier(Modifier::REVERSED),
    }
}
