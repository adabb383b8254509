use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{theme, SelectionSink};
use crate::widget::{DropdownState, TypeAhead};

/// Render the input line, the dropdown and the status line. Returns one
/// screen rectangle per rendered dropdown row for mouse hit testing.
pub fn render(frame: &mut Frame, widget: &TypeAhead, chosen: &SelectionSink) -> Vec<Rect> {
    let [input_area, dropdown_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_input(frame, widget, input_area);
    let rows = render_dropdown(frame, widget, dropdown_area);
    render_status(frame, chosen, status_area);
    rows
}

fn render_input(frame: &mut Frame, widget: &TypeAhead, area: Rect) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));

    let paragraph = Paragraph::new(widget.input().value())
        .block(block)
        .style(theme::ROW);
    frame.render_widget(paragraph, area);

    let cursor_x = area.x + 1 + widget.input().cursor() as u16;
    frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
}

fn render_dropdown(frame: &mut Frame, widget: &TypeAhead, area: Rect) -> Vec<Rect> {
    if widget.state() != DropdownState::Open {
        return Vec::new();
    }

    let active_style = theme::style_for(widget.active_class());
    let mut rows = Vec::new();

    for (i, item) in widget.items().iter().enumerate() {
        if i as u16 >= area.height {
            break;
        }
        let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
        let style = if widget.selected() == Some(i) {
            active_style
        } else {
            theme::ROW
        };
        frame.render_widget(Paragraph::new(item.label()).style(style), row);
        rows.push(row);
    }

    rows
}

fn render_status(frame: &mut Frame, chosen: &SelectionSink, area: Rect) {
    let text = chosen
        .lock()
        .ok()
        .and_then(|slot| slot.clone())
        .map_or_else(
            || "Type to search. Arrows + Enter select, Esc quits.".to_string(),
            |label| format!("Selected: {label}"),
        );

    frame.render_widget(Paragraph::new(text).style(theme::STATUS), area);
}
