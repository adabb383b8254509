//! Terminal adapter: renders the widget with ratatui and dispatches
//! crossterm events into the state machine.

mod draw;
mod theme;

use std::{
    io::stdout,
    sync::{Arc, Mutex},
};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::{
    error::Result,
    remote::{self, LookupRequest},
    widget::{Suggestion, TypeAhead, WidgetEvent},
};

/// Outcome of one remote lookup, tagged with the query it was issued for
/// so the widget can discard anything superseded.
struct LookupOutcome {
    query: String,
    result: Result<Vec<Suggestion>>,
}

/// Shared slot a select callback can write into for the status line.
pub type SelectionSink = Arc<Mutex<Option<String>>>;

pub async fn run(mut widget: TypeAhead, chosen: SelectionSink) -> Result<()> {
    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let client = reqwest::Client::new();
    let (tx, mut rx) = mpsc::channel::<LookupOutcome>(16);
    let mut events = EventStream::new();
    // Screen rectangle of each dropdown row, refreshed every frame.
    let mut rows: Vec<Rect> = Vec::new();
    let mut should_exit = false;

    while !should_exit {
        terminal.draw(|frame| rows = draw::render(frame, &widget, &chosen))?;

        tokio::select! {
            Some(outcome) = rx.recv() => {
                widget.apply_lookup(&outcome.query, outcome.result);
            }
            Some(Ok(event)) = events.next() => {
                if let Some(request) = dispatch(&mut widget, &event, &rows, &mut should_exit) {
                    spawn_lookup(&client, &tx, request);
                }
            }
        }
    }

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Run one lookup on its own task; the result re-enters through the
/// channel. Superseded requests are not cancelled, only discarded later.
fn spawn_lookup(client: &reqwest::Client, tx: &mpsc::Sender<LookupOutcome>, request: LookupRequest) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = remote::fetch_suggestions(&client, &request).await;
        let _ = tx
            .send(LookupOutcome {
                query: request.query,
                result,
            })
            .await;
    });
}

/// Translate one terminal event and feed it to the widget.
fn dispatch(
    widget: &mut TypeAhead,
    event: &Event,
    rows: &[Rect],
    should_exit: &mut bool,
) -> Option<LookupRequest> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if is_exit_key(key) {
                *should_exit = true;
                return None;
            }
            translate_key(key).and_then(|ev| widget.handle_event(ev))
        }
        Event::Mouse(mouse) => {
            let widget_event = match mouse.kind {
                MouseEventKind::Moved => {
                    hit_row(rows, mouse.column, mouse.row).map(WidgetEvent::Hover)
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    hit_row(rows, mouse.column, mouse.row).map(WidgetEvent::Click)
                }
                _ => None,
            };
            widget_event.and_then(|ev| widget.handle_event(ev))
        }
        _ => None,
    }
}

fn is_exit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn translate_key(key: &KeyEvent) -> Option<WidgetEvent> {
    match key.code {
        KeyCode::Char(c) => Some(WidgetEvent::Char(c)),
        KeyCode::Backspace => Some(WidgetEvent::Backspace),
        KeyCode::Delete => Some(WidgetEvent::Delete),
        KeyCode::Left => Some(WidgetEvent::CursorLeft),
        KeyCode::Right => Some(WidgetEvent::CursorRight),
        KeyCode::Home => Some(WidgetEvent::CursorHome),
        KeyCode::End => Some(WidgetEvent::CursorEnd),
        KeyCode::Up => Some(WidgetEvent::Up),
        KeyCode::Down => Some(WidgetEvent::Down),
        KeyCode::Enter => Some(WidgetEvent::Enter),
        _ => None,
    }
}

fn hit_row(rows: &[Rect], x: u16, y: u16) -> Option<usize> {
    rows.iter().position(|row| {
        row.x <= x && x < row.x + row.width && row.y <= y && y < row.y + row.height
    })
}
