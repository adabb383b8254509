//! End-to-end tests driving the widget state machine through full
//! type/navigate/select flows, without a rendering surface.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use typeahead_tui::{
    remote::parse_suggestions,
    widget::{DropdownState, InputState, Suggestion, TypeAhead, WidgetEvent},
};

/// Records every callback invocation as (position, label, payload).
type Log = Arc<Mutex<Vec<(usize, String, Option<Value>)>>>;

fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn recorder(log: &Log) -> impl FnMut(usize, &Suggestion) + Send + 'static {
    let log = Arc::clone(log);
    move |index, item: &Suggestion| {
        log.lock()
            .expect("log lock")
            .push((index, item.label().to_string(), item.payload().cloned()));
    }
}

fn type_str(widget: &mut TypeAhead, text: &str) {
    for c in text.chars() {
        let _ = widget.handle_event(WidgetEvent::Char(c));
    }
}

fn labels(widget: &TypeAhead) -> Vec<&str> {
    widget.items().iter().map(Suggestion::label).collect()
}

#[test]
fn static_list_shows_sorted_word_prefix_matches() {
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(vec![
            "Apple".to_string(),
            "Banana".to_string(),
            "apricot".to_string(),
        ])
        .build()
        .expect("widget should build");

    type_str(&mut widget, "ap");

    assert_eq!(widget.state(), DropdownState::Open);
    assert_eq!(labels(&widget), ["Apple", "apricot"]);
}

#[test]
fn empty_candidate_list_keeps_dropdown_hidden() {
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(Vec::new())
        .build()
        .expect("widget should build");

    type_str(&mut widget, "x");

    assert_eq!(widget.state(), DropdownState::Hidden);
    assert!(widget.items().is_empty());
}

#[test]
fn arrows_then_enter_select_the_second_item() {
    let selections = new_log();
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(vec!["aa".to_string(), "ab".to_string(), "ac".to_string()])
        .on_select(recorder(&selections))
        .build()
        .expect("widget should build");

    type_str(&mut widget, "a");
    assert_eq!(widget.items().len(), 3);

    let _ = widget.handle_event(WidgetEvent::Down);
    let _ = widget.handle_event(WidgetEvent::Down);
    let _ = widget.handle_event(WidgetEvent::Enter);

    let log = selections.lock().expect("log lock");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, 1);
    assert_eq!(log[0].1, "ab");
    // The selected item is the one active highlight left.
    assert_eq!(widget.selected(), Some(1));
}

#[test]
fn selection_stays_within_bounds_at_both_ends() {
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(vec!["aa".to_string(), "ab".to_string()])
        .build()
        .expect("widget should build");

    type_str(&mut widget, "a");

    // Up before anything is selected: no-op.
    let _ = widget.handle_event(WidgetEvent::Up);
    assert_eq!(widget.selected(), None);

    let _ = widget.handle_event(WidgetEvent::Down);
    let _ = widget.handle_event(WidgetEvent::Down);
    assert_eq!(widget.selected(), Some(1));

    // Down past the last item: no-op.
    let _ = widget.handle_event(WidgetEvent::Down);
    assert_eq!(widget.selected(), Some(1));

    let _ = widget.handle_event(WidgetEvent::Up);
    let _ = widget.handle_event(WidgetEvent::Up);
    assert_eq!(widget.selected(), Some(0));
}

#[test]
fn hover_moves_selection_and_fires_callback() {
    let hovers = new_log();
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(vec!["aa".to_string(), "ab".to_string()])
        .on_hover(recorder(&hovers))
        .build()
        .expect("widget should build");

    type_str(&mut widget, "a");
    let _ = widget.handle_event(WidgetEvent::Hover(1));

    assert_eq!(widget.selected(), Some(1));
    let log = hovers.lock().expect("log lock");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].1, "ab");
}

#[test]
fn click_selects_regardless_of_current_selection() {
    let selections = new_log();
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .list(vec!["aa".to_string(), "ab".to_string(), "ac".to_string()])
        .on_select(recorder(&selections))
        .build()
        .expect("widget should build");

    type_str(&mut widget, "a");
    let _ = widget.handle_event(WidgetEvent::Down);
    assert_eq!(widget.selected(), Some(0));

    let _ = widget.handle_event(WidgetEvent::Click(2));

    assert_eq!(widget.selected(), Some(2));
    let log = selections.lock().expect("log lock");
    assert_eq!(log[0].1, "ac");
}

#[test]
fn late_response_for_a_superseded_query_is_ignored() {
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .source("http://example.test/suggest")
        .build()
        .expect("widget should build");

    let first = widget
        .handle_event(WidgetEvent::Char('a'))
        .expect("first lookup issued");
    let second = widget
        .handle_event(WidgetEvent::Char('b'))
        .expect("second lookup issued");
    assert_eq!(first.query, "a");
    assert_eq!(second.query, "ab");

    // The newer response lands first, then the stale one.
    widget.apply_lookup(
        &second.query,
        parse_suggestions(r#"["abacus","abbey"]"#, &second.property),
    );
    widget.apply_lookup(
        &first.query,
        parse_suggestions(r#"["apple","apricot"]"#, &first.property),
    );

    assert_eq!(labels(&widget), ["abacus", "abbey"]);
}

#[test]
fn malformed_response_reports_and_keeps_previous_items() {
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .source("http://example.test/suggest")
        .build()
        .expect("widget should build");

    let first = widget
        .handle_event(WidgetEvent::Char('a'))
        .expect("lookup issued");
    widget.apply_lookup(&first.query, parse_suggestions(r#"["apple"]"#, "name"));
    assert_eq!(widget.state(), DropdownState::Open);

    let second = widget
        .handle_event(WidgetEvent::Char('b'))
        .expect("lookup issued");
    widget.apply_lookup(&second.query, parse_suggestions("not json", "name"));

    // Not an empty-result clear: the dropdown is left exactly as it was.
    assert_eq!(labels(&widget), ["apple"]);
    assert_eq!(widget.state(), DropdownState::Open);
}

#[test]
fn object_responses_deliver_payloads_through_selection() {
    let selections = new_log();
    let mut widget = TypeAhead::builder()
        .input(InputState::default())
        .source("http://example.test/suggest")
        .on_select(recorder(&selections))
        .build()
        .expect("widget should build");

    let request = widget
        .handle_event(WidgetEvent::Char('p'))
        .expect("lookup issued");
    let body = r#"[{"name":"plum","color":"purple"},{"color":"red"},{"name":"pear"}]"#;
    widget.apply_lookup(&request.query, parse_suggestions(body, &request.property));

    // The record without a label was dropped with its payload.
    assert_eq!(labels(&widget), ["plum", "pear"]);

    let _ = widget.handle_event(WidgetEvent::Down);
    let _ = widget.handle_event(WidgetEvent::Enter);

    let log = selections.lock().expect("log lock");
    assert_eq!(log[0].1, "plum");
    let payload = log[0].2.as_ref().expect("payload attached");
    assert_eq!(payload["color"], "purple");
}
