//! Keyboard event handling tests
//!
//! Tests for keyboard input handling: quit keys, focus movement, numeric
//! entry, and select cycling, exercised the way the event loop routes them.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use scorecard::form::FormSpec;
use scorecard::ui::app::Focus;
use scorecard::ui::theme::Theme;
use scorecard::ui::App;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Helper to create a test app over the built-in form
fn create_test_app() -> App {
    App::new(FormSpec::built_in(), None, Theme::default_theme().clone())
}

/// Route a key the way the event loop does
fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_option(-1),
        KeyCode::Right => app.cycle_option(1),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => {
            if app.focus == Focus::Submit {
                app.submit();
            } else {
                app.focus_next();
            }
        }
        KeyCode::Char(c) => {
            if !app.handle_input(c) && matches!(c, 'q' | 'Q') {
                app.should_quit = true;
            }
        }
        _ => {}
    }
}

#[tokio::test]
async fn test_esc_quits() {
    let mut app = create_test_app();
    assert!(!app.should_quit);

    if let Event::Key(key) = key_event(KeyCode::Esc) {
        handle_key(&mut app, key.code);
    }
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_q_quits_when_not_consumed() {
    let mut app = create_test_app();

    // Focus sits on the select, which does not consume characters
    handle_key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_digits_do_not_quit() {
    let mut app = create_test_app();

    // Move to the first numeric field and type
    handle_key(&mut app, KeyCode::Tab);
    handle_key(&mut app, KeyCode::Char('8'));
    handle_key(&mut app, KeyCode::Char('5'));

    assert!(!app.should_quit);
    assert_eq!(app.fields[1].value, "85");
}

#[tokio::test]
async fn test_tab_and_backtab_move_focus() {
    let mut app = create_test_app();
    assert_eq!(app.focus, Focus::Field(0));

    handle_key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Field(1));

    handle_key(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Field(0));
}

#[tokio::test]
async fn test_arrows_cycle_select_options() {
    let mut app = create_test_app();

    handle_key(&mut app, KeyCode::Right);
    assert_eq!(app.fields[0].value, "Mathematics");

    handle_key(&mut app, KeyCode::Right);
    assert_eq!(app.fields[0].value, "Science");

    handle_key(&mut app, KeyCode::Left);
    assert_eq!(app.fields[0].value, "Mathematics");
}

#[tokio::test]
async fn test_space_cycles_select_options() {
    let mut app = create_test_app();

    handle_key(&mut app, KeyCode::Char(' '));
    assert_eq!(app.fields[0].value, "Mathematics");
}

#[tokio::test]
async fn test_enter_advances_then_submits() {
    let mut app = create_test_app();

    // Fill the form: select an option, then two required scores
    handle_key(&mut app, KeyCode::Right);
    handle_key(&mut app, KeyCode::Enter);
    handle_key(&mut app, KeyCode::Char('9'));
    handle_key(&mut app, KeyCode::Char('5'));
    handle_key(&mut app, KeyCode::Enter);
    handle_key(&mut app, KeyCode::Char('8'));
    handle_key(&mut app, KeyCode::Char('0'));
    handle_key(&mut app, KeyCode::Enter); // to the optional field
    handle_key(&mut app, KeyCode::Enter); // to the submit control
    assert_eq!(app.focus, Focus::Submit);

    handle_key(&mut app, KeyCode::Enter);
    assert!(app.loading, "valid form should submit");
}

#[tokio::test]
async fn test_enter_on_invalid_form_blocks() {
    let mut app = create_test_app();

    // Jump straight to submit with everything empty
    handle_key(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Submit);

    handle_key(&mut app, KeyCode::Enter);
    assert!(!app.loading);
    assert!(app.fields[0].error.is_some());
}

#[tokio::test]
async fn test_backspace_edits_numeric_field() {
    let mut app = create_test_app();

    handle_key(&mut app, KeyCode::Tab);
    handle_key(&mut app, KeyCode::Char('7'));
    handle_key(&mut app, KeyCode::Char('5'));
    handle_key(&mut app, KeyCode::Backspace);

    assert_eq!(app.fields[1].value, "7");
}
