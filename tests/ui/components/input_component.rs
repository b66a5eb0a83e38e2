use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todobox::ui::components::InputComponent;
use todobox::ui::core::{Action, Component};
use todobox::ui::theme::ThemeMode;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_typing_builds_buffer() {
    let mut input = InputComponent::new();
    for c in "milk".chars() {
        assert_eq!(input.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
    assert_eq!(input.text(), "milk");

    input.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(input.text(), "mil");
}

#[test]
fn test_control_chars_are_not_typed() {
    let mut input = InputComponent::new();
    input.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(input.text(), "");

    input.handle_key_events(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    assert_eq!(input.text(), "A");
}

#[test]
fn test_enter_submits_raw_buffer() {
    let mut input = InputComponent::new();
    input.set_text("  padded ");
    assert_eq!(
        input.handle_key_events(key(KeyCode::Enter)),
        Action::Submit("  padded ".to_string())
    );
    // Clearing is left to the app
    assert_eq!(input.text(), "  padded ");
}

#[test]
fn test_escape_depends_on_edit_mode() {
    let mut input = InputComponent::new();
    assert_eq!(input.handle_key_events(key(KeyCode::Esc)), Action::FocusList);
    assert_eq!(input.handle_key_events(key(KeyCode::Tab)), Action::FocusList);

    input.update_data(true, true, ThemeMode::Dark.palette());
    assert_eq!(input.handle_key_events(key(KeyCode::Esc)), Action::CancelEdit);
}

#[test]
fn test_button_label_follows_edit_mode() {
    let mut input = InputComponent::new();
    assert_eq!(input.button_label(), "Add Todo");

    input.update_data(true, true, ThemeMode::Light.palette());
    assert_eq!(input.button_label(), "Update Todo");

    input.update_data(true, false, ThemeMode::Light.palette());
    assert_eq!(input.button_label(), "Add Todo");
}
