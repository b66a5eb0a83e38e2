use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use todobox::config::Config;
use todobox::logger::Logger;
use todobox::todos::EditSession;
use todobox::ui::core::{DialogType, EventType, Focus};
use todobox::ui::theme::ThemeMode;
use todobox::ui::AppComponent;

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

fn press_with(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut AppComponent, text: &str) {
    if app.focus() != Focus::Input {
        press(app, KeyCode::Char('a'));
    }
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn notification_message(app: &AppComponent) -> Option<&'static str> {
    app.todos().notification().filter(|n| n.visible).map(|n| n.message())
}

#[tokio::test]
async fn test_starts_idle_with_configured_theme() {
    let app = app();
    assert_eq!(app.theme(), ThemeMode::Dark);
    assert_eq!(app.focus(), Focus::List);
    assert!(app.todos().is_empty());
    assert_eq!(app.submit_label(), "Add Todo");

    let mut config = Config::default();
    config.ui.theme = ThemeMode::Light;
    let app = AppComponent::new(&config, Logger::new());
    assert_eq!(app.theme(), ThemeMode::Light);
}

#[tokio::test]
async fn test_typing_and_enter_adds_todo() {
    let mut app = app();
    add(&mut app, "Buy milk");

    assert_eq!(app.todos().len(), 1);
    assert_eq!(app.todos().todos()[0].text, "Buy milk");
    assert_eq!(app.input_text(), "");
    assert_eq!(notification_message(&app), Some("Todo added"));
    // Input keeps focus for quick entry
    assert_eq!(app.focus(), Focus::Input);
    assert!(app.timer().is_armed());
}

#[tokio::test]
async fn test_blank_submit_warns_and_clears_input() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.todos().is_empty());
    assert_eq!(app.input_text(), "");
    assert_eq!(notification_message(&app), Some("Todo cannot be empty"));
}

#[tokio::test]
async fn test_list_keys_do_not_type_into_input() {
    let mut app = app();
    add(&mut app, "one");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::List);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.todos().todos()[0].completed);
    assert_eq!(app.input_text(), "");
}

#[tokio::test]
async fn test_edit_flow_prefills_and_updates_in_place() {
    let mut app = app();
    add(&mut app, "first");
    add(&mut app, "second");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected_index(), 0);

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.focus(), Focus::Input);
    assert_eq!(app.input_text(), "first");
    assert_eq!(app.submit_label(), "Update Todo");

    for _ in 0.."first".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "  1st ");
    press(&mut app, KeyCode::Enter);

    let texts: Vec<&str> = app.todos().todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["1st", "second"]);
    assert_eq!(app.todos().edit_session(), EditSession::Idle);
    assert_eq!(notification_message(&app), Some("Todo edited"));
    assert_eq!(app.focus(), Focus::List);
    assert_eq!(app.submit_label(), "Add Todo");
}

#[tokio::test]
async fn test_escape_cancels_edit() {
    let mut app = app();
    add(&mut app, "task");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('e'));
    assert!(app.todos().edit_session().is_editing());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.todos().edit_session(), EditSession::Idle);
    assert_eq!(app.input_text(), "");
    assert_eq!(app.focus(), Focus::List);
    assert_eq!(app.todos().todos()[0].text, "task");
}

#[tokio::test]
async fn test_delete_and_delete_all() {
    let mut app = app();
    add(&mut app, "a");
    add(&mut app, "b");
    add(&mut app, "c");
    press(&mut app, KeyCode::Esc);

    // Selection follows the newest todo
    assert_eq!(app.selected_index(), 2);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.todos().len(), 2);
    assert_eq!(notification_message(&app), Some("Todo deleted"));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(notification_message(&app), None);
    assert!(!app.timer().is_armed());

    press(&mut app, KeyCode::Char('D'));
    assert!(app.todos().is_empty());
    // Bulk delete is silent
    assert_eq!(notification_message(&app), None);
}

#[tokio::test]
async fn test_deleting_edited_todo_clears_input() {
    let mut app = app();
    add(&mut app, "a");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input_text(), "a");

    app.handle_app_action(todobox::ui::core::Action::Remove(app.todos().todos()[0].id));
    assert_eq!(app.input_text(), "");
    assert_eq!(app.todos().edit_session(), EditSession::Idle);
}

#[tokio::test]
async fn test_theme_toggle_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), ThemeMode::Light);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), ThemeMode::Dark);
}

#[tokio::test]
async fn test_dialogs_open_and_close() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog(), Some(DialogType::Help));

    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), ThemeMode::Dark);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog(), None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog(), Some(DialogType::Logs));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog(), None);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.input_text(), "q");
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_notification_expires_after_configured_duration() {
    let mut config = Config::default();
    config.notifications.duration_ms = 500;
    let mut app = AppComponent::new(&config, Logger::new());

    add(&mut app, "soon gone");
    assert_eq!(notification_message(&app), Some("Todo added"));

    tokio::time::sleep(Duration::from_millis(700)).await;
    app.handle_event(EventType::Tick).unwrap();

    assert_eq!(notification_message(&app), None);
    assert_eq!(app.todos().len(), 1);
}

#[tokio::test]
async fn test_newer_notification_survives_older_timer() {
    let mut config = Config::default();
    config.notifications.duration_ms = 500;
    let mut app = AppComponent::new(&config, Logger::new());

    add(&mut app, "first");
    tokio::time::sleep(Duration::from_millis(300)).await;
    add(&mut app, "second");
    tokio::time::sleep(Duration::from_millis(300)).await;
    app.handle_event(EventType::Tick).unwrap();

    // The first countdown was replaced, so the second message is still up
    assert_eq!(notification_message(&app), Some("Todo added"));
    assert_eq!(app.todos().notification().unwrap().seq, 2);
}
