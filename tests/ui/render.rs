use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todobox::config::Config;
use todobox::logger::Logger;
use todobox::ui::core::{Component, EventType};
use todobox::ui::AppComponent;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 20;

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

#[tokio::test]
async fn test_initial_screen() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    let screen = draw(&mut app);

    assert!(screen.contains("Todo App"));
    assert!(screen.contains("Add Todo"));
    assert!(screen.contains("Nothing to do"));
    assert!(screen.contains("dark"));
}

#[tokio::test]
async fn test_added_todo_and_snackbar_are_drawn() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    press(&mut app, KeyCode::Char('a'));
    for c in "Buy milk".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let screen = draw(&mut app);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Todo added"));
    assert!(screen.contains("[x] Close"));
    assert!(screen.contains("(0/1)"));
}

#[tokio::test]
async fn test_edit_mode_shows_update_control() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('e'));

    let screen = draw(&mut app);
    assert!(screen.contains("Update Todo"));
    assert!(screen.contains("Cancel Edit"));
    assert!(screen.contains("editing"));
}

#[tokio::test]
async fn test_help_dialog_overlays_screen() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    press(&mut app, KeyCode::Char('?'));

    let screen = draw(&mut app);
    assert!(screen.contains("Toggle completion"));
}

#[tokio::test]
async fn test_light_theme_indicator() {
    let mut app = AppComponent::new(&Config::default(), Logger::new());
    press(&mut app, KeyCode::Char('t'));

    let screen = draw(&mut app);
    assert!(screen.contains("light"));
}
