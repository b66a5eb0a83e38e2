//! Terminal setup and the main UI loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app_component::AppComponent;
use super::core::{Component, EventHandler};
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    logger.log("Starting todobox".to_string());
    let mut app = AppComponent::new(&config, logger);
    let mut events = EventHandler::new();

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut events).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppComponent,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let event = events.next_event().await?;
        app.handle_event(event)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
