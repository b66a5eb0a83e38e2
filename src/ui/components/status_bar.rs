//! Status bar component

use crate::ui::core::Focus;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the current focus
    pub fn hint_text(focus: Focus, editing: bool, has_todos: bool) -> String {
        match focus {
            Focus::Input if editing => "Enter: update • Esc: cancel edit • Ctrl+C: quit".to_string(),
            Focus::Input => "Enter: add • Esc/Tab: back to list • Ctrl+C: quit".to_string(),
            Focus::List => {
                let mut hints = vec!["a: add", "Space: toggle", "e: edit", "d: delete"];
                if has_todos {
                    hints.push("D: delete all");
                }
                hints.extend(["t: theme", "?: help", "q: quit"]);
                hints.join(" • ")
            }
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, text: String, palette: &Palette) {
        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
