use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::{Palette, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
LIST
----
j/k, Up/Down   Move selection
Space, Enter   Toggle completion
e              Edit selected todo
d              Delete selected todo
D              Delete all todos

INPUT
-----
a, i, Tab      Focus the input field
Enter          Add todo (or update the one being edited)
Esc            Cancel edit / back to list

GENERAL
-------
t              Switch light/dark theme
I              Cycle icon set
x              Close notification
G              Show logs
?              Toggle this help
q, Ctrl+C      Quit
";

/// Modal overlay for help and logs
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub logs: Vec<String>,
    pub palette: Palette,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            logs: Vec::new(),
            palette: ThemeMode::default().palette(),
        }
    }

    pub fn update_data(&mut self, logs: Vec<String>, palette: Palette) {
        self.logs = logs;
        self.palette = palette;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.dialog_type, key.code) {
            (Some(_), KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Help), KeyCode::Char('?')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Char('G')) => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type else {
            return;
        };

        let (width, height) = LayoutManager::dialog_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, body) = match dialog_type {
            DialogType::Help => (DIALOG_TITLE_HELP, HELP_TEXT.trim_start().to_string()),
            DialogType::Logs if self.logs.is_empty() => (DIALOG_TITLE_LOGS, "No log entries yet.".to_string()),
            DialogType::Logs => (DIALOG_TITLE_LOGS, self.logs.join("\n")),
        };

        let dialog = Paragraph::new(body)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(self.palette.primary)),
            )
            .style(self.palette.base())
            .wrap(Wrap { trim: false });

        f.render_widget(dialog, area);
    }
}
