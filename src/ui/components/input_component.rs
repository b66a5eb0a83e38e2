use crate::constants::{BUTTON_ADD, BUTTON_CANCEL_EDIT, BUTTON_UPDATE, INPUT_TITLE_ADD, INPUT_TITLE_EDIT};
use crate::ui::core::{Action, Component};
use crate::ui::theme::{Palette, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text field the user types todos into
pub struct InputComponent {
    pub buffer: String,
    pub focused: bool,
    pub editing: bool,
    pub palette: Palette,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            editing: false,
            palette: ThemeMode::default().palette(),
        }
    }

    pub fn update_data(&mut self, focused: bool, editing: bool, palette: Palette) {
        self.focused = focused;
        self.editing = editing;
        self.palette = palette;
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Label of the submit control: adding or updating
    pub fn button_label(&self) -> &'static str {
        if self.editing {
            BUTTON_UPDATE
        } else {
            BUTTON_ADD
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let key_style = Style::default().fg(self.palette.success).add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled("[Enter] ", key_style),
            Span::styled(self.button_label(), key_style),
        ];
        if self.editing {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[Esc] {}", BUTTON_CANCEL_EDIT),
                Style::default().fg(self.palette.primary),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans).right_aligned()
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Submit(self.buffer.clone()),
            KeyCode::Esc if self.editing => Action::CancelEdit,
            KeyCode::Esc | KeyCode::Tab => Action::FocusList,
            KeyCode::Backspace => {
                self.buffer.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused {
            self.palette.primary
        } else {
            self.palette.muted
        };
        let title = if self.editing { INPUT_TITLE_EDIT } else { INPUT_TITLE_ADD };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(self.hint_line())
            .border_style(Style::default().fg(border_color))
            .style(self.palette.base());

        let input = Paragraph::new(self.buffer.as_str()).block(block);
        f.render_widget(input, rect);

        if self.focused {
            let width = self.buffer.chars().count() as u16;
            let x = (rect.x + 1 + width).min(rect.right().saturating_sub(2));
            f.set_cursor_position(Position::new(x, rect.y + 1));
        }
    }
}
