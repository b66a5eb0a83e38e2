//! Snackbar line showing the latest notification

use crate::icons::IconService;
use crate::todos::Notification;
use crate::ui::theme::{Palette, ThemeMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct NotificationComponent {
    pub notification: Option<Notification>,
    pub icons: IconService,
    pub palette: Palette,
}

impl Default for NotificationComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self {
            notification: None,
            icons: IconService::default(),
            palette: ThemeMode::default().palette(),
        }
    }

    pub fn update_data(&mut self, notification: Option<Notification>, icons: IconService, palette: Palette) {
        self.notification = notification;
        self.icons = icons;
        self.palette = palette;
    }

    pub fn is_visible(&self) -> bool {
        self.notification.as_ref().is_some_and(|n| n.visible)
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let Some(notification) = self.notification.as_ref().filter(|n| n.visible) else {
            return;
        };

        let icon = if notification.kind.is_warning() {
            self.icons.warning()
        } else {
            self.icons.success()
        };
        let style = Style::default().fg(self.palette.snackbar_fg).bg(self.palette.snackbar_bg);

        let line = Line::from(vec![
            Span::styled(format!(" {} {} ", icon, notification.message()), style),
            Span::styled("[x] Close ", style.add_modifier(Modifier::BOLD)),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
    }
}
