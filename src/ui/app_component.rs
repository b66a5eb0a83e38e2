use crate::config::Config;
use crate::constants::APP_TITLE;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::todos::{NotificationKind, TodoList};
use crate::ui::components::{DialogComponent, InputComponent, NotificationComponent, StatusBar, TodoListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    timer::NotificationTimer,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::ThemeMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub todos: TodoList,
    pub theme: ThemeMode,
    pub focus: Focus,
}

pub struct AppComponent {
    // Component composition
    input: InputComponent,
    todo_list: TodoListComponent,
    notification: NotificationComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    icons: IconService,

    // Services
    timer: NotificationTimer,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let (timer, background_action_rx) = NotificationTimer::new(config.notifications.duration());

        let mut todo_list = TodoListComponent::new();
        todo_list.strike_completed = config.display.strike_completed;

        let state = AppState {
            theme: config.ui.theme,
            ..Default::default()
        };

        let mut app = Self {
            input: InputComponent::new(),
            todo_list,
            notification: NotificationComponent::new(),
            dialog: DialogComponent::new(),
            state,
            icons: IconService::new(config.display.icon_theme),
            timer,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn todos(&self) -> &TodoList {
        &self.state.todos
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.theme
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    /// Text currently in the input field
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn submit_label(&self) -> &'static str {
        self.input.button_label()
    }

    pub fn selected_index(&self) -> usize {
        self.todo_list.selected_index
    }

    pub fn dialog(&self) -> Option<DialogType> {
        self.dialog.dialog_type
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn timer(&self) -> &NotificationTimer {
        &self.timer
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = self.state.theme.palette();
        let editing = self.state.todos.edit_session();

        self.input
            .update_data(self.state.focus == Focus::Input, editing.is_editing(), palette);
        self.todo_list.update_data(
            self.state.todos.todos().to_vec(),
            editing.target(),
            self.icons.clone(),
            palette,
        );
        self.notification
            .update_data(self.state.todos.notification().cloned(), self.icons.clone(), palette);
        self.dialog.update_data(self.logger.get_logs(), palette);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Action::FocusInput,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('I') => Action::CycleIcons,
            KeyCode::Char('x') | KeyCode::Esc => {
                if self.notification.is_visible() {
                    Action::DismissNotification
                } else {
                    Action::None
                }
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Apply an action that survived the component hierarchy
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Submit(text) => {
                let (seq, kind) = {
                    let notification = self.state.todos.submit(Some(&text));
                    (notification.seq, notification.kind)
                };
                self.input.clear();
                self.logger.log(format!("Submit: {}", kind.message()));
                self.timer.arm(seq);

                match kind {
                    NotificationKind::Added => {
                        if let Some(last) = self.state.todos.todos().last() {
                            let id = last.id;
                            self.sync_component_data();
                            self.todo_list.select_id(id);
                        }
                    }
                    NotificationKind::Edited => self.state.focus = Focus::List,
                    _ => {}
                }
            }
            Action::BeginEdit(id) => {
                if self.state.todos.begin_edit(id) {
                    if let Some(todo) = self.state.todos.editing_todo() {
                        self.logger.log(format!("Editing todo {}", todo.id.short()));
                        self.input.set_text(todo.text.clone());
                    }
                    self.state.focus = Focus::Input;
                }
            }
            Action::CancelEdit => {
                self.state.todos.cancel_edit();
                self.input.clear();
                self.state.focus = Focus::List;
                self.logger.log("Edit cancelled".to_string());
            }
            Action::ToggleComplete(id) => {
                if let Some(completed) = self.state.todos.toggle_complete(id) {
                    self.logger.log(format!(
                        "Todo {} marked {}",
                        id.short(),
                        if completed { "done" } else { "pending" }
                    ));
                }
            }
            Action::Remove(id) => {
                let was_editing = self.state.todos.edit_session().target() == Some(id);
                let seq = self.state.todos.remove(id).seq;
                if was_editing {
                    self.input.clear();
                }
                self.logger.log(format!("Removed todo {}", id.short()));
                self.timer.arm(seq);
            }
            Action::RemoveAll => {
                if self.state.todos.edit_session().is_editing() {
                    self.input.clear();
                }
                let count = self.state.todos.len();
                self.state.todos.remove_all();
                self.logger.log(format!("Removed all {} todos", count));
            }
            Action::DismissNotification => {
                self.state.todos.dismiss_notification();
                self.timer.cancel();
            }
            Action::NotificationExpired(seq) => {
                if self.state.todos.expire_notification(seq) {
                    self.logger.log(format!("Notification {} expired", seq));
                }
            }
            Action::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                self.logger.log(format!("Theme switched to {}", self.state.theme));
            }
            Action::CycleIcons => self.icons.cycle_icon_theme(),
            Action::FocusInput => self.state.focus = Focus::Input,
            Action::FocusList => self.state.focus = Focus::List,
            Action::Quit => {
                self.timer.cancel();
                self.should_quit = true;
            }
            // Consumed by components before reaching the app
            Action::NextTodo
            | Action::PreviousTodo
            | Action::ShowDialog(_)
            | Action::HideDialog
            | Action::None => {}
        }

        self.sync_component_data();
    }

    /// Drain actions sent by background timers
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.timer.cleanup_finished();
        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);

        for action in self.process_background_actions() {
            self.handle_app_action(action);
        }

        Ok(())
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.state.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::List => match self.todo_list.handle_key_events(key) {
                Action::None => self.handle_global_key(key),
                action => action,
            },
        }
    }

    fn render_title(&self, f: &mut Frame, rect: Rect) {
        let palette = self.state.theme.palette();
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).split(rect);

        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(palette.danger).add_modifier(Modifier::BOLD),
        )))
        .centered();
        f.render_widget(title, chunks[0]);

        let icon = match self.state.theme {
            ThemeMode::Light => self.icons.light_mode(),
            ThemeMode::Dark => self.icons.dark_mode(),
        };
        let switch = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} {} ", icon, self.state.theme), Style::default().fg(palette.primary)),
            Span::styled("[t] switch ", Style::default().fg(palette.muted)),
        ]))
        .right_aligned();
        f.render_widget(switch, chunks[1]);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.input.update(action);
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.state.theme.palette();
        f.render_widget(Block::default().style(palette.base()), rect);

        let areas = LayoutManager::main_layout(rect);
        self.render_title(f, areas.title);
        self.input.render(f, areas.input);
        self.todo_list.render(f, areas.list);
        self.notification.render(f, areas.notification);

        let hints = StatusBar::hint_text(
            self.state.focus,
            self.state.todos.edit_session().is_editing(),
            !self.state.todos.is_empty(),
        );
        StatusBar::render(f, areas.status, hints, &palette);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
