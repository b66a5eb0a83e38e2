use crate::constants::{LIST_EMPTY, LIST_TITLE};
use crate::icons::IconService;
use crate::todos::{Todo, TodoId};
use crate::ui::core::{Action, Component};
use crate::ui::theme::{Palette, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct TodoListComponent {
    pub todos: Vec<Todo>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub editing: Option<TodoId>,
    pub icons: IconService,
    pub palette: Palette,
    pub strike_completed: bool,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            editing: None,
            icons: IconService::default(),
            palette: ThemeMode::default().palette(),
            strike_completed: true,
        }
    }

    pub fn update_data(&mut self, todos: Vec<Todo>, editing: Option<TodoId>, icons: IconService, palette: Palette) {
        self.todos = todos;
        self.editing = editing;
        self.icons = icons;
        self.palette = palette;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected_index)
    }

    /// Move the cursor onto `id` if it is in the list
    pub fn select_id(&mut self, id: TodoId) {
        if let Some(index) = self.todos.iter().position(|todo| todo.id == id) {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
    }

    fn create_todo_item(&self, todo: &Todo) -> ListItem<'static> {
        let checkbox = if todo.completed {
            self.icons.todo_completed()
        } else {
            self.icons.todo_pending()
        };

        let text_style = if todo.completed && self.strike_completed {
            self.palette.completed()
        } else if todo.completed {
            self.palette.base().fg(self.palette.muted)
        } else {
            self.palette.base()
        };

        let checkbox_style = if todo.completed {
            Style::default().fg(self.palette.success)
        } else {
            Style::default().fg(self.palette.foreground)
        };

        let mut spans = vec![
            Span::styled(checkbox.to_string(), checkbox_style),
            Span::raw(" "),
            Span::styled(todo.text.clone(), text_style),
        ];

        if self.editing == Some(todo.id) {
            spans.push(Span::styled(
                format!(" {} editing", self.icons.editing()),
                Style::default().fg(self.palette.primary).add_modifier(Modifier::ITALIC),
            ));
        }

        ListItem::new(Line::from(spans))
    }

    fn title(&self) -> String {
        let done = self.todos.iter().filter(|todo| todo.completed).count();
        format!(
            "{} {} ({}/{})",
            self.icons.list_title(),
            LIST_TITLE,
            done,
            self.todos.len()
        )
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTodo,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTodo,
            KeyCode::Enter | KeyCode::Char(' ') => self
                .get_selected_todo()
                .map_or(Action::None, |todo| Action::ToggleComplete(todo.id)),
            KeyCode::Char('e') => self
                .get_selected_todo()
                .map_or(Action::None, |todo| Action::BeginEdit(todo.id)),
            KeyCode::Char('d') => self
                .get_selected_todo()
                .map_or(Action::None, |todo| Action::Remove(todo.id)),
            // Bulk delete is only offered while there is something to delete
            KeyCode::Char('D') if !self.todos.is_empty() => Action::RemoveAll,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.todos.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.todos.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .border_style(Style::default().fg(self.palette.muted))
            .style(self.palette.base());

        if self.todos.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                LIST_EMPTY,
                Style::default().fg(self.palette.muted),
            ))])
            .block(block);

            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items: Vec<ListItem> = self.todos.iter().map(|todo| self.create_todo_item(todo)).collect();
            let mut list_state = self.list_state.clone();

            let todos_list = List::new(items).block(block).highlight_style(self.palette.selected());

            f.render_stateful_widget(todos_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
