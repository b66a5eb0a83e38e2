use super::model::{EditSession, Notification, NotificationKind, Todo, TodoId};
use super::validation::is_valid;

/// Ordered to-do collection plus the edit session and last notification.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
    edit: EditSession,
    notification: Option<Notification>,
    next_seq: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item, or rewrite the one being edited.
    ///
    /// Blank or absent input leaves the collection and the edit session alone
    /// and only reports [`NotificationKind::EmptyInput`].
    pub fn submit(&mut self, raw: Option<&str>) -> &Notification {
        let text = match raw {
            Some(text) if is_valid(raw) => text.trim().to_string(),
            _ => {
                log::debug!("Rejected empty submission");
                return self.notify(NotificationKind::EmptyInput);
            }
        };

        match self.edit_session() {
            EditSession::Idle => {
                let todo = Todo::new(text);
                log::info!("Added todo {} at position {}", todo.id.short(), self.todos.len());
                self.todos.push(todo);
                self.notify(NotificationKind::Added)
            }
            EditSession::Editing(id) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.text = text;
                    log::info!("Edited todo {}", id.short());
                }
                self.edit = EditSession::Idle;
                self.notify(NotificationKind::Edited)
            }
        }
    }

    /// Start editing `id`, replacing any session in progress. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        if self.get(id).is_none() {
            log::debug!("Ignoring edit of unknown todo {}", id.short());
            return false;
        }
        self.edit = EditSession::Editing(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSession::Idle;
    }

    /// Flip completion of `id` and return the new state.
    pub fn toggle_complete(&mut self, id: TodoId) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        Some(todo.completed)
    }

    /// Remove `id`, keeping the order of the remaining items.
    ///
    /// Reports [`NotificationKind::Deleted`] whether or not the id matched.
    pub fn remove(&mut self, id: TodoId) -> &Notification {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() < before {
            log::info!("Deleted todo {}", id.short());
        }
        if self.edit.target() == Some(id) {
            self.edit = EditSession::Idle;
        }
        self.notify(NotificationKind::Deleted)
    }

    /// Drop every item and any edit session. Emits no notification.
    pub fn remove_all(&mut self) {
        log::info!("Deleted all {} todos", self.todos.len());
        self.todos.clear();
        self.edit = EditSession::Idle;
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.visible = false;
        }
    }

    /// Hide the current notification if it is still the one numbered `seq`.
    pub fn expire_notification(&mut self, seq: u64) -> bool {
        match self.notification.as_mut() {
            Some(notification) if notification.seq == seq && notification.visible => {
                notification.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn edit_session(&self) -> EditSession {
        self.edit
    }

    /// The item targeted by the current edit session
    pub fn editing_todo(&self) -> Option<&Todo> {
        self.edit.target().and_then(|id| self.get(id))
    }

    /// Last emitted notification, visible or not
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    fn notify(&mut self, kind: NotificationKind) -> &Notification {
        self.next_seq += 1;
        self.notification.insert(Notification {
            seq: self.next_seq,
            kind,
            visible: true,
        })
    }
}
