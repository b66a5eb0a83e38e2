use crate::todos::TodoId;

/// Which pane receives printable keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTodo,
    PreviousTodo,
    FocusInput,
    FocusList,

    // Todo operations
    Submit(String),
    BeginEdit(TodoId),
    CancelEdit,
    ToggleComplete(TodoId),
    Remove(TodoId),
    RemoveAll,

    // Notifications
    DismissNotification,
    NotificationExpired(u64),

    // Appearance
    ToggleTheme,
    CycleIcons,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
