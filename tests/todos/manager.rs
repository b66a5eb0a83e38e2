use std::collections::HashSet;
use todobox::todos::{EditSession, NotificationKind, TodoId, TodoList};

fn list_with(texts: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for text in texts {
        list.submit(Some(*text));
    }
    list
}

fn texts(list: &TodoList) -> Vec<&str> {
    list.todos().iter().map(|todo| todo.text.as_str()).collect()
}

#[test]
fn test_submit_appends_trimmed_pending_todo() {
    let mut list = list_with(&["first"]);

    let notification = list.submit(Some("  second item \t"));
    assert_eq!(notification.kind, NotificationKind::Added);
    assert_eq!(notification.message(), "Todo added");
    assert!(notification.visible);

    assert_eq!(list.len(), 2);
    let last = list.todos().last().unwrap();
    assert_eq!(last.text, "second item");
    assert!(!last.completed);
}

#[test]
fn test_ids_are_unique_under_rapid_inserts() {
    let mut list = TodoList::new();
    for i in 0..500 {
        list.submit(Some(format!("todo {i}").as_str()));
    }

    let ids: HashSet<TodoId> = list.todos().iter().map(|todo| todo.id).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_empty_submissions_never_change_the_list() {
    let mut list = list_with(&["keep me"]);

    for raw in [Some(""), Some("   "), None] {
        let notification = list.submit(raw);
        assert_eq!(notification.kind, NotificationKind::EmptyInput);
        assert_eq!(notification.message(), "Todo cannot be empty");
        assert_eq!(list.len(), 1);
    }
}

#[test]
fn test_empty_submission_keeps_edit_session() {
    let mut list = list_with(&["a"]);
    let id = list.todos()[0].id;
    list.begin_edit(id);

    list.submit(Some("  "));

    assert_eq!(list.edit_session(), EditSession::Editing(id));
    assert_eq!(list.todos()[0].text, "a");
}

#[test]
fn test_edit_replaces_text_in_place() {
    let mut list = list_with(&["a", "b", "c"]);
    let id = list.todos()[1].id;
    list.toggle_complete(id);

    assert!(list.begin_edit(id));
    assert_eq!(list.editing_todo().map(|todo| todo.text.as_str()), Some("b"));

    let notification = list.submit(Some(" bee "));
    assert_eq!(notification.kind, NotificationKind::Edited);

    assert_eq!(texts(&list), vec!["a", "bee", "c"]);
    assert_eq!(list.position(id), Some(1));
    assert!(list.get(id).unwrap().completed);
    assert_eq!(list.edit_session(), EditSession::Idle);
}

#[test]
fn test_begin_edit_unknown_id_is_ignored() {
    let mut list = list_with(&["a"]);

    assert!(!list.begin_edit(TodoId::new()));
    assert_eq!(list.edit_session(), EditSession::Idle);
}

#[test]
fn test_begin_edit_replaces_previous_session() {
    let mut list = list_with(&["a", "b"]);
    let first = list.todos()[0].id;
    let second = list.todos()[1].id;

    list.begin_edit(first);
    list.begin_edit(second);
    list.submit(Some("B"));

    assert_eq!(texts(&list), vec!["a", "B"]);
}

#[test]
fn test_cancel_edit_returns_to_append_mode() {
    let mut list = list_with(&["a"]);
    let notification_seq = list.notification().unwrap().seq;
    list.begin_edit(list.todos()[0].id);

    list.cancel_edit();
    assert_eq!(list.edit_session(), EditSession::Idle);
    // Cancelling is silent
    assert_eq!(list.notification().unwrap().seq, notification_seq);

    list.submit(Some("b"));
    assert_eq!(texts(&list), vec!["a", "b"]);
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut list = list_with(&["a"]);
    let id = list.todos()[0].id;
    let seq = list.notification().unwrap().seq;

    assert_eq!(list.toggle_complete(id), Some(true));
    assert_eq!(list.completed_count(), 1);
    assert_eq!(list.toggle_complete(id), Some(false));
    assert!(!list.todos()[0].completed);
    assert_eq!(list.notification().unwrap().seq, seq);
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let mut list = list_with(&["a"]);
    assert_eq!(list.toggle_complete(TodoId::new()), None);
    assert_eq!(list.completed_count(), 0);
}

#[test]
fn test_remove_preserves_order_of_the_rest() {
    let mut list = list_with(&["a", "b", "c", "d"]);
    let id = list.todos()[1].id;

    let notification = list.remove(id);
    assert_eq!(notification.kind, NotificationKind::Deleted);

    assert_eq!(texts(&list), vec!["a", "c", "d"]);
    assert!(list.get(id).is_none());
}

#[test]
fn test_remove_unknown_id_still_notifies() {
    let mut list = list_with(&["a"]);

    let notification = list.remove(TodoId::new());
    assert_eq!(notification.message(), "Todo deleted");
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_edit_target_clears_session() {
    let mut list = list_with(&["a", "b"]);
    let id = list.todos()[0].id;
    list.begin_edit(id);

    list.remove(id);
    assert_eq!(list.edit_session(), EditSession::Idle);

    list.submit(Some("c"));
    assert_eq!(texts(&list), vec!["b", "c"]);
}

#[test]
fn test_remove_other_item_keeps_session() {
    let mut list = list_with(&["a", "b"]);
    let editing = list.todos()[0].id;
    list.begin_edit(editing);

    list.remove(list.todos()[1].id);
    assert_eq!(list.edit_session(), EditSession::Editing(editing));
}

#[test]
fn test_remove_all_empties_any_list_silently() {
    let mut empty = TodoList::new();
    empty.remove_all();
    assert!(empty.is_empty());
    assert!(empty.notification().is_none());

    let mut list = list_with(&["a", "b", "c"]);
    let seq = list.notification().unwrap().seq;
    list.begin_edit(list.todos()[2].id);

    list.remove_all();
    assert!(list.is_empty());
    assert_eq!(list.edit_session(), EditSession::Idle);
    assert_eq!(list.notification().unwrap().seq, seq);
}

#[test]
fn test_dismiss_hides_notification() {
    let mut list = list_with(&["a"]);
    list.dismiss_notification();
    assert!(!list.notification().unwrap().visible);
}

#[test]
fn test_expire_only_hides_matching_notification() {
    let mut list = list_with(&["a"]);
    let old_seq = list.notification().unwrap().seq;
    let new_seq = list.remove(TodoId::new()).seq;
    assert!(new_seq > old_seq);

    assert!(!list.expire_notification(old_seq));
    assert!(list.notification().unwrap().visible);

    assert!(list.expire_notification(new_seq));
    assert!(!list.notification().unwrap().visible);
    assert!(!list.expire_notification(new_seq));
}
