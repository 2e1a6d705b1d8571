use ticklist::{transition, Action, Filter, Item, SessionState};

fn submit(state: SessionState, text: &str) -> SessionState {
    let state = transition(state, Action::SetInputText(text.to_string()));
    transition(state, Action::Submit)
}

fn fixed_item(id: i64, text: &str) -> Item {
    Item {
        id,
        text: text.to_string(),
        completed: false,
        removed: false,
    }
}

#[test]
fn submit_with_empty_buffer_changes_nothing() {
    let state = submit(SessionState::new(), "existing");
    let before = state.clone();

    let after = transition(state, Action::Submit);

    assert_eq!(after, before);
    assert_eq!(after.items.len(), 1);
}

#[test]
fn submit_creates_one_item_with_default_flags() {
    let state = submit(SessionState::new(), "buy milk");

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "buy milk");
    assert!(!state.items[0].completed);
    assert!(!state.items[0].removed);
    assert_eq!(state.input_buffer, "");
}

#[test]
fn whitespace_only_text_is_valid_content() {
    let state = submit(SessionState::new(), "   ");

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "   ");
}

#[test]
fn submit_prepends_and_assigns_distinct_ids() {
    let state = submit(SessionState::new(), "a");
    let state = submit(state, "b");

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].text, "b");
    assert_eq!(state.items[1].text, "a");
    assert_ne!(state.items[0].id, state.items[1].id);
    assert_eq!(state.input_buffer, "");
}

#[test]
fn edit_replaces_only_the_matching_item() {
    let state = SessionState {
        input_buffer: String::new(),
        items: vec![fixed_item(2, "second"), fixed_item(1, "first")],
        active_filter: Filter::All,
    };

    let state = transition(
        state,
        Action::EditItem {
            id: 1,
            text: "first, edited".to_string(),
        },
    );

    assert_eq!(state.items[1].text, "first, edited");
    assert_eq!(state.items[0], fixed_item(2, "second"));
}

#[test]
fn edit_with_unknown_id_leaves_state_unchanged() {
    let state = SessionState {
        input_buffer: "draft".to_string(),
        items: vec![fixed_item(1, "only")],
        active_filter: Filter::All,
    };
    let before = state.clone();

    let after = transition(
        state,
        Action::EditItem {
            id: 999,
            text: "ignored".to_string(),
        },
    );

    assert_eq!(after, before);
}

#[test]
fn set_completed_sets_and_clears_the_flag() {
    let state = SessionState {
        input_buffer: String::new(),
        items: vec![fixed_item(7, "task")],
        active_filter: Filter::All,
    };

    let state = transition(
        state,
        Action::SetCompleted {
            id: 7,
            completed: true,
        },
    );
    assert!(state.items[0].completed);

    let state = transition(
        state,
        Action::SetCompleted {
            id: 7,
            completed: false,
        },
    );
    assert!(!state.items[0].completed);
}

#[test]
fn set_completed_with_unknown_id_leaves_state_unchanged() {
    let state = SessionState {
        input_buffer: String::new(),
        items: vec![fixed_item(1, "only")],
        active_filter: Filter::All,
    };
    let before = state.clone();

    let after = transition(
        state,
        Action::SetCompleted {
            id: 42,
            completed: true,
        },
    );

    assert_eq!(after, before);
}

#[test]
fn toggle_deleted_twice_is_an_involution() {
    let state = SessionState {
        input_buffer: String::new(),
        items: vec![fixed_item(3, "flip me")],
        active_filter: Filter::All,
    };
    let before = state.clone();

    let state = transition(state, Action::ToggleDeleted { id: 3 });
    assert!(state.items[0].removed);

    let state = transition(state, Action::ToggleDeleted { id: 3 });
    assert_eq!(state, before);
}

#[test]
fn purge_removes_all_and_only_removed_items() {
    let mut trashed_a = fixed_item(1, "trashed a");
    trashed_a.removed = true;
    let mut trashed_b = fixed_item(3, "trashed b");
    trashed_b.removed = true;
    trashed_b.completed = true;

    let state = SessionState {
        input_buffer: String::new(),
        items: vec![trashed_a, fixed_item(2, "kept"), trashed_b],
        active_filter: Filter::Deleted,
    };

    let before_count = state.items.len();
    let removed_count = state.removed_count();

    let state = transition(state, Action::PurgeDeleted);

    assert_eq!(state.items.len(), before_count - removed_count);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "kept");
    assert_eq!(state.removed_count(), 0);
}

#[test]
fn purge_with_empty_trash_is_a_no_op() {
    let state = submit(SessionState::new(), "safe");
    let before = state.clone();

    let after = transition(state, Action::PurgeDeleted);

    assert_eq!(after, before);
}

#[test]
fn set_input_text_replaces_the_buffer() {
    let state = transition(
        SessionState::new(),
        Action::SetInputText("draft".to_string()),
    );
    assert_eq!(state.input_buffer, "draft");

    let state = transition(state, Action::SetInputText(String::new()));
    assert_eq!(state.input_buffer, "");
}

#[test]
fn set_filter_replaces_the_active_filter_only() {
    let state = submit(SessionState::new(), "task");
    let items_before = state.items.clone();

    let state = transition(state, Action::SetFilter(Filter::Deleted));

    assert_eq!(state.active_filter, Filter::Deleted);
    assert_eq!(state.items, items_before);
}
