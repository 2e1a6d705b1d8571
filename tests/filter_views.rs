use ticklist::{transition, Action, Filter, Item, SessionState};

fn item(id: i64, text: &str, completed: bool, removed: bool) -> Item {
    Item {
        id,
        text: text.to_string(),
        completed,
        removed,
    }
}

fn mixed_state() -> SessionState {
    SessionState {
        input_buffer: String::new(),
        items: vec![
            item(4, "open", false, false),
            item(3, "done", true, false),
            item(2, "trashed open", false, true),
            item(1, "trashed done", true, true),
        ],
        active_filter: Filter::All,
    }
}

#[test]
fn all_filter_hides_only_removed_items() {
    let state = mixed_state();

    let texts: Vec<&str> = state.visible_items().iter().map(|i| i.text.as_str()).collect();

    assert_eq!(texts, vec!["open", "done"]);
}

#[test]
fn completed_filter_ignores_the_removed_flag() {
    let state = transition(mixed_state(), Action::SetFilter(Filter::Completed));

    let visible = state.visible_items();

    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|i| i.completed));
    assert!(visible.iter().any(|i| i.removed));
}

#[test]
fn uncompleted_filter_ignores_the_removed_flag() {
    let state = transition(mixed_state(), Action::SetFilter(Filter::Uncompleted));

    let texts: Vec<&str> = state.visible_items().iter().map(|i| i.text.as_str()).collect();

    assert_eq!(texts, vec!["open", "trashed open"]);
}

#[test]
fn deleted_filter_shows_only_the_trash() {
    let state = transition(mixed_state(), Action::SetFilter(Filter::Deleted));

    let visible = state.visible_items();

    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|i| i.removed));
}

#[test]
fn computing_a_view_does_not_mutate_stored_items() {
    let state = mixed_state();
    let items_before = state.items.clone();

    let _ = state.visible_items();
    let _ = state.compute_viewmodel();

    assert_eq!(state.items, items_before);
}

#[test]
fn viewmodel_rows_carry_one_based_ordinals() {
    let state = mixed_state();

    let vm = state.compute_viewmodel();

    assert_eq!(vm.rows.len(), 2);
    assert_eq!(vm.rows[0].ordinal, 1);
    assert_eq!(vm.rows[1].ordinal, 2);
    assert_eq!(vm.rows[0].id, 4);
}

#[test]
fn viewmodel_header_shows_label_and_count() {
    let state = mixed_state();

    let vm = state.compute_viewmodel();

    assert_eq!(vm.header.title, " All Tasks (2) ");
}

#[test]
fn viewmodel_empty_state_is_filter_specific() {
    let state = SessionState::new();

    let vm = state.compute_viewmodel();
    let empty = vm.empty_state.expect("empty list should produce an empty state");
    assert_eq!(empty.message, "No tasks yet");

    let state = transition(state, Action::SetFilter(Filter::Deleted));
    let vm = state.compute_viewmodel();
    let empty = vm.empty_state.expect("empty trash should produce an empty state");
    assert_eq!(empty.message, "Trash is empty");
}

#[test]
fn viewmodel_prompt_appears_only_with_a_draft() {
    let state = SessionState::new();
    assert!(state.compute_viewmodel().prompt.is_none());

    let state = transition(state, Action::SetInputText("half-typed".to_string()));
    let prompt = state
        .compute_viewmodel()
        .prompt
        .expect("non-empty buffer should produce a prompt");
    assert_eq!(prompt.buffer, "half-typed");
}

#[test]
fn viewmodel_footer_varies_with_the_filter() {
    let all_footer = mixed_state().compute_viewmodel().footer.commands;
    let trash_footer = transition(mixed_state(), Action::SetFilter(Filter::Deleted))
        .compute_viewmodel()
        .footer
        .commands;
    let done_footer = transition(mixed_state(), Action::SetFilter(Filter::Completed))
        .compute_viewmodel()
        .footer
        .commands;

    assert!(all_footer.contains("add <text>"));
    assert!(trash_footer.contains("purge"));
    assert!(trash_footer.contains("restore"));
    assert!(!done_footer.contains("add <text>"));
}

#[test]
fn filter_parses_user_facing_names_and_aliases() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!("done".parse::<Filter>().unwrap(), Filter::Completed);
    assert_eq!("completed".parse::<Filter>().unwrap(), Filter::Completed);
    assert_eq!("todo".parse::<Filter>().unwrap(), Filter::Uncompleted);
    assert_eq!("TRASH".parse::<Filter>().unwrap(), Filter::Deleted);
    assert!("bogus".parse::<Filter>().is_err());
}
