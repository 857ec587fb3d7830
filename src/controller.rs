//! Action Dispatch
//!
//! User intents as data, routed to the matching store mutation.

use crate::error::{StoreError, StoreResult};
use crate::models::ItemId;
use crate::store::ListState;

/// A user intent that mutates the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem(String),
    ToggleChecked(ItemId),
    DeleteItem(ItemId),
    ToggleFilter,
    StartEdit(ItemId),
    CommitEdit(ItemId, String),
}

impl Action {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddItem(_) => "add",
            Action::ToggleChecked(_) => "toggle-checked",
            Action::DeleteItem(_) => "delete",
            Action::ToggleFilter => "toggle-filter",
            Action::StartEdit(_) => "start-edit",
            Action::CommitEdit(..) => "commit-edit",
        }
    }
}

/// Apply an action. While an item is being edited every action except
/// `CommitEdit` is refused and the state is left untouched.
pub fn dispatch(state: &mut ListState, action: Action) -> StoreResult<()> {
    if let Some(editing) = state.editing_id() {
        if !matches!(action, Action::CommitEdit(..)) {
            return Err(StoreError::EditInProgress(editing));
        }
    }
    match action {
        Action::AddItem(name) => {
            state.add(name);
            Ok(())
        }
        Action::ToggleChecked(id) => state.toggle_checked(id),
        Action::DeleteItem(id) => state.remove(id),
        Action::ToggleFilter => {
            state.toggle_filter();
            Ok(())
        }
        Action::StartEdit(id) => state.start_edit(id),
        Action::CommitEdit(id, name) => state.commit_edit(id, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::render::{render_list, ItemView};

    fn seeded() -> ListState {
        ListState::from_config(&AppConfig::default())
    }

    #[test]
    fn test_add_then_render() {
        let mut state = seeded();
        dispatch(&mut state, Action::AddItem("coffee".into())).unwrap();

        let view = render_list(&state);
        assert_eq!(state.len(), 5);
        assert!(matches!(
            view.rows.last(),
            Some(ItemView::Normal { name, checked: false, .. }) if name == "coffee"
        ));
    }

    #[test]
    fn test_edit_flow() {
        let mut state = seeded();
        let oranges = state.items()[1].id;

        dispatch(&mut state, Action::StartEdit(oranges)).unwrap();
        assert!(render_list(&state).controls_locked);

        dispatch(&mut state, Action::CommitEdit(oranges, "clementines".into())).unwrap();
        let view = render_list(&state);
        assert!(!view.controls_locked);
        assert_eq!(
            view.rows[1],
            ItemView::Normal { id: oranges, name: "clementines".into(), checked: false }
        );
    }

    #[test]
    fn test_toggle_delete_filter() {
        let mut state = seeded();
        let apples = state.items()[0].id;
        let bread = state.items()[3].id;

        dispatch(&mut state, Action::ToggleChecked(apples)).unwrap();
        dispatch(&mut state, Action::DeleteItem(bread)).unwrap();
        dispatch(&mut state, Action::ToggleFilter).unwrap();

        let view = render_list(&state);
        assert_eq!(state.len(), 3);
        let oranges = state.items()[1].id;
        assert_eq!(
            view.rows,
            vec![ItemView::Normal { id: oranges, name: "oranges".into(), checked: false }]
        );
    }

    #[test]
    fn test_missing_id_is_reported() {
        let mut state = seeded();
        let before = state.clone();
        let result = dispatch(&mut state, Action::DeleteItem(ItemId(77)));
        assert_eq!(result, Err(StoreError::NotFound(ItemId(77))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_refused_while_editing() {
        let mut state = seeded();
        let milk = state.items()[2].id;
        dispatch(&mut state, Action::StartEdit(milk)).unwrap();

        let result = dispatch(&mut state, Action::AddItem("butter".into()));
        assert_eq!(result, Err(StoreError::EditInProgress(milk)));
        assert_eq!(state.len(), 4);

        dispatch(&mut state, Action::CommitEdit(milk, "milk".into())).unwrap();
        dispatch(&mut state, Action::AddItem("butter".into())).unwrap();
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_start_edit_refused_while_another_is_editing() {
        let mut state = seeded();
        let apples = state.items()[0].id;
        let bread = state.items()[3].id;
        dispatch(&mut state, Action::StartEdit(apples)).unwrap();

        assert_eq!(
            dispatch(&mut state, Action::StartEdit(bread)),
            Err(StoreError::EditInProgress(apples))
        );
        assert_eq!(state.editing_id(), Some(apples));
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::ToggleFilter.kind(), "toggle-filter");
        assert_eq!(Action::CommitEdit(ItemId(1), String::new()).kind(), "commit-edit");
    }
}
