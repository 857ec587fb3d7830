//! Shopping List State Store
//!
//! `ListState` owns the items and the filter flag. The UI wraps it in a
//! `reactive_stores::Store` so components can track individual fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{Item, ItemId};

/// The list's complete state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListState {
    /// Items in insertion (display) order
    items: Vec<Item>,
    /// Hide checked items when rendering
    hide_checked: bool,
    /// Next id to hand out; ids are never reused
    next_id: u64,
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

impl ListState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Build the initial state from the configured seed
    pub fn from_config(config: &AppConfig) -> Self {
        let mut state = Self::new();
        for seed in &config.items {
            let id = state.add(seed.name.clone());
            if seed.checked {
                if let Some(item) = state.find_mut(id) {
                    item.checked = true;
                }
            }
        }
        state.hide_checked = config.hide_checked;
        state
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn hide_checked(&self) -> bool {
        self.hide_checked
    }

    /// Id of the item currently in edit mode
    pub fn editing_id(&self) -> Option<ItemId> {
        self.items.iter().find(|item| item.editing).map(|item| item.id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new unchecked item. Empty names are accepted.
    pub fn add(&mut self, name: impl Into<String>) -> ItemId {
        let id = ItemId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        let item = Item::new(id, name);
        log::debug!("add item {} {:?}", id, item.name);
        self.items.push(item);
        id
    }

    pub fn toggle_checked(&mut self, id: ItemId) -> StoreResult<()> {
        let item = self.find_mut(id).ok_or(StoreError::NotFound(id))?;
        item.checked = !item.checked;
        log::debug!("item {} checked={}", id, item.checked);
        Ok(())
    }

    pub fn remove(&mut self, id: ItemId) -> StoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.items.remove(index);
        log::debug!("removed item {}", id);
        Ok(())
    }

    pub fn toggle_filter(&mut self) {
        self.hide_checked = !self.hide_checked;
        log::debug!("hide_checked={}", self.hide_checked);
    }

    /// Put one item in edit mode; every other item leaves it
    pub fn start_edit(&mut self, id: ItemId) -> StoreResult<()> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        for item in self.items.iter_mut() {
            item.editing = item.id == id;
        }
        log::debug!("editing item {}", id);
        Ok(())
    }

    /// Rename an item and take it out of edit mode
    pub fn commit_edit(&mut self, id: ItemId, new_name: impl Into<String>) -> StoreResult<()> {
        let item = self.find_mut(id).ok_or(StoreError::NotFound(id))?;
        item.name = new_name.into();
        item.editing = false;
        log::debug!("item {} renamed to {:?}", id, item.name);
        Ok(())
    }

    fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ListState {
        ListState::from_config(&AppConfig::default())
    }

    fn names(state: &ListState) -> Vec<&str> {
        state.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_from_config_seed() {
        let state = seeded();
        assert_eq!(names(&state), ["apples", "oranges", "milk", "bread"]);
        let checked: Vec<bool> = state.items().iter().map(|i| i.checked).collect();
        assert_eq!(checked, [false, false, true, false]);
        assert!(!state.hide_checked());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_add_appends_unchecked_item() {
        let mut state = seeded();
        let before = state.len();
        let id = state.add("eggs");

        assert_eq!(state.len(), before + 1);
        let item = state.items().last().unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.name, "eggs");
        assert!(!item.checked);
        assert!(!item.editing);
    }

    #[test]
    fn test_add_accepts_empty_name() {
        let mut state = ListState::new();
        let id = state.add("");
        assert_eq!(state.get(id).unwrap().name, "");
    }

    #[test]
    fn test_ids_unique_and_never_reused() {
        let mut state = ListState::new();
        let a = state.add("a");
        let b = state.add("b");
        assert_ne!(a, b);
        state.remove(b).unwrap();
        let c = state.add("c");
        assert_ne!(c, b);
        assert_ne!(c, a);
    }

    #[test]
    fn test_default_state_starts_ids_at_one() {
        let mut state = ListState::default();
        assert_eq!(state.add("x"), ItemId(1));
        assert_eq!(state.add("y"), ItemId(2));
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut state = ListState::new();
        state.next_id = u64::from(u32::MAX);
        let last_u32 = state.add("a");
        let next = state.add("b");
        assert_eq!(last_u32, ItemId(u64::from(u32::MAX)));
        assert_eq!(next, ItemId(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn test_toggle_checked_flips_only_target() {
        let mut state = seeded();
        let target = state.items()[1].id;
        let before = state.clone();

        state.toggle_checked(target).unwrap();

        for (old, new) in before.items().iter().zip(state.items()) {
            if old.id == target {
                assert_eq!(new.checked, !old.checked);
            } else {
                assert_eq!(new, old);
            }
        }

        state.toggle_checked(target).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove() {
        let mut state = seeded();
        let target = state.items()[2].id;
        state.remove(target).unwrap();

        assert_eq!(state.len(), 3);
        assert!(state.get(target).is_none());
        assert_eq!(names(&state), ["apples", "oranges", "bread"]);
    }

    #[test]
    fn test_toggle_filter() {
        let mut state = seeded();
        state.toggle_filter();
        assert!(state.hide_checked());
        state.toggle_filter();
        assert!(!state.hide_checked());
    }

    #[test]
    fn test_start_edit_is_exclusive() {
        let mut state = seeded();
        let first = state.items()[0].id;
        let third = state.items()[2].id;

        state.start_edit(first).unwrap();
        assert_eq!(state.editing_id(), Some(first));

        state.start_edit(third).unwrap();
        assert_eq!(state.editing_id(), Some(third));
        assert_eq!(state.items().iter().filter(|i| i.editing).count(), 1);
    }

    #[test]
    fn test_commit_edit_keeps_checked() {
        let mut state = seeded();
        let milk = state.items()[2].id;

        state.start_edit(milk).unwrap();
        state.commit_edit(milk, "oat milk").unwrap();

        let item = state.get(milk).unwrap();
        assert_eq!(item.name, "oat milk");
        assert!(!item.editing);
        assert!(item.checked);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_commit_edit_targets_id_not_editing_flag() {
        let mut state = seeded();
        let apples = state.items()[0].id;
        let bread = state.items()[3].id;

        state.start_edit(apples).unwrap();
        state.commit_edit(bread, "rye").unwrap();

        assert_eq!(state.get(bread).unwrap().name, "rye");
        assert_eq!(state.get(apples).unwrap().name, "apples");
        assert_eq!(state.editing_id(), Some(apples));
    }

    #[test]
    fn test_missing_id_leaves_state_unchanged() {
        let mut state = seeded();
        let before = state.clone();
        let missing = ItemId(999);

        assert_eq!(state.toggle_checked(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(state.remove(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(state.start_edit(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(state.commit_edit(missing, "x"), Err(StoreError::NotFound(missing)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_edit_missing_id_keeps_current_editor() {
        let mut state = seeded();
        let oranges = state.items()[1].id;
        state.start_edit(oranges).unwrap();

        assert!(state.start_edit(ItemId(42)).is_err());
        assert_eq!(state.editing_id(), Some(oranges));
    }
}
