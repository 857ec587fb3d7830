//! Application Context
//!
//! Shared list access provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::{dispatch, Action};
use crate::render::{render_list, ListView};
use crate::store::ListStore;

/// App-wide handle to the list store
#[derive(Clone, Copy)]
pub struct ListContext {
    store: ListStore,
}

impl ListContext {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    /// Apply an action in a single store write; the view re-renders after.
    ///
    /// Actions on ids that no longer exist, or made while another item is
    /// being edited, are ignored. Returns whether the action was applied.
    pub fn dispatch(&self, action: Action) -> bool {
        let kind = action.kind();
        match self.store.try_update(|state| dispatch(state, action)) {
            Some(Ok(())) => {
                log::info!("{}", kind);
                true
            }
            Some(Err(e)) => {
                log::debug!("{} ignored: {}", kind, e);
                false
            }
            None => {
                log::warn!("{} dropped: store disposed", kind);
                false
            }
        }
    }

    /// Current view of the list (tracked)
    pub fn view(&self) -> ListView {
        self.store.with(render_list)
    }

    /// Whether an edit is in progress (tracked)
    pub fn controls_locked(&self) -> bool {
        self.store.with(|state| state.is_editing())
    }
}
