//! Filter Toggle Component
//!
//! Checkbox hiding checked items.

use leptos::prelude::*;

use crate::context::ListContext;
use crate::controller::Action;
use crate::store::{use_list_store, ListStateStoreFields};

#[component]
pub fn FilterToggle() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");
    let hide_checked = use_list_store().hide_checked();

    view! {
        <label class="filter-checked">
            <input
                type="checkbox"
                class="js-filter-checked"
                prop:checked=move || hide_checked.get()
                disabled=move || ctx.controls_locked()
                on:change=move |_| { ctx.dispatch(Action::ToggleFilter); }
            />
            "Hide checked items"
        </label>
    }
}
