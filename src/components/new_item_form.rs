//! New Item Form Component
//!
//! Form for appending items to the list.

use leptos::prelude::*;

use crate::context::ListContext;
use crate::controller::Action;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let (new_name, set_new_name) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty names are accepted as-is; refused while an item is editing
        if ctx.dispatch(Action::AddItem(new_name.get_untracked())) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form id="js-shopping-list-form" on:submit=add_item>
            <label for="shopping-list-entry">"Add an item"</label>
            <input
                type="text"
                name="shopping-list-entry"
                class="js-shopping-list-entry"
                placeholder="e.g., broccoli"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || ctx.controls_locked()>"Add item"</button>
        </form>
    }
}
