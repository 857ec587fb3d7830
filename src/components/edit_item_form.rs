//! Edit Item Form Component
//!
//! Inline rename form shown in place of the row being edited.
//! The input takes focus as soon as it is mounted.

use leptos::html;
use leptos::prelude::*;

use crate::context::ListContext;
use crate::controller::Action;
use crate::models::ItemId;

#[component]
pub fn EditItemForm(
    id: ItemId,
    name: String,
) -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let (draft, set_draft) = signal(name);
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if input.focus().is_err() {
                log::warn!("could not focus edit input for item {}", id);
            }
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::CommitEdit(id, draft.get_untracked()));
    };

    view! {
        <li class="js-item-element" data-item-id=id.to_string()>
            <form id="js-shopping-item-edit-form" on:submit=save>
                <label for="shopping-item-edit"></label>
                <input
                    type="text"
                    name="shopping-item-edit"
                    class="js-shopping-item-edit-entry"
                    node_ref=input_ref
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="js-shopping-item-edit-entry-button">"Save edit"</button>
            </form>
        </li>
    }
}
