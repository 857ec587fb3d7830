//! Shopping List Component
//!
//! Renders the visible rows of the list container.

use leptos::prelude::*;

use crate::components::{EditItemForm, ItemRow};
use crate::context::ListContext;
use crate::render::ItemView;

#[component]
pub fn ShoppingList() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let view_model = Memo::new(move |_| ctx.view());

    view! {
        <ul class="shopping-list js-shopping-list">
            <For
                each=move || view_model.get().rows
                // Key on the whole row so any field change re-renders it
                key=|row| row.clone()
                children=move |row| match row {
                    ItemView::Normal { id, name, checked } => view! {
                        <ItemRow id=id name=name checked=checked />
                    }.into_any(),
                    ItemView::Editing { id, name } => view! {
                        <EditItemForm id=id name=name />
                    }.into_any(),
                }
            />
        </ul>
    }
}
