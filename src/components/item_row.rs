//! Item Row Component
//!
//! A single item with check/edit/delete controls.

use leptos::prelude::*;

use crate::context::ListContext;
use crate::models::ItemId;
use crate::render::{ItemView, ROW_CONTROLS};

#[component]
pub fn ItemRow(
    id: ItemId,
    name: String,
    checked: bool,
) -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    view! {
        <li class="js-item-element" data-item-id=id.to_string()>
            <span class=ItemView::title_class(checked)>{name}</span>
            <div class="shopping-item-controls">
                {ROW_CONTROLS.into_iter().map(move |control| view! {
                    <button
                        class=control.class()
                        disabled=move || ctx.controls_locked()
                        on:click=move |_| { ctx.dispatch(control.action(id)); }
                    >
                        <span class="button-label">{control.label()}</span>
                    </button>
                }).collect_view()}
            </div>
        </li>
    }
}
