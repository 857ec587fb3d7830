//! Shopping List App
//!
//! Root component: owns the list store and lays out the page.

use leptos::prelude::*;

use crate::components::{FilterToggle, NewItemForm, ShoppingList};
use crate::config::AppConfig;
use crate::context::ListContext;
use crate::store::{ListState, ListStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = ListStore::new(ListState::from_config(&config));
    log::info!("shopping list ready with {} items", config.items.len());

    // Provide store and context to all children
    provide_context(store);
    provide_context(ListContext::new(store));

    view! {
        <main class="container">
            <h1>"Shopping List"</h1>

            <NewItemForm />
            <FilterToggle />
            <ShoppingList />
        </main>
    }
}
