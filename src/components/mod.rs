//! UI Components
//!
//! Leptos components for the shopping list.

mod new_item_form;
mod filter_toggle;
mod shopping_list;
mod item_row;
mod edit_item_form;

pub use new_item_form::NewItemForm;
pub use filter_toggle::FilterToggle;
pub use shopping_list::ShoppingList;
pub use item_row::ItemRow;
pub use edit_item_form::EditItemForm;
