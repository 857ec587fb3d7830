//! List Rendering
//!
//! Pure derivation of the list view from `ListState`. Components draw
//! exactly what `ListView` holds, so the same state always yields the
//! same page.

use crate::controller::Action;
use crate::models::{Item, ItemId};
use crate::store::ListState;

/// Visual representation of a single row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemView {
    /// Name with check styling and toggle/edit/delete controls
    Normal { id: ItemId, name: String, checked: bool },
    /// Inline rename form pre-filled with the current name
    Editing { id: ItemId, name: String },
}

impl ItemView {
    /// Class of the name span; checked items get the strike-through class
    pub fn title_class(checked: bool) -> &'static str {
        if checked { "shopping-item shopping-item__checked" } else { "shopping-item" }
    }

    fn from_item(item: &Item) -> Self {
        if item.editing {
            ItemView::Editing { id: item.id, name: item.name.clone() }
        } else {
            ItemView::Normal { id: item.id, name: item.name.clone(), checked: item.checked }
        }
    }
}

/// Buttons shown on every normal row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Toggle,
    Edit,
    Delete,
}

pub const ROW_CONTROLS: [RowControl; 3] = [RowControl::Toggle, RowControl::Edit, RowControl::Delete];

impl RowControl {
    pub fn class(self) -> &'static str {
        match self {
            RowControl::Toggle => "shopping-item-toggle js-item-toggle",
            RowControl::Edit => "shopping-item-edit js-item-edit",
            RowControl::Delete => "shopping-item-delete js-item-delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RowControl::Toggle => "check",
            RowControl::Edit => "edit",
            RowControl::Delete => "delete",
        }
    }

    pub fn action(self, id: ItemId) -> Action {
        match self {
            RowControl::Toggle => Action::ToggleChecked(id),
            RowControl::Edit => Action::StartEdit(id),
            RowControl::Delete => Action::DeleteItem(id),
        }
    }
}

/// Everything the page needs to draw the list and its controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ItemView>,
    /// True while an item is being edited. Row buttons, the new-item submit
    /// and the filter checkbox are disabled; only "Save edit" stays live.
    pub controls_locked: bool,
}

/// Items to display, in order, honoring the hide-checked filter
pub fn visible_items(state: &ListState) -> Vec<&Item> {
    state
        .items()
        .iter()
        .filter(|item| !(state.hide_checked() && item.checked))
        .collect()
}

pub fn render_list(state: &ListState) -> ListView {
    ListView {
        rows: visible_items(state).into_iter().map(ItemView::from_item).collect(),
        controls_locked: state.is_editing(),
    }
}
