use serde::{Deserialize, Serialize};

use crate::events::ChartEventParams;

/// Commands a host can offer on a chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextMenuAction {
    ShowDetail,
    EditValue,
    CopyValue,
    RemoveEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMenuItem {
    pub label: String,
    pub action: ContextMenuAction,
}

impl ContextMenuItem {
    #[must_use]
    pub fn new(label: impl Into<String>, action: ContextMenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Open-menu state: where the menu sits and the interaction that opened it.
#[derive(Debug, Clone)]
pub struct OpenContextMenu {
    pub page_x: f64,
    pub page_y: f64,
    pub params: ChartEventParams,
}

/// Pure-data model of a right-click menu on chart entries.
///
/// Hosts render it however they like; the model only tracks the item list,
/// the open/closed state, and the params snapshot captured at open time.
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    items: Vec<ContextMenuItem>,
    open: Option<OpenContextMenu>,
}

impl ContextMenu {
    #[must_use]
    pub fn new(items: Vec<ContextMenuItem>) -> Self {
        Self { items, open: None }
    }

    /// The stock entry-editing menu.
    #[must_use]
    pub fn with_default_items() -> Self {
        Self::new(vec![
            ContextMenuItem::new("View details", ContextMenuAction::ShowDetail),
            ContextMenuItem::new("Edit value", ContextMenuAction::EditValue),
            ContextMenuItem::new("Copy value", ContextMenuAction::CopyValue),
            ContextMenuItem::new("Remove", ContextMenuAction::RemoveEntry),
        ])
    }

    /// Opens the menu at the interaction's page position.
    ///
    /// Fails closed when the params carry no pointer payload; existing state
    /// is left untouched.
    pub fn open_at(&mut self, params: &ChartEventParams) -> bool {
        let Some(pointer) = params.pointer.as_ref() else {
            return false;
        };
        self.open = Some(OpenContextMenu {
            page_x: pointer.page_x,
            page_y: pointer.page_y,
            params: params.clone(),
        });
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn open_state(&self) -> Option<&OpenContextMenu> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn items(&self) -> &[ContextMenuItem] {
        &self.items
    }

    /// Resolves the item at `index` against the captured params and closes
    /// the menu. An out-of-range index leaves the menu open.
    pub fn activate(&mut self, index: usize) -> Option<(ContextMenuAction, ChartEventParams)> {
        let action = self.items.get(index)?.action;
        let open = self.open.take()?;
        Some((action, open.params))
    }
}
