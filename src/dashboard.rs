//! Presentation state of the dashboard. Lives only as long as the session and
//! is never persisted.

use crate::clients::OrderClient;
use crate::order_actor::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// An order awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    selected: Option<String>,
    view_mode: ViewMode,
    pending_delete: Option<PendingDelete>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the detail view for an order.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// First step of a delete: remember what the user asked to remove.
    pub fn open_delete(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            id: id.into(),
            label: label.into(),
        });
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: removes the pending order and clears the confirmation.
    ///
    /// Resolves to `false` when nothing was pending or the order was already
    /// gone. The detail view is closed if it showed the removed order.
    pub async fn confirm_delete(&mut self, client: &OrderClient) -> Result<bool, OrderError> {
        let Some(pending) = self.pending_delete.take() else {
            return Ok(false);
        };
        let removed = client.delete_order(&pending.id).await?;
        if self.selected.as_deref() == Some(pending.id.as_str()) {
            self.selected = None;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggles() {
        let mut state = DashboardState::new();
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert_eq!(state.toggle_view_mode(), ViewMode::List);
        assert_eq!(state.toggle_view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_detail_selection() {
        let mut state = DashboardState::new();
        state.select("a");
        assert_eq!(state.selected(), Some("a"));
        state.close_detail();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_cancel_discards_pending_delete() {
        let mut state = DashboardState::new();
        state.open_delete("a", "Rapat (2024-06-10)");
        assert_eq!(state.pending_delete().map(|p| p.id.as_str()), Some("a"));
        state.cancel_delete();
        assert!(state.pending_delete().is_none());
    }
}
