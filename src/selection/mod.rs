//! Single-selection state, independent of measurement state.

use crate::markers::MarkerId;

/// At most one marker is selected at a time. Selection is a pure toggle:
/// clicking the selected marker again deselects it.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<MarkerId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles selection of `id` and returns the resulting selection.
    pub fn toggle(&mut self, id: MarkerId) -> Option<MarkerId> {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        tracing::debug!(id, selected = ?self.selected, "toggle selection");
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clears the selection only if it currently references `id`; used when
    /// that marker is deleted.
    pub fn clear_if_equals(&mut self, id: MarkerId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    pub fn selected(&self) -> Option<MarkerId> {
        self.selected
    }

    pub fn is_selected(&self, id: MarkerId) -> bool {
        self.selected == Some(id)
    }
}
