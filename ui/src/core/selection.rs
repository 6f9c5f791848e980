//! Which ranked title the viewer last activated.
//!
//! Starts unset. The only setter is [`SelectionState::activate`], called from the
//! ranking panel. There is no way back to unset once a title is chosen.

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_show: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an activation event. Missing or blank labels leave the state as is;
    /// any other label is stored exactly as received.
    /// Returns whether the selection changed.
    pub fn activate(&mut self, label: Option<&str>) -> bool {
        let Some(title) = label.filter(|t| !t.trim().is_empty()) else {
            debug!("activation without a label ignored");
            return false;
        };
        if self.selected_show.as_deref() == Some(title) {
            return false;
        }
        debug!(title, "show selected");
        self.selected_show = Some(title.to_string());
        true
    }

    pub fn selected_show(&self) -> Option<&str> {
        self.selected_show.as_deref()
    }
}
