//! UI container - presentation flags

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_sidebar_open: bool,
    pub show_new_chat_modal: bool,
    /// Draft title typed into the new-chat modal.
    pub new_chat_name: String,
}

impl UiState {
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.is_sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_open = !self.is_sidebar_open;
    }

    pub fn set_show_new_chat_modal(&mut self, show: bool) {
        self.show_new_chat_modal = show;
    }

    pub fn set_new_chat_name(&mut self, name: impl Into<String>) {
        self.new_chat_name = name.into();
    }

    /// Hide the modal and drop the draft.
    pub fn reset_new_chat_modal(&mut self) {
        self.show_new_chat_modal = false;
        self.new_chat_name.clear();
    }
}
