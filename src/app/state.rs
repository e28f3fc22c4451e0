use crate::command::ActionId;
use crate::recorder::PageId;

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Card activated by Enter/Space.
    pub focused: PageId,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focused: PageId::Home,
            status: StatusState::default(),
        }
    }
}
