use crate::recorder::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Record { page: PageId },
    ActivateFocused,
    FocusNext,
    FocusPrev,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Record,
    Focus,
    Input,
    Quit,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Focus => "focus",
            Self::Input => "input",
            Self::Quit => "quit",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Record { .. } | Self::ActivateFocused => ActionId::Record,
            Self::FocusNext | Self::FocusPrev => ActionId::Focus,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Dropped because the cards are disabled while a click is in feedback.
    Ignored,
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Command};
    use crate::recorder::PageId;

    #[test]
    fn command_action_id_groups_record_and_focus_variants() {
        assert_eq!(
            Command::Record {
                page: PageId::About
            }
            .action_id(),
            ActionId::Record
        );
        assert_eq!(Command::ActivateFocused.action_id(), ActionId::Record);
        assert_eq!(Command::FocusPrev.action_id(), ActionId::Focus);
        assert_eq!(Command::Quit.action_id().as_str(), "quit");
    }
}
