use crate::model::{ActionKind, ServerId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Card navigation
    FocusNextCard,
    FocusPreviousCard,
    FocusCardAbove,
    FocusCardBelow,

    // Button navigation within the focused card
    NextButton,
    PreviousButton,

    // Pressing buttons
    PressFocused,
    Press(ActionKind),
    Click { column: u16, row: u16 },

    // Background results
    ActionSettled {
        server_id: ServerId,
        server_name: String,
        kind: ActionKind,
        error: Option<String>,
    },

    // UI operations
    CycleIcons,
    Tick,

    // App control
    Quit,
    None,
}
