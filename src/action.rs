use crate::app::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateTop,
    NavigateBottom,
    PageUp,
    PageDown,

    // Vim chord
    EnterPendingG,
    CancelPending,

    // Search fields
    EditField(Field),
    SwitchField,
    UpdateInput(String),
    StopEditing,
    Submit,

    // UI
    ToggleHelp,
    CloseOverlay,

    // App control
    Quit,
    Tick,
}
