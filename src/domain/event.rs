// marklet/src/domain/event.rs

/// Keys the global keydown handler distinguishes. Everything that is not
/// Backspace routes to `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Other,
}

/// UI events consumed by the event router, with standard modifier flags
/// where they matter. The event source (rendering layer) is out of scope;
/// it only has to deliver these in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on a bookmark card.
    ItemClick { url: String, shift: bool },
    /// Click on a card's link. The platform opens the url; the store
    /// re-saves the entry as a side effect.
    LinkClick { url: String },
    /// Click anywhere outside cards and input controls.
    BackgroundClick,
    /// Global keydown.
    KeyDown(Key),
    /// The Add button: save the current draft.
    Submit,
    /// The Clear button: empty the draft name only.
    ClearName,
    DraftNameChanged(String),
    DraftUrlChanged(String),
    /// Open or close the color picker popover.
    TogglePicker,
    /// A palette swatch was chosen.
    PaletteColor(String),
}
