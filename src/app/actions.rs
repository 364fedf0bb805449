#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize,
    ToggleHelp,

    SelectPrev,
    SelectNext,
    Select(usize),

    // Engine operations
    Regenerate,
    Randomize,
    ToggleLock,
    NextHarmony,
    PrevHarmony,
    CountUp,
    CountDown,
    UseSelectedAsBase,

    // Hex editing
    StartEditColor,
    StartEditBase,
    InputChar(char),
    Backspace,
    Submit,
    Cancel,

    // Export
    CycleExportFormat,
    Export,
}
