//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub lock: &'static str,
    pub unlock: &'static str,
    pub selected: &'static str,
    pub edit: &'static str,
    pub help: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub separator: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f1fc}",  // nf-fa-paint_brush
            lock: "\u{f023}",     // nf-fa-lock
            unlock: "\u{f09c}",   // nf-fa-unlock
            selected: "\u{f0d7}", // nf-fa-caret_down
            edit: "\u{f044}",     // nf-fa-pencil_square_o
            help: "\u{f059}",     // nf-fa-question_circle
            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times
            separator: "│",
        }
    }

    pub fn lock_state(&self, locked: bool) -> &'static str {
        if locked { self.lock } else { self.unlock }
    }
}
