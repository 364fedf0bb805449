use harmonia::{ExportFormat, PaletteEngine};

/// What keystrokes currently feed into
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing a replacement hex for the swatch at `index`
    EditColor { index: usize, buffer: String },
    /// Typing a new base color
    EditBase { buffer: String },
}

impl Mode {
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Mode::Normal => None,
            Mode::EditColor { buffer, .. } | Mode::EditBase { buffer } => Some(buffer),
        }
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self, Mode::Normal)
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub engine: PaletteEngine,
    pub selected: usize,
    pub mode: Mode,
    pub export_format: ExportFormat,
    pub show_help: bool,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(engine: PaletteEngine, export_format: ExportFormat) -> Self {
        Self {
            should_quit: false,
            engine,
            selected: 0,
            mode: Mode::Normal,
            export_format,
            show_help: false,
            toast: None,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.engine.palette().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.engine.palette().len() {
            self.selected = index;
        }
    }

    /// Keep the selection inside the palette after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.engine.palette().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_hex(&self) -> Option<&str> {
        self.engine
            .palette()
            .get(self.selected)
            .map(|c| c.hex.as_str())
    }
}
