pub mod actions;
pub mod events;
pub mod state;

use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use anyhow::Context;
use events::Event;
use harmonia::config::{self, Config};
use state::{AppState, Mode, Toast};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: PathBuf,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, config_path: PathBuf) -> anyhow::Result<Self> {
        let engine = cfg.palette.engine()?;
        let state = AppState::new(engine, cfg.export.format);

        Ok(Self {
            cfg,
            config_path,
            state,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());

        // First draw
        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.palette.remember(&self.state.engine);
        self.cfg.export.format = self.state.export_format;

        if let Err(e) = config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let state = &mut self.state;

        match action {
            Action::Quit => state.should_quit = true,
            Action::Resize => {}
            Action::ToggleHelp => state.show_help = !state.show_help,

            Action::SelectPrev => state.select_prev(),
            Action::SelectNext => state.select_next(),
            Action::Select(i) => state.select(i),

            Action::Regenerate => {
                state.engine.regenerate();
            }
            Action::Randomize => {
                state.engine.randomize();
            }
            Action::ToggleLock => {
                if let Err(e) = state.engine.toggle_lock(state.selected) {
                    state.toast = Some(Toast::error(e.to_string()));
                }
            }
            Action::NextHarmony => {
                let next = state.engine.harmony().next();
                state.engine.set_harmony(next);
                state.engine.regenerate();
            }
            Action::PrevHarmony => {
                let prev = state.engine.harmony().prev();
                state.engine.set_harmony(prev);
                state.engine.regenerate();
            }
            Action::CountUp => self.change_count(1),
            Action::CountDown => self.change_count(-1),
            Action::UseSelectedAsBase => {
                let Some(hex) = state.selected_hex().map(str::to_string) else {
                    return;
                };
                match state.engine.set_base(&hex) {
                    Ok(()) => {
                        state.engine.regenerate();
                        state.toast = Some(Toast::success(format!("Base set to {hex}")));
                    }
                    Err(e) => state.toast = Some(Toast::error(e.to_string())),
                }
            }

            Action::StartEditColor => {
                if let Some(hex) = state.selected_hex().map(str::to_string) {
                    state.mode = Mode::EditColor {
                        index: state.selected,
                        buffer: hex,
                    };
                }
            }
            Action::StartEditBase => {
                state.mode = Mode::EditBase {
                    buffer: state.engine.base().to_string(),
                };
            }
            Action::InputChar(c) => {
                if let Some(buffer) = state.mode.buffer_mut()
                    && buffer.len() < 7
                    && (c.is_ascii_hexdigit() || (c == '#' && buffer.is_empty()))
                {
                    buffer.push(c.to_ascii_uppercase());
                }
            }
            Action::Backspace => {
                if let Some(buffer) = state.mode.buffer_mut() {
                    buffer.pop();
                }
            }
            Action::Cancel => state.mode = Mode::Normal,
            Action::Submit => self.submit_edit(),

            Action::CycleExportFormat => state.export_format = state.export_format.next(),
            Action::Export => {
                let toast = match self.export() {
                    Ok(path) => Toast::success(format!("Exported to {}", path.display())),
                    Err(e) => Toast::error(format!("Export failed: {e:#}")),
                };
                self.state.toast = Some(toast);
            }
        }
    }

    fn change_count(&mut self, delta: isize) {
        let state = &mut self.state;
        let Some(count) = state.engine.count().checked_add_signed(delta) else {
            return;
        };

        match state.engine.set_count(count) {
            Ok(()) => {
                state.engine.regenerate();
                state.clamp_selection();
            }
            Err(e) => state.toast = Some(Toast::error(e.to_string())),
        }
    }

    /// Apply the edit buffer. On invalid input the edit stays open.
    fn submit_edit(&mut self) {
        let state = &mut self.state;
        let result = match &state.mode {
            Mode::Normal => return,
            Mode::EditColor { index, buffer } => {
                state.engine.update_color(*index, buffer).map(|_| ())
            }
            Mode::EditBase { buffer } => state.engine.set_base(buffer).map(|()| {
                state.engine.regenerate();
            }),
        };

        match result {
            Ok(()) => state.mode = Mode::Normal,
            Err(e) => state.toast = Some(Toast::error(e.to_string())),
        }
    }

    fn export(&self) -> anyhow::Result<PathBuf> {
        let format = self.state.export_format;
        let body = format
            .render(self.state.engine.palette())
            .context("render palette")?;

        let dir = &self.cfg.export.dir;
        std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        let path = dir.join(format!("palette.{}", format.extension()));
        std::fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;

        tracing::debug!(path = %path.display(), format = %format, "exported palette");
        Ok(path)
    }
}
