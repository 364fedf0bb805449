use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    _ => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Some(Action::SelectPrev),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(Action::SelectNext),
            _ => None,
        },
        InputEvent::Key(k) if state.mode.is_editing() => handle_edit_mode(k),
        InputEvent::Key(k) if state.show_help => match k.code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => Some(Action::ToggleHelp),
        },
        InputEvent::Key(k) => handle_normal_mode(k),
    }
}

fn handle_edit_mode(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_normal_mode(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectNext),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Select(c as usize - '1' as usize)),
        KeyCode::Char('0') => Some(Action::Select(9)),

        KeyCode::Char(' ') | KeyCode::Char('g') => Some(Action::Regenerate),
        KeyCode::Char('r') => Some(Action::Randomize),
        KeyCode::Char('L') | KeyCode::Enter => Some(Action::ToggleLock),
        KeyCode::Char('t') | KeyCode::Tab => Some(Action::NextHarmony),
        KeyCode::Char('T') | KeyCode::BackTab => Some(Action::PrevHarmony),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::CountUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::CountDown),

        KeyCode::Char('e') => Some(Action::StartEditColor),
        KeyCode::Char('b') => Some(Action::StartEditBase),
        KeyCode::Char('B') => Some(Action::UseSelectedAsBase),

        KeyCode::Char('f') => Some(Action::CycleExportFormat),
        KeyCode::Char('x') => Some(Action::Export),
        _ => None,
    }
}
