//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Mode, ToastKind};
use crate::tui::theme::{get_theme, to_tui_color, Theme};
use harmonia::Rgb;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{help, swatches};

/// Main layout structure:
/// ┌──────────────────────────────────────────────────┐
/// │ Base ■ #3366CC │ Analogous │ 5 colors │ css       │
/// ├─────────┬─────────┬─────────┬─────────┬──────────┤
/// │ #3366CC │ #33A3CC │ ...     │         │          │
/// │         │         │         │         │          │
/// ├─────────┴─────────┴─────────┴─────────┴──────────┤
/// │ status / edit prompt / toast                      │
/// └──────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Settings header
            Constraint::Min(6),    // Swatches (or help)
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    let theme = get_theme();
    render_header(frame, state, &theme, rows[0]);
    if state.show_help {
        help::render(frame, rows[1]);
    } else {
        swatches::render(frame, state, rows[1]);
    }
    render_status(frame, state, &theme, rows[2]);
}

fn render_header(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let engine = &state.engine;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} harmonia ", icons.palette))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(theme.palette.fg_secondary);
    let value = Style::default()
        .fg(theme.palette.fg_primary)
        .add_modifier(Modifier::BOLD);
    let sep = Span::styled(format!("  {}  ", icons.separator), label);

    let base_chip = Rgb::parse(engine.base())
        .map(|rgb| Span::styled("■ ", Style::default().fg(to_tui_color(rgb))))
        .unwrap_or_else(|_| Span::raw(""));

    let base_value = match &state.mode {
        Mode::EditBase { buffer } => Span::styled(format!("{} {}_", icons.edit, buffer), value),
        _ => Span::styled(engine.base().to_string(), value),
    };

    let line = Line::from(vec![
        Span::styled(" Base ", label),
        base_chip,
        base_value,
        sep.clone(),
        Span::styled("Harmony ", label),
        Span::styled(engine.harmony().label(), value),
        sep.clone(),
        Span::styled("Colors ", label),
        Span::styled(engine.count().to_string(), value),
        sep.clone(),
        Span::styled("Locked ", label),
        Span::styled(engine.palette().locked_count().to_string(), value),
        sep,
        Span::styled("Export ", label),
        Span::styled(state.export_format.name(), value),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_status(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if let Some(toast) = &state.toast {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.success),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        Line::from(Span::styled(
            format!(" {} {}", icon, toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hint = match &state.mode {
            Mode::Normal => {
                "space regenerate  r randomize  L lock  e edit  t harmony  +/- count  x export  ? help  q quit"
            }
            Mode::EditColor { .. } | Mode::EditBase { .. } => {
                "type hex digits  enter apply  esc cancel"
            }
        };
        Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    };

    frame.render_widget(Paragraph::new(line), inner);
}
