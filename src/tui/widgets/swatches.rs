//! Swatch row - one filled block per palette entry

use crate::app::state::{AppState, Mode};
use crate::tui::theme::{get_theme, to_tui_color};
use harmonia::contrast::contrast_text_rgb;
use harmonia::{Color as Swatch, Rgb};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let palette = state.engine.palette();
    if palette.is_empty() {
        return;
    }

    let n = palette.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (i, (swatch, col)) in palette.iter().zip(cols.iter()).enumerate() {
        render_swatch(frame, state, i, swatch, *col);
    }
}

fn render_swatch(frame: &mut Frame, state: &AppState, index: usize, swatch: &Swatch, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let is_selected = index == state.selected;

    // Stored hexes are canonical; black is only a fallback.
    let rgb = Rgb::parse(&swatch.hex).unwrap_or(Rgb::BLACK);
    let bg = to_tui_color(rgb);
    let fg = to_tui_color(contrast_text_rgb(rgb));

    let border_style = if is_selected {
        Style::default()
            .fg(theme.palette.selected_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(border_style)
        .title(if is_selected {
            format!(" {} {} ", icons.selected, index + 1)
        } else {
            format!(" {} ", index + 1)
        })
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = match &state.mode {
        Mode::EditColor { index: editing, buffer } if *editing == index => {
            format!("{} {}_", icons.edit, buffer)
        }
        _ => swatch.hex.clone(),
    };

    let text_style = Style::default().fg(fg).bg(bg);
    let mut lines = vec![
        Line::from(Span::styled(label, text_style.add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(
            format!("{} {}", icons.lock_state(swatch.locked), if swatch.locked { "locked" } else { "" }),
            text_style,
        )),
    ];

    // Center vertically
    let top_padding = (inner.height as usize).saturating_sub(lines.len()) / 2;
    let mut centered: Vec<Line> = vec![Line::default(); top_padding];
    centered.append(&mut lines);

    let body = Paragraph::new(centered)
        .style(Style::default().bg(bg))
        .alignment(Alignment::Center);
    frame.render_widget(body, inner);
}
