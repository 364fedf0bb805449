//! Help screen showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the help screen
pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Palette", &theme),
        keybind("Space / g", "Regenerate from base + harmony", &theme),
        keybind("r", "Randomize unlocked colors", &theme),
        keybind("L / Enter", "Lock / unlock selected", &theme),
        keybind("t / Tab", "Next harmony", &theme),
        keybind("T", "Previous harmony", &theme),
        keybind("+ / =", "More colors", &theme),
        keybind("- / _", "Fewer colors", &theme),
        Line::default(),
        section_header("Selection", &theme),
        keybind("h / Left", "Previous color", &theme),
        keybind("l / Right", "Next color", &theme),
        keybind("1-9, 0", "Jump to color", &theme),
    ];
    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);

    let right_content = vec![
        section_header("Editing", &theme),
        keybind("e", "Edit selected hex", &theme),
        keybind("b", "Edit base color", &theme),
        keybind("B", "Use selected as base", &theme),
        keybind("Enter", "Apply edit", &theme),
        keybind("Esc", "Cancel edit", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("f", "Cycle export format", &theme),
        keybind("x", "Export palette to file", &theme),
        keybind("?", "Toggle this help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
