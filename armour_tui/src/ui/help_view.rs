//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Tables/Chart/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select armour row / charted hit"),
        key_line("←/h  →/l", "Select damage table"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Editing ═══",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        key_line("a", "Add an armour row (type value, Enter)"),
        key_line("d", "Add a damage table (type value, Enter)"),
        key_line("x", "Remove the selected armour row"),
        key_line("X", "Remove the selected damage table"),
        key_line("r", "Restore both lists to defaults"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Display ═══",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        key_line("p", "Toggle comparison with legacy formulas"),
        key_line("t", "Chart reduction % or damage taken"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Formulas ═══",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Armour (Physical Reduction):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Reduction = Armour / (Armour + K × Damage)"),
        Line::from("  Taken = Damage × (1 - Reduction)"),
        Line::from("  More effective vs small hits, less vs big hits"),
        Line::from(""),
        Line::from(Span::styled(
            "Variants:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  PoE 2          K = 10"),
        Line::from("  PoE 2 legacy   K = 12  (comparison only)"),
        Line::from("  PoE 1          K = 5   (comparison only)"),
        Line::from(""),
        Line::from("Edits to both lists persist between sessions."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<18}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
