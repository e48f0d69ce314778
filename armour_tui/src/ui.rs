//! UI rendering

mod chart_view;
mod help_view;
mod table_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer / input prompt
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Tables => table_view::draw(f, app, chunks[1]),
        Tab::Chart => chart_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    if app.input.is_some() {
        draw_input(f, app, chunks[2]);
    } else {
        draw_keybindings(f, app, chunks[2]);
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all().iter().map(|tab| Line::from(tab.name())).collect();
    let selected = Tab::all()
        .iter()
        .position(|tab| *tab == app.current_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PoE 2 Armour "),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let Some(input) = &app.input else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", input.target.label()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            input.buffer.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "   [Enter] Confirm  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Add Value "));

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Tables => vec![
            ("↑/↓", "Row"),
            ("←/→", "Table"),
            ("a", "Add armour"),
            ("d", "Add damage"),
            ("x/X", "Remove row/table"),
            ("p", "Compare"),
            ("r", "Defaults"),
        ],
        Tab::Chart => vec![("↑/↓", "Hit damage"), ("t", "Data type"), ("p", "Compare")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}
