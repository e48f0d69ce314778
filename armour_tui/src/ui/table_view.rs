//! Mitigation tables tab - one table per damage value

use crate::app::App;
use armour_core::fmt;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let damages = app.damages.get();

    if damages.is_empty() {
        let paragraph = Paragraph::new("No damage tables. Press [d] to add one.")
            .block(Block::default().borders(Borders::ALL).title(" Damage Tables "));
        f.render_widget(paragraph, area);
        return;
    }

    let constraints: Vec<Constraint> = damages
        .iter()
        .map(|_| Constraint::Ratio(1, damages.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (&damage, chunk)) in damages.iter().zip(chunks.iter()).enumerate() {
        draw_damage_table(f, app, *chunk, damage, i == app.selected_table);
    }
}

fn draw_damage_table(f: &mut Frame, app: &App, area: Rect, damage: f64, is_selected: bool) {
    let armours = app.armours.get();
    let formulas = app.visible_formulas();

    let mut lines: Vec<Line> = vec![];

    // Column headers: one reduction/taken pair per visible formula
    let mut header = vec![Span::styled(
        format!("  {:>9}", "Armour"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for &formula in &formulas {
        header.push(Span::styled(
            format!("  {:>17}", formula.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(header));

    let mut subheader = vec![Span::styled(
        format!("  {:>9}", ""),
        Style::default().fg(Color::DarkGray),
    )];
    for _ in &formulas {
        subheader.push(Span::styled(
            format!("  {:>8} {:>8}", "Red%", "Taken"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(subheader));

    for (row, &armour) in armours.iter().enumerate() {
        let selected = is_selected && row == app.selected_row;
        let (prefix, style) = if selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let mut spans = vec![Span::styled(
            format!("{}{:>9}", prefix, fmt(armour, 0)),
            style,
        )];
        for &formula in &formulas {
            let percent = formula.reduction_percent(armour, damage);
            let taken = formula.total_damage(armour, damage);
            spans.push(Span::styled(
                format!("  {:>7}% {:>8}", fmt(percent, 1), fmt(taken, 1)),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    if app.is_all_default() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  at defaults",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Hit for {} ", fmt(damage, 0))),
    );

    f.render_widget(paragraph, area);
}
