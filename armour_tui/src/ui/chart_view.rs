//! Chart tab - formula series over the configured armour grid

use crate::app::App;
use armour_core::{fmt, generate_series_data, ChartDataType, SeriesData};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

const SERIES_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
];

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let damage_input = app.chart_damage_input();
    let steps = app.chart.armour_steps();
    let formulas = app.visible_formulas();

    let series: Vec<SeriesData> = formulas
        .iter()
        .map(|&formula| generate_series_data(formula, damage_input, &steps, app.chart_data_type))
        .collect();

    let data: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| s.points.iter().map(|p| (p.armour, p.value)).collect())
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(data.iter())
        .enumerate()
        .map(|(i, (s, points))| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect();

    let max_armour = steps.last().copied().unwrap_or(0.0);
    let (y_max, y_title) = match app.chart_data_type {
        ChartDataType::Reduction => (100.0, "Damage Reduction (%)"),
        ChartDataType::TotalDamage => (damage_input.max(1.0), "Damage Taken"),
    };

    let x_labels: Vec<Line> = [0.0, max_armour / 2.0, max_armour]
        .iter()
        .map(|&v| Line::from(fmt(v, 0)))
        .collect();
    let y_labels: Vec<Line> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|&v| Line::from(fmt(v, 0)))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Armour Effectiveness vs {} Damage Hit ",
            fmt(damage_input, 0)
        )))
        .x_axis(
            Axis::default()
                .title("Armour")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_armour])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
