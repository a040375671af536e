//! Views for the chart viewer
//!
//! A tab bar naming the charts, the active chart, and a key-hint status line.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::charts::{draw_chart, ChartKind};
use crate::tui::app::App;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let titles: Vec<Line> = ChartKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind.title())))
        .collect();
    let selected = ChartKind::ALL
        .iter()
        .position(|kind| *kind == app.active_chart)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" boxoffice "))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(app.active_chart.color())
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    draw_chart(app.active_chart, app.analysis, chunks[1], frame.buffer_mut());

    let status = Paragraph::new(Line::from(vec![
        Span::styled(" Tab/←→ ", Style::default().fg(Color::Cyan)),
        Span::raw("switch chart  "),
        Span::styled("1-3 ", Style::default().fg(Color::Cyan)),
        Span::raw("jump  "),
        Span::styled("q ", Style::default().fg(Color::Cyan)),
        Span::raw("quit"),
    ]));
    frame.render_widget(status, chunks[2]);
}
