use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use lb_core::format::format_thousands;
use lb_core::pipeline::PipelineStats;

/// Four headline cards: total, active pipeline, value, average score.
pub fn render(frame: &mut Frame, stats: &PipelineStats, currency_symbol: &str, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let cards: [(&str, String, Color); 4] = [
        ("Total Leads", stats.total.to_string(), Color::White),
        ("Active Pipeline", stats.qualified.to_string(), Color::Blue),
        (
            "Pipeline Value",
            format_thousands(stats.total_value, currency_symbol),
            Color::Green,
        ),
        ("Avg Lead Score", stats.avg_score.to_string(), Color::LightRed),
    ];

    for (i, (title, value, color)) in cards.into_iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(text, cols[i]);
    }
}
