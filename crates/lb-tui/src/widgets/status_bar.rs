use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Render the bottom status bar: command line, last message, or key hints.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let left: Vec<Span> = if let Some(input) = &app.command_input {
        vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]
    } else if let Some(msg) = &app.status_message {
        vec![Span::raw(msg.clone())]
    } else {
        let mut spans = Vec::new();
        for (key, desc) in [
            ("[a]", " Add Lead  "),
            ("[h/l]", " Column  "),
            ("[j/k]", " Card  "),
            ("[:]", " Command  "),
            ("[?]", " Help  "),
            ("[q]", " Quit"),
        ] {
            spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(desc));
        }
        spans
    };

    // Left content and right-aligned clock share one line; pad the middle.
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let left_len: usize = left.iter().map(|s| s.width()).sum();
    let total_width = usize::from(area.width);
    let padding = total_width
        .checked_sub(left_len + now.len())
        .filter(|p| *p > 0)
        .unwrap_or(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(now, Style::default().fg(Color::DarkGray)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
