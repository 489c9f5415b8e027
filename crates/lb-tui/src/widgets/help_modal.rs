use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;

/// Render a centered help modal overlay.
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the area behind the popup.
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "  Keybindings",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_line("a", "Add lead"),
        help_line("1-5", "Jump to column"),
        help_line("h / Left", "Column left"),
        help_line("l / Right", "Column right"),
        help_line("j / Down", "Next card"),
        help_line("k / Up", "Previous card"),
        help_line("c / v", "Contact / view selected lead"),
        help_line(":", "Command mode"),
        help_line("?", "Toggle this help"),
        help_line("Esc", "Close modal / cancel"),
        help_line("q", "Quit"),
        help_line("Ctrl-c", "Force quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{key:<20}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(desc.to_string()),
    ])
}
