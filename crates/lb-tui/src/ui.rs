use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, QUICK_ACTIONS};
use crate::board;
use crate::widgets::{add_lead_modal, help_modal, stat_cards, status_bar};

/// Master render function: header, stat cards, board, quick actions, status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // stat cards
            Constraint::Min(0),    // board
            Constraint::Length(4), // quick actions
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    let view = app.view();
    stat_cards::render(frame, &view.stats, &app.board.currency_symbol, chunks[1]);
    board::render(frame, app, chunks[2]);
    render_quick_actions(frame, chunks[3]);
    status_bar::render(frame, app, chunks[4]);

    if app.show_add_modal {
        add_lead_modal::render(frame);
    } else if app.show_help {
        help_modal::render(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Lead Tracking & CRM",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Manage your sales pipeline",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, halves[0]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled("[a]", Style::default().fg(Color::Yellow)),
        Span::styled(
            " Add Lead ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(button, halves[1]);
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quick Actions ")
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for (cell, (_, title, subtitle)) in cells.iter().zip(QUICK_ACTIONS) {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                *title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*subtitle, Style::default().fg(Color::Gray))),
        ]);
        frame.render_widget(text, *cell);
    }
}
