use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use lb_core::pipeline::StageColumn;
use lb_core::types::StageTag;

use crate::app::App;
use crate::widgets::lead_card;

pub fn tag_color(tag: StageTag) -> Color {
    match tag {
        StageTag::Gray => Color::Gray,
        StageTag::Blue => Color::Blue,
        StageTag::Yellow => Color::Yellow,
        StageTag::Orange => Color::LightRed,
        StageTag::Green => Color::Green,
    }
}

/// Kanban board: one column per stage, lead cards stacked inside.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (i, column) in view.columns.iter().enumerate() {
        render_column(frame, app, column, i == app.column, columns[i]);
    }
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    column: &StageColumn<'_>,
    active: bool,
    area: Rect,
) {
    let color = tag_color(column.definition.tag);
    let border_style = if active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", column.definition.label, column.len()))
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if column.is_empty() {
        let empty = Paragraph::new("No leads in this stage")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let y = inner.y + inner.height / 3;
        if inner.height > 0 {
            frame.render_widget(empty, Rect::new(inner.x, y, inner.width, 1));
        }
        return;
    }

    let notes_lines = app.board.notes_lines;
    let height = lead_card::card_height(notes_lines);
    let visible = usize::from((inner.height / height).max(1));
    let offset = if active {
        app.selected_card.saturating_sub(visible - 1)
    } else {
        0
    };

    let mut y = inner.y;
    for (idx, lead) in column.leads.iter().enumerate().skip(offset).take(visible) {
        let h = height.min(inner.y + inner.height - y);
        if h == 0 {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, h);
        let selected = active && idx == app.selected_card;
        lead_card::render(
            frame,
            card_area,
            lead,
            selected,
            notes_lines,
            &app.board.currency_symbol,
        );
        y += h;
    }
}
