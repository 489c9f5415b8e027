use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use lb_core::format::{format_currency, star_rating};
use lb_core::types::Lead;

/// Rows a card occupies: borders, five detail rows, notes, buttons.
pub fn card_height(notes_lines: u16) -> u16 {
    2 + 5 + notes_lines + 1
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    lead: &Lead,
    selected: bool,
    notes_lines: u16,
    currency_symbol: &str,
) {
    let width = usize::from(area.width.saturating_sub(2));
    let dim = Style::default().fg(Color::Gray);
    let value = format_currency(lead.value, currency_symbol);

    let mut lines = vec![
        spread(
            Span::styled(
                truncate(&lead.name, width.saturating_sub(6)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(star_rating(lead.score), Style::default().fg(Color::Yellow)),
            width,
        ),
        Line::from(Span::styled(truncate(&lead.source, width), dim)),
        Line::from(Span::styled(truncate(&lead.email, width), dim)),
        Line::from(Span::styled(truncate(&lead.phone, width), dim)),
        spread(
            Span::styled(
                value.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                truncate(&lead.last_contact, width.saturating_sub(value.width() + 1)),
                Style::default().fg(Color::DarkGray),
            ),
            width,
        ),
    ];

    let mut notes = clamp_lines(&lead.notes, width, usize::from(notes_lines));
    notes.resize(usize::from(notes_lines), String::new());
    lines.extend(notes.into_iter().map(|n| Line::from(Span::styled(n, dim))));

    lines.push(Line::from(vec![
        Span::styled(
            "[Contact]",
            Style::default().fg(Color::White).bg(Color::Blue),
        ),
        Span::raw(" "),
        Span::styled("[View]", Style::default().fg(Color::Gray)),
    ]));

    let border_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}

/// Left and right spans on one line, padded apart to `width`.
fn spread<'a>(left: Span<'a>, right: Span<'a>, width: usize) -> Line<'a> {
    let used = left.content.width() + right.content.width();
    let padding = width.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(padding)), right])
}

/// Cut `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` to `width` columns and keep at most `max_lines` lines.
///
/// When text is dropped the last kept line ends in `…`. Words wider than
/// the line are split.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word alone is too wide: hard-split it.
            let (head, tail) = split_at_width(&word, width);
            lines.push(head);
            word = tail;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let cut = truncate(last, width.saturating_sub(1));
            *last = format!("{}…", cut.trim_end_matches('…'));
        }
    }
    lines
}

fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut used = 0;
    for (idx, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && idx > 0 {
            return (word[..idx].to_string(), word[idx..].to_string());
        }
        used += w;
    }
    (word.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Website", 10), "Website");
    }

    #[test]
    fn truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("sarah@email.com", 8), "sarah@e…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn clamp_fits_in_two_lines() {
        let lines = clamp_lines("Looking for 3BR in Fort Myers", 20, 2);
        assert_eq!(lines, vec!["Looking for 3BR in", "Fort Myers"]);
    }

    #[test]
    fn clamp_drops_overflow_with_ellipsis() {
        let lines = clamp_lines("one two three four five six seven", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 9);
    }

    #[test]
    fn clamp_splits_long_word() {
        let lines = clamp_lines("abcdefghij", 4, 5);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn clamp_empty_notes() {
        assert!(clamp_lines("", 10, 2).is_empty());
        assert!(clamp_lines("text", 10, 0).is_empty());
    }

    #[test]
    fn card_height_includes_notes() {
        assert_eq!(card_height(2), 10);
        assert_eq!(card_height(3), 11);
    }
}
