use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn binding_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("   {:<10}", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action.to_string()),
    ])
}

pub fn draw_help(f: &mut Frame, area: Rect, _state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Keys",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        binding_line("/", "focus the search field"),
        binding_line("Esc", "leave the search field"),
        binding_line("↑/↓", "select a question"),
        binding_line("Enter", "expand or collapse the answer"),
        binding_line("←/→", "previous / next page"),
        binding_line("PgUp/PgDn", "previous / next page"),
        binding_line("Home/End", "first / last page"),
        binding_line("1-9", "jump to that page"),
        binding_line("Tab", "next category"),
        binding_line("Shift+Tab", "previous category"),
        binding_line("q, Ctrl+Q", "quit"),
        Line::from(""),
        Line::from(Span::styled(
            "   [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(46, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
