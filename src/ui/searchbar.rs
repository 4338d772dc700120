use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, InputMode};

pub fn draw_searchbar(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.input_mode == InputMode::Search;

    let line = if state.search_input.is_empty() && !focused {
        Line::from(Span::styled(
            "Search questions...  (press / to search)",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        line_with_cursor(&state.search_input, state.search_cursor)
    } else {
        Line::from(Span::raw(state.search_input.clone()))
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(border_style);

    let widget = Paragraph::new(line).block(block);
    f.render_widget(widget, area);
}

/// Render the input with a block cursor at the char position.
fn line_with_cursor(input: &str, cursor: usize) -> Line<'static> {
    let chars: Vec<char> = input.chars().collect();
    let before: String = chars.iter().take(cursor).collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars.iter().skip(cursor + 1).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}
