use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::model::Difficulty;
use crate::state::AppState;
use crate::ui::markdown::{answer_to_lines, wrap_styled_line};

const ANSWER_INDENT: usize = 6;

pub struct ListRows {
    pub lines: Vec<Line<'static>>,
    /// First line index of each visible item, parallel to the page slice.
    pub item_starts: Vec<usize>,
}

fn difficulty_badge(difficulty: Difficulty) -> Span<'static> {
    let color = match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    };
    Span::styled(
        format!("[{}]", difficulty.label()),
        Style::default().fg(color),
    )
}

/// Build the accordion lines for the current page. The mouse hit test
/// mirrors this exactly, so any layout change happens here only.
pub fn build_rows(state: &AppState, width: usize) -> ListRows {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut item_starts: Vec<usize> = Vec::new();

    let indices = state.page_indices();
    for (pos, &qi) in indices.iter().enumerate() {
        let question = &state.questions[qi];
        let is_current = pos == state.cursor;
        let open = state.is_expanded(&question.id);

        item_starts.push(lines.len());

        let cursor_mark = if is_current { " ▸ " } else { "   " };
        let expand_mark = if open { "▼ " } else { "▶ " };
        let question_style = if is_current {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let header = Line::from(vec![
            Span::styled(cursor_mark.to_string(), question_style),
            Span::styled(expand_mark.to_string(), Style::default().fg(Color::Cyan)),
            difficulty_badge(question.difficulty),
            Span::raw(" "),
            Span::styled(question.question.clone(), question_style),
        ]);
        lines.extend(wrap_styled_line(header, width));

        if open {
            let base = Style::default().fg(Color::Gray);
            let answer_width = width.saturating_sub(ANSWER_INDENT);
            for answer_line in answer_to_lines(&question.answer, base) {
                for wrapped in wrap_styled_line(answer_line, answer_width) {
                    let mut spans = vec![Span::raw(" ".repeat(ANSWER_INDENT))];
                    spans.extend(wrapped.spans);
                    lines.push(Line::from(spans));
                }
            }
        }

        lines.push(Line::from(""));
    }

    ListRows { lines, item_starts }
}

/// Scroll offset used for drawing: the selected header stays visible,
/// bottom-anchored once it runs past the viewport.
pub fn effective_scroll(state: &AppState, rows: &ListRows, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let max_scroll = rows.lines.len().saturating_sub(height);
    let cursor_line = rows.item_starts.get(state.cursor).copied().unwrap_or(0);
    let scroll = if cursor_line >= height {
        cursor_line + 1 - height
    } else {
        0
    };
    scroll.min(max_scroll)
}

pub fn draw_list(f: &mut Frame, area: Rect, state: &AppState) {
    let indices = state.page_indices();

    if indices.is_empty() {
        let message = if state.questions.is_empty() {
            "No questions available."
        } else {
            "No questions found matching your search."
        };
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::DarkGray))),
        ];
        let widget = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        f.render_widget(widget, area);
        return;
    }

    let width = (area.width as usize).saturating_sub(3);
    let rows = build_rows(state, width);
    let height = area.height as usize;
    let scroll = effective_scroll(state, &rows, height);
    let total = rows.lines.len();

    let widget = Paragraph::new(rows.lines).scroll((scroll as u16, 0));
    f.render_widget(widget, area);

    if total > height {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(height))
            .position(scroll)
            .viewport_content_length(height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Page position of the item drawn at terminal row `row`, mirroring
/// draw_list's layout math.
pub fn item_at(state: &AppState, area: Rect, row: u16) -> Option<usize> {
    if row < area.y || row >= area.y + area.height {
        return None;
    }
    let width = (area.width as usize).saturating_sub(3);
    let rows = build_rows(state, width);
    let height = area.height as usize;
    let scroll = effective_scroll(state, &rows, height);

    let line = scroll + (row - area.y) as usize;
    if line >= rows.lines.len() {
        return None;
    }

    let mut hit = None;
    for (pos, &start) in rows.item_starts.iter().enumerate() {
        if line >= start {
            hit = Some(pos);
        } else {
            break;
        }
    }
    hit
}
