use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::filter;
use crate::model::ALL_CATEGORY;
use crate::state::AppState;

/// Chip text + the category id it selects, in display order. Counts come
/// from the full dataset, never the filtered subset.
fn chips(state: &AppState) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(state.categories.len() + 1);
    out.push((
        format!(" All ({}) ", state.questions.len()),
        ALL_CATEGORY.to_string(),
    ));
    for category in &state.categories {
        let count = filter::count_in_category(&state.questions, &category.id);
        out.push((format!(" {} ({}) ", category.name, count), category.id.clone()));
    }
    out
}

pub fn draw_categorybar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (text, id)) in chips(state).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if id == state.selected_category {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(text, style));
    }

    let widget = Paragraph::new(Line::from(spans));
    f.render_widget(widget, area);
}

/// Category id of the chip under column `x`, mirroring draw_categorybar's
/// span layout.
pub fn chip_at(state: &AppState, area: Rect, x: u16) -> Option<String> {
    if x < area.x {
        return None;
    }
    let rel = (x - area.x) as usize;
    let mut col = 1; // leading space
    for (i, (text, id)) in chips(state).into_iter().enumerate() {
        if i > 0 {
            col += 1;
        }
        let width = text.chars().count();
        if rel >= col && rel < col + width {
            return Some(id);
        }
        col += width;
    }
    None
}
