use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::pager::{self, PageLabel};
use crate::state::AppState;

/// Control segments as (text, click target). A `None` target is inert:
/// ellipsis markers, gaps, and disabled prev/next.
fn segments(state: &AppState) -> Vec<(String, Option<usize>)> {
    let total = state.total_pages();
    let current = state.current_page;

    let mut segs: Vec<(String, Option<usize>)> = Vec::new();
    if total <= 1 {
        return segs;
    }

    segs.push((" ".to_string(), None));
    segs.push((
        "◀ Prev".to_string(),
        if current > 1 { Some(current - 1) } else { None },
    ));
    segs.push(("  ".to_string(), None));
    for label in pager::page_labels(total, current, pager::MAX_PAGE_BUTTONS) {
        match label {
            PageLabel::Page(page) => segs.push((format!(" {} ", page), Some(page))),
            PageLabel::Ellipsis => segs.push((" … ".to_string(), None)),
        }
    }
    segs.push(("  ".to_string(), None));
    segs.push((
        "Next ▶".to_string(),
        if current < total { Some(current + 1) } else { None },
    ));
    segs
}

pub fn draw_pagination(f: &mut Frame, area: Rect, state: &AppState) {
    let total = state.total_pages();
    let matches = state.match_count();

    let summary = if total <= 1 {
        format!("{} question{} ", matches, if matches == 1 { "" } else { "s" })
    } else {
        format!("Page {}/{} · {} matches ", state.current_page, total, matches)
    };

    let mut spans: Vec<Span> = Vec::new();
    let mut used = 0;
    for (text, target) in segments(state) {
        used += text.chars().count();
        let style = match target {
            Some(page) if page == state.current_page => Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default().fg(Color::Gray),
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(text, style));
    }

    let pad = (area.width as usize).saturating_sub(used + summary.chars().count());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(
        summary,
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(Line::from(spans));
    f.render_widget(widget, area);
}

/// Target page of the control under column `x`, mirroring
/// draw_pagination's span layout. Ellipsis and gaps return None.
pub fn target_at(state: &AppState, area: Rect, x: u16) -> Option<usize> {
    if x < area.x {
        return None;
    }
    let rel = (x - area.x) as usize;
    let mut col = 0;
    for (text, target) in segments(state) {
        let width = text.chars().count();
        if rel >= col && rel < col + width {
            return target;
        }
        col += width;
    }
    None
}
