use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub searchbar: Rect,
    pub categorybar: Rect,
    pub list: Rect,
    pub pagination: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Length(3), // search box
            Constraint::Length(1), // category chips
            Constraint::Min(5),    // question list
            Constraint::Length(1), // pagination
            Constraint::Length(1), // keybar
        ])
        .split(area);

    AppLayout {
        titlebar: vertical[0],
        searchbar: vertical[1],
        categorybar: vertical[2],
        list: vertical[3],
        pagination: vertical[4],
        keybar: vertical[5],
    }
}
