pub mod categorybar;
pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod list;
pub mod loading;
pub mod markdown;
pub mod pagination;
pub mod searchbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    if state.loading {
        loading::draw_loading(f, area, state);
    } else {
        draw_browse(f, area, state);
    }
}

fn draw_browse(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    searchbar::draw_searchbar(f, layout.searchbar, state);
    categorybar::draw_categorybar(f, layout.categorybar, state);
    list::draw_list(f, layout.list, state);
    pagination::draw_pagination(f, layout.pagination, state);
    keybar::draw_keybar(f, layout.keybar, state);

    if state.show_help {
        dialog::draw_help(f, area, state);
    }
}
