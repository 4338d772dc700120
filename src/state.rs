use std::collections::HashSet;

use crate::dataset::LoadedDataset;
use crate::filter;
use crate::model::{Category, Config, Question, ALL_CATEGORY};
use crate::pager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigation,
    Search,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub title: String,
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
    pub page_size: usize,
    pub search_input: String,
    /// Char index into search_input.
    pub search_cursor: usize,
    pub selected_category: String,
    /// 1-based; clamped against the filtered count whenever it changes.
    pub current_page: usize,
    /// True until the dataset retrieval settles; the loading screen stays
    /// up so an empty list is never mistaken for "no results".
    pub loading: bool,
    pub load_error: Option<String>,
    pub skipped_records: usize,
    /// Selection within the visible page.
    pub cursor: usize,
    /// Ids of questions with their answer open.
    pub expanded: HashSet<String>,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            title: config.title(),
            questions: Vec::new(),
            categories: config.categories(),
            page_size: config.page_size(),
            search_input: String::new(),
            search_cursor: 0,
            selected_category: ALL_CATEGORY.to_string(),
            current_page: 1,
            loading: true,
            load_error: None,
            skipped_records: 0,
            cursor: 0,
            expanded: HashSet::new(),
            input_mode: InputMode::Navigation,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn apply_dataset(&mut self, loaded: LoadedDataset) {
        self.questions = loaded.questions;
        self.skipped_records = loaded.skipped;
        self.loading = false;
        self.reclamp_page();
    }

    pub fn apply_load_failure(&mut self, error: String) {
        self.load_error = Some(error);
        self.questions = Vec::new();
        self.loading = false;
        self.reclamp_page();
    }

    // Derived views. Recomputed on demand; never stored.

    pub fn filtered_questions(&self) -> Vec<usize> {
        filter::filter_questions(&self.questions, &self.search_input, &self.selected_category)
    }

    pub fn match_count(&self) -> usize {
        self.filtered_questions().len()
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.match_count(), self.page_size)
    }

    /// Dataset indices of the questions on the current page.
    pub fn page_indices(&self) -> Vec<usize> {
        let filtered = self.filtered_questions();
        let page = pager::clamp_page(self.current_page, pager::total_pages(filtered.len(), self.page_size));
        let (start, end) = pager::page_bounds(page, self.page_size, filtered.len());
        filtered[start..end].to_vec()
    }

    pub fn current_question(&self) -> Option<&Question> {
        let indices = self.page_indices();
        indices.get(self.cursor).map(|&i| &self.questions[i])
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    // Mutations. Each one re-establishes the pagination invariants before
    // the next draw.

    /// Clamp the current page against the filtered count and the cursor
    /// against the visible page. Runs before slicing so what is displayed
    /// and what navigation sees agree.
    pub fn reclamp_page(&mut self) {
        let total = self.total_pages();
        self.current_page = pager::clamp_page(self.current_page, total);
        let visible = self.page_indices().len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor >= visible {
            self.cursor = visible - 1;
        }
    }

    fn search_changed(&mut self) {
        self.cursor = 0;
        self.reclamp_page();
    }

    pub fn insert_search_char(&mut self, c: char) {
        let idx = byte_index(&self.search_input, self.search_cursor);
        self.search_input.insert(idx, c);
        self.search_cursor += 1;
        self.search_changed();
    }

    pub fn delete_search_back(&mut self) {
        if self.search_cursor == 0 {
            return;
        }
        self.search_cursor -= 1;
        let idx = byte_index(&self.search_input, self.search_cursor);
        self.search_input.remove(idx);
        self.search_changed();
    }

    pub fn delete_search_forward(&mut self) {
        if self.search_cursor >= self.search_len() {
            return;
        }
        let idx = byte_index(&self.search_input, self.search_cursor);
        self.search_input.remove(idx);
        self.search_changed();
    }

    pub fn search_len(&self) -> usize {
        self.search_input.chars().count()
    }

    pub fn move_search_cursor_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    pub fn move_search_cursor_right(&mut self) {
        if self.search_cursor < self.search_len() {
            self.search_cursor += 1;
        }
    }

    /// Selecting a category always lands on page 1.
    pub fn select_category(&mut self, id: &str) {
        self.selected_category = id.to_string();
        self.current_page = 1;
        self.cursor = 0;
        self.reclamp_page();
    }

    /// Ids offered in the category bar, "all" first.
    pub fn category_order(&self) -> Vec<String> {
        let mut ids = vec![ALL_CATEGORY.to_string()];
        ids.extend(self.categories.iter().map(|c| c.id.clone()));
        ids
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let order = self.category_order();
        let pos = order
            .iter()
            .position(|id| *id == self.selected_category)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        let id = order[next].clone();
        self.select_category(&id);
    }

    /// Out-of-range targets are rejected with no state change.
    pub fn goto_page(&mut self, page: usize) {
        if page < 1 || page > self.total_pages() {
            return;
        }
        self.current_page = page;
        self.cursor = 0;
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.goto_page(self.current_page - 1);
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.current_page > 1 {
            self.prev_page();
            let visible = self.page_indices().len();
            self.cursor = visible.saturating_sub(1);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let visible = self.page_indices().len();
        if self.cursor + 1 < visible {
            self.cursor += 1;
        } else if self.current_page < self.total_pages() {
            self.next_page();
        }
    }

    pub fn select_in_page(&mut self, pos: usize) {
        let visible = self.page_indices().len();
        if pos < visible {
            self.cursor = pos;
        }
    }

    pub fn toggle_expanded(&mut self) {
        let Some(id) = self.current_question().map(|q| q.id.clone()) else {
            return;
        };
        if !self.expanded.insert(id.clone()) {
            self.expanded.remove(&id);
        }
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
