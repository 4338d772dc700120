use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::dataset::LoadEvent;
use crate::state::{AppState, InputMode};
use crate::ui;

pub fn run_tui(
    state: &mut AppState,
    load_rx: &mpsc::Receiver<LoadEvent>,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, state, load_rx);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    load_rx: &mpsc::Receiver<LoadEvent>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) => handle_key(key, state),
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, state, area);
                }
                _ => {}
            }
        }

        // Drain the loader channel
        while let Ok(ev) = load_rx.try_recv() {
            handle_load(ev, state);
        }
    }

    Ok(())
}

fn handle_load(event: LoadEvent, state: &mut AppState) {
    match event {
        LoadEvent::Loaded(loaded) => state.apply_dataset(loaded),
        LoadEvent::Failed(error) => state.apply_load_failure(error),
    }
}

fn handle_key(key: KeyEvent, state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        state.should_quit = true;
        return;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return;
    }

    if state.loading {
        return;
    }

    match state.input_mode {
        InputMode::Search => handle_search_key(key, state),
        InputMode::Navigation => handle_nav_key(key, state),
    }
}

fn handle_search_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.insert_search_char(c);
        }
        KeyCode::Backspace => {
            state.delete_search_back();
        }
        KeyCode::Delete => {
            state.delete_search_forward();
        }
        KeyCode::Left => {
            state.move_search_cursor_left();
        }
        KeyCode::Right => {
            state.move_search_cursor_right();
        }
        KeyCode::Home => {
            state.search_cursor = 0;
        }
        KeyCode::End => {
            state.search_cursor = state.search_len();
        }
        KeyCode::Esc | KeyCode::Enter => {
            state.input_mode = InputMode::Navigation;
        }
        _ => {}
    }
}

fn handle_nav_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
        }
        KeyCode::Char('?') => {
            state.show_help = true;
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            // Rejected silently when the page does not exist.
            state.goto_page((c as u8 - b'0') as usize);
        }
        KeyCode::Up => {
            state.move_cursor_up();
        }
        KeyCode::Down => {
            state.move_cursor_down();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.toggle_expanded();
        }
        KeyCode::Left | KeyCode::PageUp => {
            state.prev_page();
        }
        KeyCode::Right | KeyCode::PageDown => {
            state.next_page();
        }
        KeyCode::Home => {
            state.goto_page(1);
        }
        KeyCode::End => {
            let last = state.total_pages();
            state.goto_page(last);
        }
        KeyCode::Tab => {
            state.cycle_category(true);
        }
        KeyCode::BackTab => {
            state.cycle_category(false);
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState, area: Rect) {
    if state.loading || state.show_help {
        return;
    }

    let layout = ui::layout::compute_layout(area);
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.searchbar, x, y) {
                state.input_mode = InputMode::Search;
            } else if contains(layout.categorybar, x, y) {
                if let Some(id) = ui::categorybar::chip_at(state, layout.categorybar, x) {
                    state.select_category(&id);
                }
            } else if contains(layout.list, x, y) {
                if let Some(pos) = ui::list::item_at(state, layout.list, y) {
                    state.select_in_page(pos);
                    state.toggle_expanded();
                }
            } else if contains(layout.pagination, x, y) {
                if let Some(page) = ui::pagination::target_at(state, layout.pagination, x) {
                    state.goto_page(page);
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if contains(layout.list, x, y) {
                state.move_cursor_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if contains(layout.list, x, y) {
                state.move_cursor_down();
            }
        }
        _ => {}
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
