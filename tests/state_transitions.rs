use prepdeck::dataset::LoadedDataset;
use prepdeck::model::{Config, Difficulty, Question};
use prepdeck::state::AppState;

fn q(id: &str, question: &str, answer: &str, category: &str) -> Question {
    Question {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        difficulty: Difficulty::Medium,
    }
}

/// 20 records: 3 react (two mention hooks), 10 javascript (one mentions
/// hooks, two mention layout), 7 css (all mention layout).
fn dataset() -> Vec<Question> {
    vec![
        q("r1", "What are React Hooks?", "useState and useEffect let function components hold state.", "react"),
        q("r2", "How does React reconciliation work?", "The diffing pass compares trees; hooks order must stay stable.", "react"),
        q("r3", "What are props in React?", "Read-only inputs a parent passes to a child component.", "react"),
        q("j1", "What are git hooks used for?", "Scripts that run on commit or push.", "javascript"),
        q("j2", "What is a closure?", "A function bundled with its lexical scope.", "javascript"),
        q("j3", "Explain prototypal inheritance", "Objects delegate through the prototype chain.", "javascript"),
        q("j4", "What is the event loop?", "It schedules tasks and microtasks on the single thread.", "javascript"),
        q("j5", "What does use strict do?", "Opts into stricter parsing and error semantics.", "javascript"),
        q("j6", "What is a promise?", "A placeholder for a value that arrives later.", "javascript"),
        q("j7", "var vs let", "Function scope versus block scope.", "javascript"),
        q("j8", "What is NaN?", "A numeric value representing an invalid number.", "javascript"),
        q("j9", "How do you measure layout thrashing?", "Interleaved reads and writes force synchronous layout.", "javascript"),
        q("j10", "Why batch DOM updates?", "Each write can invalidate layout and trigger reflow.", "javascript"),
        q("c1", "How does flexbox layout distribute space?", "Via flex-grow, flex-shrink and flex-basis.", "css"),
        q("c2", "How does grid layout place items?", "Tracks and areas defined on the container.", "css"),
        q("c3", "How does float layout work?", "Elements leave normal flow and text wraps around them.", "css"),
        q("c4", "How does normal flow layout order boxes?", "Block boxes stack; inline boxes flow horizontally.", "css"),
        q("c5", "How does absolute positioning affect layout?", "The element leaves flow and positions against an ancestor.", "css"),
        q("c6", "How does table layout size columns?", "Auto layout distributes widths from content.", "css"),
        q("c7", "How does multi-column layout split content?", "Content flows across column boxes of equal width.", "css"),
    ]
}

fn browse_state() -> AppState {
    let mut state = AppState::new(&Config::default());
    assert!(state.loading);
    state.apply_dataset(LoadedDataset {
        questions: dataset(),
        skipped: 0,
    });
    assert!(!state.loading);
    state
}

#[test]
fn category_change_resets_to_page_one() {
    let mut state = browse_state();
    assert_eq!(state.total_pages(), 3); // 20 records, 8 per page

    state.goto_page(3);
    assert_eq!(state.current_page, 3);

    state.select_category("css");
    assert_eq!(state.current_page, 1);
}

#[test]
fn narrowing_search_reclamps_the_observed_page() {
    let mut state = browse_state();
    state.goto_page(3);

    // 9 records mention "layout": two pages after narrowing.
    for c in "layout".chars() {
        state.insert_search_char(c);
    }
    assert_eq!(state.match_count(), 9);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_page, 2);

    // What is displayed and what navigation sees agree.
    assert_eq!(state.page_indices().len(), 1);
    state.next_page();
    assert_eq!(state.current_page, 2);
}

#[test]
fn search_to_zero_matches_is_a_distinct_empty_state() {
    let mut state = browse_state();
    for c in "zebra".chars() {
        state.insert_search_char(c);
    }
    assert_eq!(state.match_count(), 0);
    assert_eq!(state.current_page, 1);
    assert!(state.page_indices().is_empty());
    assert!(!state.questions.is_empty());
}

#[test]
fn category_and_search_compose() {
    let mut state = browse_state();
    state.select_category("react");
    for c in "HOOKS".chars() {
        state.insert_search_char(c);
    }

    let matched: Vec<&str> = state
        .filtered_questions()
        .into_iter()
        .map(|i| state.questions[i].id.as_str())
        .collect();
    assert_eq!(matched, vec!["r1", "r2"]);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn out_of_range_navigation_is_rejected() {
    let mut state = browse_state();
    state.goto_page(2);

    state.goto_page(0);
    assert_eq!(state.current_page, 2);
    state.goto_page(4);
    assert_eq!(state.current_page, 2);

    state.prev_page();
    assert_eq!(state.current_page, 1);
    state.prev_page();
    assert_eq!(state.current_page, 1);
}

#[test]
fn accordion_allows_multiple_open_answers() {
    let mut state = browse_state();

    state.toggle_expanded();
    state.move_cursor_down();
    state.toggle_expanded();
    assert_eq!(state.expanded.len(), 2);

    state.toggle_expanded();
    assert_eq!(state.expanded.len(), 1);
}

#[test]
fn load_failure_leaves_an_empty_browsable_state() {
    let mut state = AppState::new(&Config::default());
    state.apply_load_failure("HTTP 500".to_string());

    assert!(!state.loading);
    assert!(state.questions.is_empty());
    assert!(state.load_error.is_some());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages(), 0);
}

#[test]
fn category_cycling_wraps_and_resets_the_page() {
    let mut state = browse_state();
    state.goto_page(2);

    state.cycle_category(true);
    assert_eq!(state.selected_category, "javascript");
    assert_eq!(state.current_page, 1);

    state.cycle_category(false);
    state.cycle_category(false);
    assert_eq!(state.selected_category, "general");
}
