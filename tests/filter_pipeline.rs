use prepdeck::filter::{count_in_category, filter_questions, matches_search};
use prepdeck::model::{Difficulty, Question};

fn q(id: &str, question: &str, answer: &str, category: &str) -> Question {
    Question {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        difficulty: Difficulty::Medium,
    }
}

fn sample() -> Vec<Question> {
    vec![
        q("1", "What is the Virtual DOM?", "An in-memory tree React diffs.", "react"),
        q("2", "Explain closures", "A function plus its captured scope.", "javascript"),
        q("3", "What are React Hooks?", "useState and useEffect for function components.", "react"),
        q("4", "Center a div", "Use flexbox with justify-content and align-items.", "css"),
        q("5", "What are git hooks?", "Scripts run around commits.", "tooling"),
    ]
}

#[test]
fn empty_search_returns_all_in_order() {
    let data = sample();
    let result = filter_questions(&data, "", "all");
    assert_eq!(result, vec![0, 1, 2, 3, 4]);
}

#[test]
fn search_is_case_insensitive_over_question_and_answer() {
    let data = sample();

    // "HOOKS" appears in question of #3 and #5
    let result = filter_questions(&data, "HOOKS", "all");
    assert_eq!(result, vec![2, 4]);

    // "flexbox" appears only in the answer of #4
    let result = filter_questions(&data, "FlexBox", "all");
    assert_eq!(result, vec![3]);
}

#[test]
fn category_filter_is_exact_equality() {
    let data = sample();
    let result = filter_questions(&data, "", "react");
    assert_eq!(result, vec![0, 2]);

    // Unknown category matches nothing but "all" still matches everything
    assert!(filter_questions(&data, "", "rust").is_empty());
    assert_eq!(filter_questions(&data, "", "all").len(), data.len());
}

#[test]
fn search_and_category_compose_with_and() {
    let data = sample();

    // "hooks" alone matches #3 (react) and #5 (tooling); the category
    // narrows it to the react one.
    let result = filter_questions(&data, "hooks", "react");
    assert_eq!(result, vec![2]);
}

#[test]
fn filter_is_idempotent() {
    let data = sample();
    let first = filter_questions(&data, "react", "all");
    let second = filter_questions(&data, "react", "all");
    assert_eq!(first, second);
}

#[test]
fn empty_term_matches_everything() {
    let data = sample();
    for question in &data {
        assert!(matches_search(question, ""));
    }
}

#[test]
fn counts_come_from_the_full_dataset() {
    let data = sample();
    assert_eq!(count_in_category(&data, "react"), 2);
    assert_eq!(count_in_category(&data, "javascript"), 1);
    assert_eq!(count_in_category(&data, "all"), 5);

    // A record with a category unknown to the config still counts toward
    // "all"; per-category sums need not add up.
    let known = ["react", "javascript", "css"];
    let sum: usize = known.iter().map(|c| count_in_category(&data, c)).sum();
    assert!(sum < count_in_category(&data, "all"));
}
