use std::fs;

use prepdeck::dataset::{self, Source};
use prepdeck::filter::count_in_category;
use prepdeck::model::Difficulty;

#[test]
fn parse_sample_fixture() {
    let content =
        fs::read_to_string("tests/fixtures/sample_questions.json").expect("Cannot read fixture");
    let loaded = dataset::parse_dataset(&content).unwrap();

    assert_eq!(loaded.questions.len(), 6);
    assert_eq!(loaded.skipped, 0);

    let q1 = &loaded.questions[0];
    assert_eq!(q1.id, "q1");
    assert_eq!(q1.category, "react");
    assert_eq!(q1.difficulty, Difficulty::Medium);
}

#[test]
fn sort_orders_by_category_then_question() {
    let content =
        fs::read_to_string("tests/fixtures/sample_questions.json").expect("Cannot read fixture");
    let mut loaded = dataset::parse_dataset(&content).unwrap();
    dataset::sort_dataset(&mut loaded.questions);

    let ids: Vec<&str> = loaded.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["q2", "q4", "q3", "q5", "q1", "q6"]);

    // Determinism: sorting an already sorted dataset changes nothing
    let before: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
    dataset::sort_dataset(&mut loaded.questions);
    let after: Vec<String> = loaded.questions.iter().map(|q| q.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn malformed_records_are_skipped_and_counted() {
    let content = r#"[
        {"id": "a", "question": "Q1?", "answer": "A1.", "category": "css", "difficulty": "easy"},
        {"id": "b", "question": "Q2?", "category": "css", "difficulty": "easy"},
        {"id": "c", "question": "Q3?", "answer": "A3.", "category": "css", "difficulty": "impossible"},
        {"id": "d", "question": "Q4?", "answer": "A4.", "category": "css", "difficulty": "hard"}
    ]"#;

    let loaded = dataset::parse_dataset(content).unwrap();
    assert_eq!(loaded.questions.len(), 2);
    assert_eq!(loaded.skipped, 2);
    assert_eq!(loaded.questions[0].id, "a");
    assert_eq!(loaded.questions[1].id, "d");
}

#[test]
fn non_array_documents_are_rejected() {
    assert!(dataset::parse_dataset(r#"{"questions": []}"#).is_err());
    assert!(dataset::parse_dataset("not json at all").is_err());
    assert!(dataset::parse_dataset("[]").unwrap().questions.is_empty());
}

#[test]
fn source_resolution() {
    assert!(matches!(dataset::resolve_source(None), Source::Builtin));
    assert!(matches!(
        dataset::resolve_source(Some("https://example.com/q.json")),
        Source::Url(_)
    ));
    assert!(matches!(
        dataset::resolve_source(Some("data/questions.json")),
        Source::File(_)
    ));

    assert!(dataset::is_http_url("http://host/file.json"));
    assert!(!dataset::is_http_url("questions.json"));
}

#[test]
fn bundled_dataset_loads_and_is_sorted() {
    let loaded = dataset::load_dataset(&Source::Builtin).unwrap();
    assert!(!loaded.questions.is_empty());
    assert_eq!(loaded.skipped, 0);
    assert_eq!(count_in_category(&loaded.questions, "all"), loaded.questions.len());

    // Sorted by (category, question), case-insensitive
    let keys: Vec<(String, String)> = loaded
        .questions
        .iter()
        .map(|q| (q.category.to_lowercase(), q.question.to_lowercase()))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));

    // Ids stay unique
    let mut ids: Vec<&str> = loaded.questions.iter().map(|q| q.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), loaded.questions.len());
}
