use crate::model::{Question, ALL_CATEGORY};

/// Empty terms match everything; otherwise case-insensitive substring
/// containment against the question or the answer text.
pub fn matches_search(question: &Question, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    question.question.to_lowercase().contains(&needle)
        || question.answer.to_lowercase().contains(&needle)
}

pub fn matches_category(question: &Question, category: &str) -> bool {
    category == ALL_CATEGORY || question.category == category
}

/// Indices of questions matching both the search term and the category,
/// in dataset order.
pub fn filter_questions(dataset: &[Question], term: &str, category: &str) -> Vec<usize> {
    dataset
        .iter()
        .enumerate()
        .filter(|(_, q)| matches_search(q, term) && matches_category(q, category))
        .map(|(i, _)| i)
        .collect()
}

/// Count over the full, unfiltered dataset. "all" counts every question
/// regardless of whether its category is known.
pub fn count_in_category(dataset: &[Question], category: &str) -> usize {
    if category == ALL_CATEGORY {
        return dataset.len();
    }
    dataset.iter().filter(|q| q.category == category).count()
}
