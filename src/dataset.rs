use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::model::Question;

/// Default question set compiled into the binary.
const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub enum Source {
    Builtin,
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub questions: Vec<Question>,
    /// Records in the document that failed to deserialize and were skipped.
    pub skipped: usize,
}

#[derive(Debug)]
pub enum LoadEvent {
    Loaded(LoadedDataset),
    Failed(String),
}

pub fn is_http_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

pub fn resolve_source(arg: Option<&str>) -> Source {
    match arg {
        None => Source::Builtin,
        Some(s) if is_http_url(s) => Source::Url(s.to_string()),
        Some(s) => Source::File(Path::new(s).to_path_buf()),
    }
}

fn read_source(source: &Source) -> Result<String, String> {
    match source {
        Source::Builtin => Ok(BUILTIN_QUESTIONS.to_string()),
        Source::File(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e)),
        Source::Url(url) => fetch_url(url),
    }
}

fn fetch_url(url: &str) -> Result<String, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| format!("Cannot build HTTP client: {}", e))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| format!("Cannot fetch {}: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!("Fetching {} failed: HTTP {}", url, response.status()));
    }

    response
        .text()
        .map_err(|e| format!("Cannot read response from {}: {}", url, e))
}

/// Parse a questions document. The document must be a JSON array; records
/// inside it that do not deserialize are skipped and counted.
pub fn parse_dataset(content: &str) -> Result<LoadedDataset, String> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("Invalid JSON: {}", e))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Err("Questions document must be a JSON array".to_string()),
    };

    let mut questions = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in items {
        match serde_json::from_value::<Question>(item) {
            Ok(q) => questions.push(q),
            Err(_) => skipped += 1,
        }
    }

    Ok(LoadedDataset { questions, skipped })
}

/// Deterministic presentation order: category, then question text, both
/// case-insensitive. Stable, so equal keys keep their source order.
pub fn sort_dataset(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        let ka = (a.category.to_lowercase(), a.question.to_lowercase());
        let kb = (b.category.to_lowercase(), b.question.to_lowercase());
        ka.cmp(&kb)
    });
}

pub fn load_dataset(source: &Source) -> Result<LoadedDataset, String> {
    let content = read_source(source)?;
    let mut loaded = parse_dataset(&content)?;
    sort_dataset(&mut loaded.questions);
    Ok(loaded)
}

/// Retrieve the dataset off the UI thread. Exactly one event is sent:
/// `Loaded` on success, `Failed` otherwise.
pub fn spawn_loader(source: Source) -> mpsc::Receiver<LoadEvent> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let event = match load_dataset(&source) {
            Ok(loaded) => LoadEvent::Loaded(loaded),
            Err(e) => LoadEvent::Failed(e),
        };
        let _ = tx.send(event);
    });

    rx
}
