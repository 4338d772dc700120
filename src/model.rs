use serde::{Deserialize, Serialize};

/// Reserved category id that matches every question.
pub const ALL_CATEGORY: &str = "all";

pub const DEFAULT_TITLE: &str = "Frontend Interview Q&A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Soft reference to a Category id. Unknown values are tolerated and
    /// only ever match the "all" sentinel.
    pub category: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub title: Option<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            page_size: None,
            categories: Vec::new(),
        }
    }
}

impl Config {
    /// Load the YAML config. An explicit path must exist; the default
    /// `prepdeck.yaml` is optional.
    pub fn load(path: Option<&str>) -> Result<Config, String> {
        let (path, required) = match path {
            Some(p) => (p.to_string(), true),
            None => ("prepdeck.yaml".to_string(), false),
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if required => {
                return Err(format!("Cannot read config {}: {}", path, e));
            }
            Err(_) => return Ok(Config::default()),
        };

        serde_yaml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path, e))
    }

    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(crate::pager::PAGE_SIZE)
    }

    pub fn categories(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            default_categories()
        } else {
            self.categories.clone()
        }
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("javascript", "JavaScript"),
        Category::new("css", "CSS"),
        Category::new("react", "React"),
        Category::new("html", "HTML"),
        Category::new("general", "General"),
    ]
}
