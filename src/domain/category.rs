use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::GamePulseError;

/// A sport or topic tag. Names compare case-insensitively, so "f1" and "F1"
/// are the same category; the spelling given first is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keyword query sent upstream when fetching news for this category
    pub fn search_query(&self) -> String {
        match self.0.to_ascii_lowercase().as_str() {
            "cricket" => "cricket".to_string(),
            "football" => "football OR soccer".to_string(),
            "f1" => "\"formula 1\" OR F1".to_string(),
            "tennis" => "tennis".to_string(),
            "basketball" => "basketball OR NBA".to_string(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Category {
    type Err = GamePulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(GamePulseError::InvalidInput(
                "Category name cannot be empty".to_string(),
            ));
        }
        if name.eq_ignore_ascii_case(CategoryFilter::ALL) {
            return Err(GamePulseError::InvalidInput(format!(
                "'{}' is reserved for the all-categories view",
                name
            )));
        }
        Ok(Category::new(name))
    }
}

/// Category selection for the feed: everything, or a single category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL: &'static str = "All";

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", Self::ALL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = GamePulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL) {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}
