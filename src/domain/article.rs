use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::relative_age;
use super::Category;

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/250";
pub const NO_SUMMARY: &str = "No summary available";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub summary: String,
    pub details: String,
    pub image: String,
    pub published_at: Option<DateTime<Utc>>,
    pub timestamp: String,
    pub source: Option<String>,
}

impl Article {
    pub fn new(id: String, category: Category, title: String) -> Self {
        Self {
            id,
            category,
            title,
            summary: NO_SUMMARY.to_string(),
            details: NO_SUMMARY.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            published_at: None,
            timestamp: relative_age(None, Utc::now()),
            source: None,
        }
    }

    /// Sets the summary; details follow it until set explicitly
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        let summary = non_empty(summary).unwrap_or_else(|| NO_SUMMARY.to_string());
        self.details = summary.clone();
        self.summary = summary;
        self
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = non_empty(details).unwrap_or_else(|| self.summary.clone());
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = non_empty(image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = non_empty(source);
        self
    }

    /// Sets the publication date and recomputes the relative age against `now`
    pub fn published(mut self, published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self.timestamp = relative_age(published_at, now);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
