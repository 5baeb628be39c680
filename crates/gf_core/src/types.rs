use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Author shown when a result carries no byline.
pub const UNKNOWN_AUTHOR: &str = "(unknown author)";

/// One news item from a search response. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    title: String,
    author: String,
    section_name: String,
    publication_date: String,
    url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        author: Option<String>,
        section_name: impl Into<String>,
        publication_date: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            section_name: section_name.into(),
            publication_date: publication_date.into(),
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    /// Raw ISO-8601 string as sent by the API.
    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn list_item(&self) -> ListItem {
        ListItem {
            title: self.title.clone(),
            author: self.author.clone(),
            date: display_date(&self.publication_date),
            section: self.section_name.clone(),
        }
    }
}

/// The text a list row shows for an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub author: String,
    pub date: String,
    pub section: String,
}

fn display_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
