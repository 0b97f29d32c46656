use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct ParseContentTypeError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Post,
    Page,
    Snippet,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Post, Self::Page, Self::Snippet];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Page => "Page",
            Self::Snippet => "Snippet",
        }
    }
}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "page" => Ok(Self::Page),
            "snippet" => Ok(Self::Snippet),
            other => Err(ParseContentTypeError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Page => write!(f, "page"),
            Self::Snippet => write!(f, "snippet"),
        }
    }
}

/// Target of a bulk slug rebuild: one content type, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentScope {
    Any,
    Type(ContentType),
}

impl FromStr for ContentScope {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            s.parse().map(Self::Type)
        }
    }
}

impl std::fmt::Display for ContentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Type(t) => t.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content_type: ContentType,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateContent {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Emitted by the store after every content write. A revision snapshot
/// save carries `is_revision = true`.
#[derive(Debug, Clone, Copy)]
pub struct SaveEvent {
    pub content_id: i64,
    pub is_revision: bool,
}
