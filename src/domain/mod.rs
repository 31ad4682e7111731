use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod query;
pub mod validation;

pub use query::{filter, Query};
pub use validation::{validate, Field, FieldError, SubmissionForm, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub url: String,
    pub tags: Vec<String>,
    pub date_added: NaiveDate,
}

impl Resource {
    /// Stamps a validated submission with its identity.
    pub fn from_submission(candidate: NewResource, id: String, date_added: NaiveDate) -> Self {
        let NewResource {
            title,
            description,
            category,
            url,
            tags,
        } = candidate;

        Self {
            id,
            title,
            description,
            category,
            url,
            tags,
            date_added,
        }
    }
}

/// A submission that passed validation and is ready for the store.
///
/// Only [`validate`] builds these, so anything reaching the store has
/// trimmed text, a known category, a parseable URL and normalized tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    title: String,
    description: String,
    category: Category,
    url: String,
    tags: Vec<String>,
}

impl NewResource {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "DSA")]
    Dsa,
    Programming,
    #[serde(rename = "IoT")]
    Iot,
    #[serde(rename = "AI/ML")]
    AiMl,
    Aptitude,
    #[serde(rename = "Semester Notes")]
    SemesterNotes,
    #[serde(rename = "Competitive Exams")]
    CompetitiveExams,
    More,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Dsa,
        Category::Programming,
        Category::Iot,
        Category::AiMl,
        Category::Aptitude,
        Category::SemesterNotes,
        Category::CompetitiveExams,
        Category::More,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dsa => "DSA",
            Category::Programming => "Programming",
            Category::Iot => "IoT",
            Category::AiMl => "AI/ML",
            Category::Aptitude => "Aptitude",
            Category::SemesterNotes => "Semester Notes",
            Category::CompetitiveExams => "Competitive Exams",
            Category::More => "More",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Dsa => "Data Structures & Algorithms",
            Category::Programming => "Programming Languages & Frameworks",
            Category::Iot => "Internet of Things & Embedded Systems",
            Category::AiMl => "Artificial Intelligence & Machine Learning",
            Category::Aptitude => "Quantitative Aptitude & Reasoning",
            Category::SemesterNotes => "Academic Course Materials",
            Category::CompetitiveExams => "GATE, CAT, JEE & More",
            Category::More => "Everything else worth sharing",
        }
    }

    /// The tag used when a submission supplies none of its own.
    pub fn default_tag(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    // Exact, case-sensitive: the enumeration spelling is the only accepted form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// Category side of a [`Query`]: the `All` sentinel or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}
