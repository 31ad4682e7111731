use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use super::{Category, NewResource};

/// Raw submission input, exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Category,
    Url,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
            Field::Url => "url",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Category => "Category",
            Field::Url => "URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    EmptyField(Field),

    #[error("Please select a category")]
    MissingSelection,

    #[error("{}", invalid_url_message(.0))]
    InvalidUrl(String),
}

fn invalid_url_message(input: &str) -> &'static str {
    if input.is_empty() {
        "URL is required"
    } else {
        "Please enter a valid URL"
    }
}

/// Every field that failed, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("submission rejected: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

fn summarize(errors: &BTreeMap<Field, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Checks a submission form, reporting every failing field at once.
pub fn validate(form: &SubmissionForm) -> Result<NewResource, ValidationErrors> {
    validate_parts(
        &form.title,
        &form.description,
        &form.category,
        &form.url,
        form.tags.split(','),
    )
}

/// Field rules shared by the form path and the seed loader.
pub(crate) fn validate_parts<'a>(
    title: &str,
    description: &str,
    category: &str,
    url: &str,
    tags: impl IntoIterator<Item = &'a str>,
) -> Result<NewResource, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = required(Field::Title, title, &mut errors);
    let description = required(Field::Description, description, &mut errors);

    let category = match category.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            errors.insert(Field::Category, FieldError::MissingSelection);
            None
        }
    };

    let url = match parse_absolute_url(url) {
        Some(url) => Some(url),
        None => {
            errors.insert(Field::Url, FieldError::InvalidUrl(url.trim().to_string()));
            None
        }
    };

    match (title, description, category, url) {
        (Some(title), Some(description), Some(category), Some(url)) => Ok(NewResource {
            title,
            description,
            category,
            url,
            tags: normalize_tags(tags, category),
        }),
        _ => Err(errors),
    }
}

fn required(field: Field, value: &str, errors: &mut ValidationErrors) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, FieldError::EmptyField(field));
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Keeps the trimmed text rather than the parser's normalized form.
fn parse_absolute_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(parsed) if parsed.has_host() => Some(trimmed.to_string()),
        _ => None,
    }
}

/// Trims, lowercases and drops empty tags; falls back to the category's
/// default tag when nothing survives. Duplicates are kept.
pub fn normalize_tags<'a>(tags: impl IntoIterator<Item = &'a str>, category: Category) -> Vec<String> {
    let tags: Vec<String> = tags
        .into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        vec![category.default_tag()]
    } else {
        tags
    }
}
