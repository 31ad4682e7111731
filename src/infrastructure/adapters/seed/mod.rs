use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::{validation::validate_parts, Category, DomainError, Resource};

/// One record as written in a seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecord {
    id: String,
    title: String,
    description: String,
    category: String,
    url: String,
    #[serde(default)]
    tags: Vec<String>,
    date_added: NaiveDate,
}

/// The catalog's built-in starting set, newest first.
pub fn builtin() -> Vec<Resource> {
    vec![
        record(
            "1",
            "Complete DSA Interview Preparation",
            "Comprehensive guide covering all data structures and algorithms topics with practice problems and solutions.",
            Category::Dsa,
            "https://www.geeksforgeeks.org/data-structures/",
            &["algorithms", "data-structures", "interview", "coding"],
            (2024, 1, 15),
        ),
        record(
            "2",
            "JavaScript Full Course",
            "From basics to advanced JavaScript concepts including ES6+ features, async programming, and modern frameworks.",
            Category::Programming,
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
            &["javascript", "web-development", "programming"],
            (2024, 1, 14),
        ),
        record(
            "3",
            "Arduino IoT Projects Guide",
            "Step-by-step tutorials for building IoT projects with Arduino, sensors, and cloud connectivity.",
            Category::Iot,
            "https://www.arduino.cc/en/Tutorial/HomePage",
            &["arduino", "iot", "embedded", "sensors"],
            (2024, 1, 13),
        ),
        record(
            "4",
            "Machine Learning Crash Course",
            "Google's free ML course covering fundamentals, TensorFlow, and practical applications.",
            Category::AiMl,
            "https://developers.google.com/machine-learning/crash-course",
            &["machine-learning", "tensorflow", "python", "ai"],
            (2024, 1, 12),
        ),
        record(
            "5",
            "Quantitative Aptitude Guide",
            "Complete aptitude preparation covering arithmetic, algebra, geometry, and data interpretation.",
            Category::Aptitude,
            "https://www.indiabix.com/aptitude/",
            &["aptitude", "mathematics", "reasoning", "placement"],
            (2024, 1, 11),
        ),
        record(
            "6",
            "Operating Systems Notes",
            "Comprehensive semester notes covering process management, memory allocation, and file systems.",
            Category::SemesterNotes,
            "https://www.tutorialspoint.com/operating_system/",
            &["os", "notes", "computer-science", "semester"],
            (2024, 1, 10),
        ),
        record(
            "7",
            "GATE CS Preparation Strategy",
            "Complete roadmap and study materials for GATE Computer Science preparation.",
            Category::CompetitiveExams,
            "https://gate.iisc.ac.in/",
            &["gate", "competitive-exam", "computer-science"],
            (2024, 1, 9),
        ),
        record(
            "8",
            "React.js Complete Documentation",
            "Official React documentation with hooks, context API, and modern React patterns.",
            Category::Programming,
            "https://react.dev/",
            &["react", "javascript", "frontend", "web-development"],
            (2024, 1, 8),
        ),
    ]
}

fn record(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    url: &str,
    tags: &[&str],
    (year, month, day): (i32, u32, u32),
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        url: url.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        date_added: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

/// Reads a JSON seed file. Every record goes through the submission
/// field rules; ids must be present and unique.
pub fn load_file(path: &Path) -> Result<Vec<Resource>, DomainError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DomainError::InvalidSeed(format!("{}: {}", path.display(), e)))?;
    let resources = parse(&text)?;
    tracing::info!("Loaded {} seed records from {}", resources.len(), path.display());
    Ok(resources)
}

pub fn parse(text: &str) -> Result<Vec<Resource>, DomainError> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(text).map_err(|e| DomainError::InvalidSeed(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut resources = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = record.id.trim().to_string();
        if id.is_empty() {
            return Err(DomainError::InvalidSeed(format!("record {} has an empty id", index)));
        }
        if !seen.insert(id.clone()) {
            return Err(DomainError::InvalidSeed(format!("duplicate id {}", id)));
        }

        let candidate = validate_parts(
            &record.title,
            &record.description,
            &record.category,
            &record.url,
            record.tags.iter().map(String::as_str),
        )
        .map_err(|e| DomainError::InvalidSeed(format!("record {}: {}", id, e)))?;

        resources.push(Resource::from_submission(candidate, id, record.date_added));
    }

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_seed_has_eight_valid_records() {
        let seed = builtin();
        assert_eq!(seed.len(), 8);

        let ids: HashSet<&str> = seed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 8);

        // Dates descend, matching most-recent-first order.
        assert!(seed.windows(2).all(|pair| pair[0].date_added > pair[1].date_added));
        assert_eq!(seed[0].date_added, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_normalizes_like_a_submission() {
        let resources = parse(
            r#"[{
                "id": "a",
                "title": "  Rust by Example ",
                "description": "Runnable examples",
                "category": "Programming",
                "url": "https://doc.rust-lang.org/rust-by-example/",
                "tags": ["Rust", " "],
                "dateAdded": "2023-12-01"
            },
            {
                "id": "b",
                "title": "Linear Algebra",
                "description": "Lecture notes",
                "category": "Semester Notes",
                "url": "https://ocw.mit.edu/",
                "dateAdded": "2023-11-20"
            }]"#,
        )
        .unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title, "Rust by Example");
        assert_eq!(resources[0].tags, ["rust"]);
        assert_eq!(resources[1].tags, ["semester notes"]);
        assert_eq!(resources[1].date_added, NaiveDate::from_ymd_opt(2023, 11, 20).unwrap());
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "1", "title": "a", "description": "b", "category": "DSA", "url": "https://a.com", "dateAdded": "2024-01-01"},
            {"id": "1", "title": "c", "description": "d", "category": "DSA", "url": "https://b.com", "dateAdded": "2024-01-02"}
        ]"#;
        let err = parse(json).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSeed(ref msg) if msg.contains("duplicate id 1")));
    }

    #[test]
    fn parse_rejects_invalid_fields() {
        let json = r#"[{"id": "x", "title": "a", "description": "b", "category": "Cooking", "url": "nope", "dateAdded": "2024-01-01"}]"#;
        let err = parse(json).unwrap_err().to_string();
        assert!(err.contains("record x"));
        assert!(err.contains("Please select a category"));
        assert!(err.contains("Please enter a valid URL"));
    }

    #[test]
    fn parse_rejects_blank_ids_and_bad_json() {
        let json = r#"[{"id": " ", "title": "a", "description": "b", "category": "DSA", "url": "https://a.com", "dateAdded": "2024-01-01"}]"#;
        assert!(parse(json).is_err());
        assert!(parse("{not json").is_err());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_file(file.path()).unwrap();
        assert_eq!(loaded, builtin());
    }

    #[test]
    fn load_file_reports_missing_path() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
