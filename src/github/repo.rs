use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// One entry of the repository listing, as GitHub returns it. Optional
/// fields stay optional here; defaults are applied when building the feed.
#[derive(Debug, Deserialize)]
pub struct Repo {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub fork: bool,

    pub html_url: Url,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub language: Option<String>,

    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn json_parsing() {
        let json = serde_json::json!({
            "id": 262143048u64,
            "name": "task-tracker",
            "full_name": "robmaroh/task-tracker",
            "fork": false,
            "html_url": "https://github.com/robmaroh/task-tracker",
            "description": "Kanban-style task tracker",
            "homepage": "https://tasks.example.com",
            "topics": ["react", "typescript"],
            "language": "TypeScript",
            "updated_at": "2024-11-02T18:34:50Z"
        });

        let repo: Repo = serde_json::from_value(json).unwrap();

        assert_eq!(repo.id, 262143048);
        assert_eq!(repo.name, "task-tracker");
        assert!(!repo.fork);
        assert_eq!(
            repo.html_url,
            Url::parse("https://github.com/robmaroh/task-tracker").unwrap()
        );
        assert_eq!(repo.description.as_deref(), Some("Kanban-style task tracker"));
        assert_eq!(repo.homepage.as_deref(), Some("https://tasks.example.com"));
        assert_eq!(repo.topics, vec!["react", "typescript"]);
        assert_eq!(repo.language.as_deref(), Some("TypeScript"));
        assert_eq!(
            repo.updated_at,
            Utc.with_ymd_and_hms(2024, 11, 2, 18, 34, 50).unwrap()
        );
    }

    #[test]
    fn json_parsing_with_missing_and_null_fields() {
        let json = serde_json::json!({
            "id": 1u8,
            "name": "my-app",
            "html_url": "https://x/y",
            "description": null,
            "homepage": null,
            "language": null,
            "updated_at": "2024-01-15T21:26:41Z"
        });

        let repo: Repo = serde_json::from_value(json).unwrap();

        assert!(!repo.fork);
        assert_eq!(repo.description, None);
        assert_eq!(repo.homepage, None);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.language, None);
    }
}
