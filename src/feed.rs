use chrono::{DateTime, Utc};
use url::Url;

use crate::github::Repo;

/// Upper bound on rendered projects. The listing request already asks for
/// this many, the cap here is a defensive bound on top of it.
pub const PAGE_SIZE: usize = 6;

const NO_DESCRIPTION: &str = "No description available";
const NO_LANGUAGE: &str = "Not specified";

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub code_url: Url,
    pub live_url: Option<String>,
    pub topics: Vec<String>,
    pub language: String,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn title(&self) -> String {
        self.name.replace('-', " ")
    }
}

impl From<Repo> for Project {
    fn from(repo: Repo) -> Project {
        Project {
            id: repo.id,
            name: repo.name,
            description: non_empty(repo.description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            code_url: repo.html_url,
            live_url: non_empty(repo.homepage),
            topics: repo.topics,
            language: non_empty(repo.language).unwrap_or_else(|| NO_LANGUAGE.to_string()),
            updated_at: repo.updated_at,
        }
    }
}

/// Drops forks, caps the list at [`PAGE_SIZE`] and projects the rest,
/// preserving the most-recently-updated-first order of the response.
pub fn build_feed(repos: Vec<Repo>) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork)
        .take(PAGE_SIZE)
        .map(Project::from)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
