use crate::config::{AccountConfig, ApiBaseUrlConfig};
use crate::feed::{build_feed, Project, PAGE_SIZE};
use crate::github::Client;

use crate::Error;

use prettytable::{row, Table};

pub struct Projects;

impl Projects {
    pub async fn handle<Conf>(config: &Conf) -> Result<(), Error>
    where
        Conf: ApiBaseUrlConfig,
        Conf: AccountConfig,
    {
        println!("Loading projects...");

        let client = Client::new(config);
        let repos = match client.list_recent_repos(config.login(), PAGE_SIZE).await {
            Ok(repos) => repos,
            Err(err) => {
                eprintln!("error fetching projects: {}", err);
                return Err(Error::FeedUnavailable(config.repos_listing_url(), err));
            }
        };

        let projects = build_feed(repos);
        if projects.is_empty() {
            println!("No projects available at the moment.");
            return Ok(());
        }

        Self::print_table_for_projects(&projects);

        println!();
        println!("View all projects: {}", config.repos_listing_url());

        Ok(())
    }

    pub fn print_table_for_projects(projects: &[Project]) {
        let mut table = Table::new();
        table.set_titles(row![
            "Project",
            "Description",
            "Badges",
            "Links",
            "Last updated"
        ]);

        for project in projects {
            let updated = project.updated_at - chrono::Utc::now();
            let updated = chrono_humanize::HumanTime::from(updated);

            let mut links = format!("Code: {}", project.code_url);
            if let Some(live_url) = &project.live_url {
                links.push_str("\nLive Demo: ");
                links.push_str(live_url);
            }

            table.add_row(row![
                title_for_project(project, 20),
                description_for_project(project, 40),
                badges_for_project(project),
                links,
                updated,
            ]);
        }

        table.printstd();
    }
}

fn title_for_project(project: &Project, max_width: usize) -> String {
    use hyphenation::{Language, Load, Standard};
    use textwrap::{fill, Options, WordSplitter::Hyphenation};

    let hyphenator = Standard::from_embedded(Language::EnglishUS).unwrap();
    let options = Options::new(max_width).word_splitter(Hyphenation(hyphenator));

    fill(&project.title(), options)
}

// Clamped to 3 lines of display text.
fn description_for_project(project: &Project, max_width: usize) -> String {
    use hyphenation::{Language, Load, Standard};
    use textwrap::{wrap, Options, WordSplitter::Hyphenation};

    let hyphenator = Standard::from_embedded(Language::EnglishUS).unwrap();
    let options = Options::new(max_width).word_splitter(Hyphenation(hyphenator));

    let lines = wrap(&project.description, options);
    if lines.len() > 3 {
        let mut clamped = lines[..3].join("\n");
        clamped.push('…');
        clamped
    } else {
        lines.join("\n")
    }
}

// Language badge first (always present, placeholder included), then topics.
fn badges_for_project(project: &Project) -> String {
    let mut badges = Vec::with_capacity(project.topics.len() + 1);
    badges.push(project.language.as_str());
    badges.extend(project.topics.iter().map(String::as_str));

    badges.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use url::Url;

    fn project(description: &str, topics: &[&str]) -> Project {
        Project {
            id: 1,
            name: "my-app".to_string(),
            description: description.to_string(),
            code_url: Url::parse("https://github.com/robmaroh/my-app").unwrap(),
            live_url: None,
            topics: topics.iter().map(|s| s.to_string()).collect(),
            language: "Rust".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn long_descriptions_are_clamped_to_three_lines() {
        let long = "A very detailed description of the project that keeps \
                    going on and on about architecture, deployment, tooling \
                    and everything else until it no longer fits on three \
                    lines of a forty column table cell.";

        let clamped = description_for_project(&project(long, &[]), 40);

        assert_eq!(clamped.matches('\n').count(), 2);
        assert!(clamped.ends_with('…'));
    }

    #[test]
    fn short_descriptions_stay_untouched() {
        let short = description_for_project(&project("Tiny tool.", &[]), 40);
        assert_eq!(short, "Tiny tool.");
    }

    #[test]
    fn language_badge_comes_first() {
        let badges = badges_for_project(&project("x", &["cli", "tooling"]));
        assert_eq!(badges, "Rust, cli, tooling");
    }
}
