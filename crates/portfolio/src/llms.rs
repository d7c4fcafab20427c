// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! `llms.txt`: a plain markdown digest of the portfolio for language models.
//!
//! Free text is emitted as authored (it is already markdown). Sections with
//! nothing to say are left out.

use crate::data::{ExperienceEntry, Portfolio, Profile, Project, ResearchItem, TechCategory, present_links};
use crate::format::{BuildTime, capitalize, meta_line};
use crate::sitemap::resolve_url;

/// Render the digest. `title` heads the document when the profile has no name.
pub fn render(portfolio: &Portfolio, title: &str, base_url: &str, build: &BuildTime) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let profile = portfolio.profile.as_ref();

    let name = profile
        .and_then(|p| p.name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(title);
    blocks.push(format!("# {name}"));

    if let Some(profile) = profile {
        blocks.extend(profile_blocks(profile, base_url));
    }

    if let Some(projects) = portfolio.projects.as_deref().filter(|p| !p.is_empty()) {
        blocks.push(section("Projects", projects.iter().map(project_block)));
    }
    if let Some(research) = portfolio.research.as_deref().filter(|r| !r.is_empty()) {
        blocks.push(section("Research", research.iter().map(research_block)));
    }
    if let Some(experience) = portfolio.experience.as_deref().filter(|e| !e.is_empty()) {
        blocks.push(section("Experience", experience.iter().map(experience_block)));
    }
    if let Some(skills) = skills_block(portfolio.techstack.as_deref().unwrap_or_default()) {
        blocks.push(skills);
    }

    blocks.push(format!("Last updated: {}", build.stamp()));

    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn profile_blocks(profile: &Profile, base_url: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    if let Some(tagline) = non_empty(&profile.tagline) {
        blocks.push(format!("> {tagline}"));
    }
    if let Some(bio) = non_empty(&profile.bio) {
        blocks.push(bio.to_string());
    }

    let mut contact = Vec::new();
    contact.push(format!("- Website: {}", resolve_url(base_url, "")));
    if let Some(email) = non_empty(&profile.email) {
        contact.push(format!("- Email: {email}"));
    }
    for (platform, url) in present_links(&profile.socials) {
        contact.push(format!("- {}: {url}", capitalize(platform)));
    }
    if let Some(scholar) = non_empty(&profile.google_scholar) {
        contact.push(format!("- Google Scholar: {scholar}"));
    }
    for (platform, url) in profile.coding_profiles.iter().flat_map(present_links) {
        contact.push(format!("- {}: {url}", capitalize(platform)));
    }
    blocks.push(contact.join("\n"));
    blocks
}

fn section<I>(heading: &str, items: I) -> String
where
    I: Iterator<Item = String>,
{
    let mut parts = vec![format!("## {heading}")];
    parts.extend(items);
    parts.join("\n\n")
}

fn project_block(project: &Project) -> String {
    let mut lines = vec![format!("### {}", project.title)];
    if !project.summary.trim().is_empty() {
        lines.push(project.summary.trim().to_string());
    }
    if !project.tech.is_empty() {
        lines.push(format!("- Tech: {}", project.tech.join(", ")));
    }
    for (label, url) in present_links(&project.links) {
        lines.push(format!("- {}: {url}", capitalize(label)));
    }
    lines.join("\n")
}

fn research_block(item: &ResearchItem) -> String {
    let mut heading = format!("### {}", item.title);
    let meta = meta_line(&[item.publisher.as_deref(), item.year.as_deref()]);
    if !meta.is_empty() {
        heading.push_str(&format!(" ({meta})"));
    }
    let mut lines = vec![heading];
    if !item.summary.trim().is_empty() {
        lines.push(item.summary.trim().to_string());
    }
    if let Some(doi) = non_empty(&item.doi) {
        lines.push(format!("- DOI: https://doi.org/{doi}"));
    }
    if let Some(link) = non_empty(&item.link) {
        lines.push(format!("- Paper: {link}"));
    }
    lines.join("\n")
}

fn experience_block(entry: &ExperienceEntry) -> String {
    let mut heading = format!("### {}", entry.role);
    if let Some(company) = non_empty(&entry.company) {
        heading.push_str(&format!(" at {company}"));
    }
    if let Some(duration) = non_empty(&entry.duration) {
        heading.push_str(&format!(" ({duration})"));
    }
    let mut lines = vec![heading];
    if let Some(description) = non_empty(&entry.description) {
        lines.push(description.to_string());
    }
    lines.join("\n")
}

fn skills_block(categories: &[TechCategory]) -> Option<String> {
    let lines: Vec<String> = categories
        .iter()
        .filter(|category| !category.skills.is_empty())
        .map(|category| format!("- {}: {}", category.category, category.skills.join(", ")))
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(format!("## Skills\n\n{}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampConfig;
    use crate::data::LinkMap;
    use chrono::{TimeZone, Utc};

    fn build_time() -> BuildTime {
        let utc = Utc.with_ymd_and_hms(2025, 11, 28, 18, 11, 0).single().expect("valid");
        BuildTime::new(utc, &TimestampConfig::default())
    }

    #[test]
    fn test_full_digest() {
        let portfolio = Portfolio {
            profile: Some(Profile {
                name: Some("Ada".to_string()),
                tagline: Some("Engines".to_string()),
                bio: Some("I write **programs**.".to_string()),
                email: Some("ada@example.com".to_string()),
                socials: LinkMap::from([(
                    "github".to_string(),
                    Some("https://github.com/ada".to_string()),
                )]),
                ..Profile::default()
            }),
            techstack: Some(vec![TechCategory {
                category: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Python".to_string()],
            }]),
            projects: Some(vec![Project {
                id: "proj-1".to_string(),
                title: "Pond".to_string(),
                summary: "A lake.".to_string(),
                tech: vec!["Rust".to_string()],
                links: LinkMap::new(),
                detail: None,
            }]),
            experience: Some(vec![ExperienceEntry {
                role: "Engineer".to_string(),
                company: Some("Engines Ltd".to_string()),
                duration: Some("2022 - Present".to_string()),
                description: None,
            }]),
            ..Portfolio::default()
        };

        let text = render(&portfolio, "Portfolio", "https://ada.dev/", &build_time());
        let expected = "\
# Ada

> Engines

I write **programs**.

- Website: https://ada.dev/
- Email: ada@example.com
- Github: https://github.com/ada

## Projects

### Pond
A lake.
- Tech: Rust

## Experience

### Engineer at Engines Ltd (2022 - Present)

## Skills

- Languages: Rust, Python

Last updated: 2025-11-28 23:41 IST
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_portfolio_uses_site_title() {
        let text = render(&Portfolio::default(), "Portfolio", "/", &build_time());
        assert_eq!(text, "# Portfolio\n\nLast updated: 2025-11-28 23:41 IST\n");
    }

    #[test]
    fn test_research_heading_meta() {
        let portfolio = Portfolio {
            research: Some(vec![ResearchItem {
                id: "r1".to_string(),
                title: "Notes".to_string(),
                summary: String::new(),
                publisher: Some("Taylor".to_string()),
                year: Some("1843".to_string()),
                doi: Some("10.1/x".to_string()),
                link: None,
            }]),
            ..Portfolio::default()
        };
        let text = render(&portfolio, "Portfolio", "/", &build_time());
        assert!(text.contains("## Research\n\n### Notes (Taylor • 1843)\n- DOI: https://doi.org/10.1/x"), "{}", text);
        assert_eq!(text.matches("Last updated:").count(), 1);
    }
}
