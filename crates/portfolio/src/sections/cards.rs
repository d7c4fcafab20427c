// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Card sections: projects, research, achievements and certifications.
//!
//! Every card opens with the same header (anchor id, copy-link button,
//! title) so deep links like `#projects/{id}` land on it.

use maud::{Markup, PreEscaped, html};
use std::path::Path;

use super::{RenderContext, external_link, fill_container};
use crate::data::{Achievement, Certification, Profile, Project, ResearchItem, present_links};
use crate::document::PageDocument;
use crate::format::{capitalize, format_display_date, meta_line};
use crate::markdown::{render_markdown, render_markdown_file};

fn card(id: &str, title: &str, body: Markup) -> Markup {
    html! {
        div class="card" id=(id) {
            button class="copy-link" title="Copy link" {
                i class="material-symbols-outlined" { "link" }
            }
            h3 { (title) }
            (body)
        }
    }
}

fn summary(markdown: &str) -> Markup {
    html! {
        div class="card-summary" { (PreEscaped(render_markdown(markdown))) }
    }
}

fn meta(text: &str) -> Markup {
    html! {
        div class="card-meta" { (text) }
    }
}

/// Render a detail file, or `None` when it is missing or unreadable.
fn load_detail(base_dir: &Path, detail: Option<&str>) -> Option<String> {
    let detail = detail.filter(|d| !d.is_empty())?;
    let path = base_dir.join(detail);
    match render_markdown_file(&path) {
        Ok(Some(html)) => Some(html),
        Ok(None) => {
            diagnostics::debug!("detail file {detail} not found", detail: detail);
            None
        }
        Err(e) => {
            let reason = e.to_string();
            diagnostics::warn!("error embedding detail {detail}: {reason}", detail: detail, reason: reason.as_str());
            None
        }
    }
}

fn detail_block(html: &str) -> Markup {
    html! {
        div class="detail-content" style="display:none" { (PreEscaped(html)) }
    }
}

fn expand_button() -> Markup {
    html! {
        button class="expand-btn" { "Show Details" }
    }
}

pub fn projects(doc: &mut PageDocument, projects: &[Project], ctx: &RenderContext<'_>) {
    if !doc.has_id("projects-content") {
        return;
    }
    let cards = projects.iter().map(|project| {
        let detail = load_detail(ctx.base_dir, project.detail.as_deref());
        let body = html! {
            div class="card-tech" {
                @for tech in &project.tech {
                    span class="tech-tag" { (tech) }
                }
            }
            (summary(&project.summary))
            @if let Some(detail) = &detail {
                (detail_block(detail))
            }
            div class="card-links" {
                @for (label, url) in present_links(&project.links) {
                    (external_link(url, &capitalize(label)))
                }
                @if detail.is_some() {
                    (expand_button())
                }
            }
        };
        card(&project.id, &project.title, body)
    });
    fill_container(doc, "projects-content", cards);
}

pub fn research(doc: &mut PageDocument, research: &[ResearchItem], profile: Option<&Profile>) {
    if !doc.has_id("research-content") {
        return;
    }
    if let Some(scholar) = profile.and_then(|p| p.google_scholar.as_deref()) {
        doc.set_attr("google-scholar-link", "href", scholar);
    }
    let cards = research.iter().map(|item| {
        let doi = item.doi.as_deref().filter(|d| !d.is_empty());
        let link = item.link.as_deref().filter(|l| !l.is_empty());
        let body = html! {
            (meta(&meta_line(&[item.publisher.as_deref(), item.year.as_deref()])))
            (summary(&item.summary))
            div class="card-links" {
                @if let Some(doi) = doi {
                    (external_link(&format!("https://doi.org/{doi}"), "DOI"))
                }
                @if let Some(link) = link {
                    (external_link(link, "Paper"))
                }
            }
        };
        card(&item.id, &item.title, body)
    });
    fill_container(doc, "research-content", cards);
}

pub fn achievements(doc: &mut PageDocument, achievements: &[Achievement], ctx: &RenderContext<'_>) {
    if !doc.has_id("achievements-content") {
        return;
    }
    let cards = achievements.iter().map(|item| {
        let detail = load_detail(ctx.base_dir, item.detail.as_deref());
        let date = item.date.as_deref().map(format_display_date).unwrap_or_default();
        let link = item.link.as_deref().filter(|l| !l.is_empty());
        let body = html! {
            (meta(&date))
            (summary(&item.summary))
            @if let Some(detail) = &detail {
                (detail_block(detail))
            }
            div class="card-links" {
                @if let Some(link) = link {
                    (external_link(link, "View"))
                }
                @if detail.is_some() {
                    (expand_button())
                }
            }
        };
        card(&item.id, &item.title, body)
    });
    fill_container(doc, "achievements-content", cards);
}

pub fn certifications(doc: &mut PageDocument, certifications: &[Certification]) {
    let cards = certifications.iter().map(|item| {
        let date = item.date.as_deref().map(format_display_date);
        let link = item.link.as_deref().filter(|l| !l.is_empty());
        let body = html! {
            (meta(&meta_line(&[item.issuer.as_deref(), date.as_deref()])))
            div class="card-links" {
                @if let Some(link) = link {
                    (external_link(link, "View Certificate"))
                }
            }
        };
        card(&item.id, &item.title, body)
    });
    fill_container(doc, "certifications-content", cards);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampConfig;
    use crate::data::LinkMap;
    use crate::format::BuildTime;
    use crate::template::Template;
    use chrono::{TimeZone, Utc};

    fn document(html: &str) -> PageDocument {
        PageDocument::new(Template::parse(html).expect("parse"))
    }

    fn build_time() -> BuildTime {
        let utc = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("valid");
        BuildTime::new(utc, &TimestampConfig::default())
    }

    fn project(id: &str, detail: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: "Pond".to_string(),
            summary: "A *small* lake.".to_string(),
            tech: vec!["Rust".to_string(), "Arrow".to_string()],
            links: LinkMap::from([
                ("github".to_string(), Some("https://github.com/x/pond".to_string())),
                ("demo".to_string(), None),
            ]),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_project_card_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let mut doc = document(r#"<div id="projects-content"><div class="skeleton"></div></div>"#);

        projects(&mut doc, &[project("proj-1", None)], &ctx);
        let html = doc.render().expect("render");

        assert!(html.contains(
            r#"<div class="card" id="proj-1"><button class="copy-link" title="Copy link"><i class="material-symbols-outlined">link</i></button><h3>Pond</h3>"#
        ), "{}", html);
        assert!(html.contains(
            r#"<div class="card-tech"><span class="tech-tag">Rust</span><span class="tech-tag">Arrow</span></div>"#
        ), "{}", html);
        assert!(html.contains("<em>small</em>"), "{}", html);
        assert!(html.contains(r#">Github</a>"#), "{}", html);
        assert!(!html.contains("Demo"), "null link must not render: {}", html);
        assert!(!html.contains("expand-btn"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn test_project_links_render_in_authored_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let mut doc = document(r#"<div id="projects-content"></div>"#);
        let project = Project {
            links: LinkMap::from([
                ("live".to_string(), Some("https://pond.example".to_string())),
                ("github".to_string(), Some("https://github.com/x/pond".to_string())),
                ("docs".to_string(), Some("https://docs.pond.example".to_string())),
            ]),
            ..project("proj-1", None)
        };

        projects(&mut doc, &[project], &ctx);
        let html = doc.render().expect("render");
        let labels: Vec<usize> = [">Live</a>", ">Github</a>", ">Docs</a>"]
            .iter()
            .map(|label| html.find(label).unwrap_or_else(|| panic!("{} missing: {}", label, html)))
            .collect();
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]), "{}", html);
    }

    #[test]
    fn test_project_detail_embedded() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("details")).expect("mkdir");
        std::fs::write(dir.path().join("details/pond.md"), "## Design\n\nTables.").expect("write");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let mut doc = document(r#"<div id="projects-content"></div>"#);

        projects(&mut doc, &[project("proj-1", Some("details/pond.md"))], &ctx);
        let html = doc.render().expect("render");

        let detail = html
            .find(r#"<div class="detail-content" style="display:none"><h2>Design</h2>"#)
            .unwrap_or_else(|| panic!("detail block missing: {}", html));
        let links = html.find(r#"<div class="card-links">"#).expect("links");
        assert!(detail < links, "detail precedes links");
        assert!(html.contains(r#"<button class="expand-btn">Show Details</button></div>"#), "{}", html);
    }

    #[test]
    fn test_project_missing_detail_omits_button() {
        let dir = tempfile::tempdir().expect("tempdir");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let mut doc = document(r#"<div id="projects-content"></div>"#);

        projects(&mut doc, &[project("proj-1", Some("details/missing.md"))], &ctx);
        let html = doc.render().expect("render");
        assert!(html.contains(r#"id="proj-1""#));
        assert!(!html.contains("expand-btn"), "{}", html);
        assert!(!html.contains("detail-content"), "{}", html);
    }

    #[test]
    fn test_empty_projects_clears_container() {
        let dir = tempfile::tempdir().expect("tempdir");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let mut doc = document(r#"<div id="projects-content"><div class="skeleton"></div></div>"#);
        projects(&mut doc, &[], &ctx);
        assert_eq!(doc.render().expect("render"), r#"<div id="projects-content"></div>"#);
    }

    #[test]
    fn test_research_card_and_scholar_link() {
        let profile = Profile {
            google_scholar: Some("https://scholar.google.com/ada".to_string()),
            ..Profile::default()
        };
        let item = ResearchItem {
            id: "paper-1".to_string(),
            title: "Notes".to_string(),
            summary: "On the engine.".to_string(),
            publisher: Some("Taylor".to_string()),
            year: Some("1843".to_string()),
            doi: Some("10.1000/182".to_string()),
            link: None,
        };
        let mut doc = document(
            r##"<a id="google-scholar-link" href="#">Scholar</a><div id="research-content"></div>"##,
        );
        research(&mut doc, &[item], Some(&profile));
        let html = doc.render().expect("render");
        assert!(html.contains(r#"href="https://scholar.google.com/ada""#), "{}", html);
        assert!(html.contains(r#"<div class="card-meta">Taylor • 1843</div>"#), "{}", html);
        assert!(html.contains(r#"href="https://doi.org/10.1000/182""#), "{}", html);
        assert!(html.contains(">DOI</a>"));
        assert!(!html.contains("Paper"));
    }

    #[test]
    fn test_research_without_anchor_leaves_scholar_link() {
        let profile = Profile {
            google_scholar: Some("https://scholar.google.com/ada".to_string()),
            ..Profile::default()
        };
        let mut doc = document(r##"<a id="google-scholar-link" href="#">Scholar</a>"##);
        research(&mut doc, &[], Some(&profile));
        assert_eq!(doc.edit_count(), 0);
    }

    #[test]
    fn test_achievement_date_and_link() {
        let dir = tempfile::tempdir().expect("tempdir");
        let build = build_time();
        let ctx = RenderContext { base_dir: dir.path(), build: &build };
        let items = vec![
            Achievement {
                id: "ach-1".to_string(),
                title: "Prize".to_string(),
                summary: "Won.".to_string(),
                date: Some("2024-03-15".to_string()),
                link: Some("https://example.com/prize".to_string()),
                detail: None,
            },
            Achievement {
                id: "ach-2".to_string(),
                title: "Medal".to_string(),
                summary: String::new(),
                date: Some("March 2024".to_string()),
                link: None,
                detail: None,
            },
        ];
        let mut doc = document(r#"<div id="achievements-content"></div>"#);
        achievements(&mut doc, &items, &ctx);
        let html = doc.render().expect("render");
        assert!(html.contains(r#"<div class="card-meta">03/15/2024</div>"#), "{}", html);
        assert!(html.contains(r#"<div class="card-meta">March 2024</div>"#), "{}", html);
        assert!(html.contains(">View</a>"));
        assert!(html.contains(r#"<div class="card-summary"></div>"#), "{}", html);
    }

    #[test]
    fn test_certification_meta() {
        let items = vec![Certification {
            id: "cert-1".to_string(),
            title: "Rust".to_string(),
            issuer: Some("Ferris U".to_string()),
            date: Some("2023-07-01".to_string()),
            link: Some("https://example.com/cert".to_string()),
        }];
        let mut doc = document(r#"<div id="certifications-content"></div>"#);
        certifications(&mut doc, &items);
        let html = doc.render().expect("render");
        assert!(html.contains(r#"<div class="card-meta">Ferris U • 07/01/2023</div>"#), "{}", html);
        assert!(html.contains(">View Certificate</a>"));
    }
}
