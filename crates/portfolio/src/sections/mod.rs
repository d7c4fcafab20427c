// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Section population.
//!
//! Each section is an independent function over `&mut PageDocument`. A
//! section runs only when its data is present and its anchor exists in the
//! template; otherwise the page region is left exactly as authored.

mod cards;
mod profile;
mod socials;
mod techstack;
mod timeline;
mod visibility;

use maud::{Markup, html};
use std::path::Path;

use crate::data::Portfolio;
use crate::document::PageDocument;
use crate::format::BuildTime;

pub use socials::SocialSection;
pub use visibility::{CONTENT_IDS, HIDDEN_CLASS, SKELETON_IDS};

/// Inputs a section needs besides the data itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Detail files resolve against this directory
    pub base_dir: &'a Path,
    pub build: &'a BuildTime,
}

/// Populate every section of the page, in page order.
pub fn populate(doc: &mut PageDocument, portfolio: &Portfolio, ctx: &RenderContext<'_>) {
    let profile = portfolio.profile.as_ref();

    if let Some(profile) = profile {
        profile::hero(doc, profile);
        profile::about(doc, profile);
    }
    if let Some(categories) = &portfolio.techstack {
        techstack::techstack(doc, categories);
    }
    if let Some(projects) = &portfolio.projects {
        cards::projects(doc, projects, ctx);
    }
    if let Some(research) = &portfolio.research {
        cards::research(doc, research, profile);
    }
    if let Some(achievements) = &portfolio.achievements {
        cards::achievements(doc, achievements, ctx);
    }
    if let Some(experience) = &portfolio.experience {
        timeline::experience(doc, experience);
    }
    if let Some(certifications) = &portfolio.certifications {
        cards::certifications(doc, certifications);
    }
    if let Some(profile) = profile {
        profile::coding_profiles(doc, profile);
    }
    if let Some(education) = &portfolio.education {
        timeline::education(doc, education);
    }
    if let Some(profile) = profile {
        profile::contact(doc, profile);
        profile::footer(doc, profile, ctx.build);
    }

    visibility::reveal_content(doc);
}

/// Replace a container's children with `items`, if the container exists.
///
/// An empty item list still clears the container.
fn fill_container<I>(doc: &mut PageDocument, id: &str, items: I) -> bool
where
    I: IntoIterator<Item = Markup>,
{
    if !doc.has_id(id) {
        diagnostics::debug!("template has no {id}, skipping", id: id);
        return false;
    }
    let mut html = String::new();
    for item in items {
        html.push_str(&item.into_string());
    }
    doc.set_html(id, &html);
    true
}

/// An anchor that opens in a new tab.
fn external_link(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
    }
}
