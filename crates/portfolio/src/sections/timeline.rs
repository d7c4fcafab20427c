// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Timeline sections: experience and education.

use maud::{Markup, PreEscaped, html};

use super::fill_container;
use crate::data::{EducationEntry, ExperienceEntry};
use crate::document::PageDocument;
use crate::format::meta_line;
use crate::markdown::render_markdown;

fn timeline_item(heading: &str, meta: &str, description: Option<Markup>) -> Markup {
    html! {
        div class="timeline-item" {
            h3 { (heading) }
            div class="timeline-meta" { (meta) }
            @if let Some(description) = description {
                div class="timeline-description" { (description) }
            }
        }
    }
}

pub fn experience(doc: &mut PageDocument, entries: &[ExperienceEntry]) {
    let items = entries.iter().map(|entry| {
        let meta = meta_line(&[entry.company.as_deref(), entry.duration.as_deref()]);
        let description = PreEscaped(render_markdown(entry.description.as_deref().unwrap_or_default()));
        timeline_item(&entry.role, &meta, Some(description))
    });
    fill_container(doc, "experience-content", items);
}

pub fn education(doc: &mut PageDocument, entries: &[EducationEntry]) {
    let items = entries.iter().map(|entry| {
        let meta = meta_line(&[entry.institution.as_deref(), entry.year.as_deref()]);
        let grade = entry
            .grade
            .as_deref()
            .filter(|g| !g.is_empty())
            .map(|grade| html! { "Grade: " (grade) });
        timeline_item(&entry.degree, &meta, grade)
    });
    fill_container(doc, "education-content", items);
}
