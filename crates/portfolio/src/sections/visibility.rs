// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Skeleton placeholders are hidden and real content revealed once the
//! page has been populated.

use crate::document::PageDocument;

pub const HIDDEN_CLASS: &str = "skeleton-hidden";

pub const SKELETON_IDS: &[&str] = &[
    "hero-skeleton",
    "about-skeleton",
    "techstack-skeleton",
    "projects-skeleton",
    "research-skeleton",
    "achievements-skeleton",
    "experience-skeleton",
    "certifications-skeleton",
    "profiles-skeleton",
    "education-skeleton",
];

pub const CONTENT_IDS: &[&str] = &[
    "hero-content",
    "about-content",
    "techstack-content",
    "projects-content",
    "research-content",
    "achievements-content",
    "experience-content",
    "certifications-content",
    "profiles-content",
    "education-content",
    "projects-pagination",
    "research-pagination",
    "achievements-pagination",
    "certifications-pagination",
    "google-scholar-link",
];

pub fn reveal_content(doc: &mut PageDocument) {
    for id in SKELETON_IDS {
        if doc.has_id(id) {
            doc.add_class(id, HIDDEN_CLASS);
        }
    }
    for id in CONTENT_IDS {
        if doc.has_id(id) {
            doc.remove_class(id, HIDDEN_CLASS);
        }
    }
}
