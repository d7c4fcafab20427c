// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Sections driven by `about.json`: hero, about, coding profiles, contact
//! and footer.

use maud::html;

use super::socials::{SocialSection, footer_targets, social_links};
use super::{external_link, fill_container};
use crate::data::Profile;
use crate::document::PageDocument;
use crate::format::BuildTime;
use crate::markdown::render_markdown;

/// Coding-profile platforms, in display order.
const CODING_PROFILES: &[(&str, &str)] = &[
    ("leetcode", "LeetCode"),
    ("codeforces", "Codeforces"),
    ("codechef", "CodeChef"),
];

const FOOTER_CONTENT: &str = "div.footer-content";
const FOOTER_FIRST_PARAGRAPH: &str = "div.footer-content p";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn hero(doc: &mut PageDocument, profile: &Profile) {
    if let Some(name) = present(&profile.name) {
        doc.set_text("hero-name", name);
    }
    if let Some(tagline) = present(&profile.tagline) {
        doc.set_text("hero-tagline", tagline);
    }
    if let Some(email) = present(&profile.email) {
        let link = html! {
            a href={ "mailto:" (email) } class="hero-email-link" { (email) }
        };
        doc.set_html("hero-email", &link.into_string());
    }
}

pub fn about(doc: &mut PageDocument, profile: &Profile) {
    if let Some(photo) = present(&profile.photo) {
        let name = profile.name.as_deref().unwrap_or_default();
        doc.set_attr("profile-photo", "src", photo);
        doc.set_attr("profile-photo", "alt", &format!("{name} Profile Photo"));
    }
    if let Some(bio) = present(&profile.bio) {
        doc.set_html("bio-text", &render_markdown(bio));
    }
    if !profile.socials.is_empty() {
        fill_container(doc, "social-links", social_links(SocialSection::About, &profile.socials));
    }
}

pub fn coding_profiles(doc: &mut PageDocument, profile: &Profile) {
    let Some(links) = &profile.coding_profiles else {
        return;
    };
    let cards = CODING_PROFILES.iter().filter_map(|(key, name)| {
        let url = links.get(*key)?.as_deref().filter(|url| !url.is_empty())?;
        Some(html! {
            div class="profile-card" {
                h3 { (name) }
                (external_link(url, "View Profile"))
            }
        })
    });
    fill_container(doc, "profiles-content", cards);
}

pub fn contact(doc: &mut PageDocument, profile: &Profile) {
    if let Some(email) = present(&profile.email) {
        let link = html! {
            a href={ "mailto:" (email) } class="email-link" { (email) }
        };
        doc.set_html("contact-email", &link.into_string());
    }
    if !profile.socials.is_empty() {
        fill_container(doc, "contact-social", social_links(SocialSection::Contact, &profile.socials));
    }
}

/// Footer name, social hrefs and the last-update stamp.
pub fn footer(doc: &mut PageDocument, profile: &Profile, build: &BuildTime) {
    doc.set_text("footer-name", profile.name.as_deref().unwrap_or_default());

    for (id, url) in footer_targets(&profile.socials) {
        doc.set_attr(id, "href", url);
    }

    let stamp = html! { p { (build.footer_line()) } };
    if doc.has_match(FOOTER_FIRST_PARAGRAPH) {
        doc.insert_after_first(FOOTER_FIRST_PARAGRAPH, &stamp.into_string());
    } else if doc.has_match(FOOTER_CONTENT) {
        doc.prepend_first(FOOTER_CONTENT, &stamp.into_string());
    }
}
