// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Per-section social link policy.
//!
//! The about block hides discord and instagram and shows unknown platforms
//! as plain labels. The contact block shows only platforms it has an icon
//! for, including discord and instagram. The footer only fills hrefs on
//! fixed anchors.

use maud::{Markup, html};

use crate::data::{LinkMap, present_links};
use crate::format::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialSection {
    About,
    Contact,
    Footer,
}

/// Platforms never shown in the about block.
const ABOUT_HIDDEN: &[&str] = &["discord", "instagram"];

impl SocialSection {
    /// Font Awesome classes for a platform in this section.
    pub fn icon(self, platform: &str) -> Option<&'static str> {
        let icon = match platform {
            "github" => "fa-brands fa-github",
            "linkedin" => "fa-brands fa-linkedin",
            "twitter" => "fa-brands fa-x-twitter",
            "instagram" => "fa-brands fa-instagram",
            "discord" => "fa-brands fa-discord",
            _ => return None,
        };
        match self {
            SocialSection::About if ABOUT_HIDDEN.contains(&platform) => None,
            SocialSection::About | SocialSection::Contact => Some(icon),
            SocialSection::Footer => None,
        }
    }

    /// Id of the fixed anchor a platform fills in this section. Only the
    /// footer has fixed anchors.
    pub fn anchor(self, platform: &str) -> Option<&'static str> {
        if self != SocialSection::Footer {
            return None;
        }
        match platform {
            "github" => Some("github-link"),
            "linkedin" => Some("linkedin-link"),
            "twitter" => Some("twitter-link"),
            "instagram" => Some("instagram-link"),
            "discord" => Some("discord-link"),
            _ => None,
        }
    }

    /// Whether a platform is listed in this section at all.
    pub fn shows(self, platform: &str) -> bool {
        match self {
            SocialSection::About => !ABOUT_HIDDEN.contains(&platform),
            SocialSection::Contact => self.icon(platform).is_some(),
            SocialSection::Footer => self.anchor(platform).is_some(),
        }
    }

    fn link_class(self) -> &'static str {
        match self {
            SocialSection::Contact => "contact-social-link",
            SocialSection::About | SocialSection::Footer => "social-link",
        }
    }
}

/// Render the social link list for the about or contact block.
pub fn social_links(section: SocialSection, socials: &LinkMap) -> Vec<Markup> {
    present_links(socials)
        .filter(|(platform, _)| section.shows(platform))
        .map(|(platform, url)| social_link(section, platform, url))
        .collect()
}

fn social_link(section: SocialSection, platform: &str, url: &str) -> Markup {
    let label = capitalize(platform);
    html! {
        a href=(url) target="_blank" rel="noopener noreferrer" class=(section.link_class()) {
            @if let Some(icon) = section.icon(platform) {
                i class=(icon) {}
                span { (label) }
            } @else {
                (label)
            }
        }
    }
}

/// Footer anchors to point at each present platform URL, in authored order.
pub fn footer_targets(socials: &LinkMap) -> Vec<(&'static str, &str)> {
    let section = SocialSection::Footer;
    present_links(socials)
        .filter(|(platform, _)| section.shows(platform))
        .filter_map(|(platform, url)| section.anchor(platform).map(|id| (id, url)))
        .collect()
}
