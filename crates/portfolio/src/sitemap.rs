// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! XML sitemap for the generated page.
//!
//! The page is a single document, so every entry past the root is a
//! fragment URL: one per populated section and one per card record.
//! Locations must be absolute, so a sitemap is only rendered against an
//! `http://` or `https://` base URL.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::data::Portfolio;
use crate::error::{Error, Result};
use crate::format::BuildTime;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub image: Option<String>,
}

impl SitemapEntry {
    fn anchor(base_url: &str, fragment: &str) -> Self {
        Self {
            loc: format!("{base_url}#{fragment}"),
            lastmod: None,
            image: None,
        }
    }
}

/// Whether `url` carries an http(s) scheme and a host.
pub fn is_absolute_url(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
    })
}

/// Resolve a site-relative path against the base URL. Absolute URLs are
/// returned unchanged.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches("./").trim_start_matches('/')
    )
}

fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    items.as_deref().filter(|items| !items.is_empty())
}

/// List the sitemap entries for a portfolio, root first.
pub fn entries(portfolio: &Portfolio, base_url: &str, build: &BuildTime) -> Vec<SitemapEntry> {
    let root = format!("{}/", base_url.trim_end_matches('/'));
    let base_url = root.as_str();
    let profile = portfolio.profile.as_ref();
    let mut entries = vec![SitemapEntry {
        loc: root.clone(),
        lastmod: Some(build.date()),
        image: profile
            .and_then(|p| p.photo.as_deref())
            .filter(|photo| !photo.is_empty())
            .map(|photo| resolve_url(base_url, photo)),
    }];

    if profile.is_some() {
        entries.push(SitemapEntry::anchor(base_url, "about"));
    }
    if non_empty(&portfolio.techstack).is_some() {
        entries.push(SitemapEntry::anchor(base_url, "techstack"));
    }
    if let Some(projects) = non_empty(&portfolio.projects) {
        entries.push(SitemapEntry::anchor(base_url, "projects"));
        for project in projects {
            entries.push(SitemapEntry::anchor(base_url, &format!("projects/{}", project.id)));
        }
    }
    if let Some(research) = non_empty(&portfolio.research) {
        entries.push(SitemapEntry::anchor(base_url, "research"));
        for item in research {
            entries.push(SitemapEntry::anchor(base_url, &format!("research/{}", item.id)));
        }
    }
    if let Some(achievements) = non_empty(&portfolio.achievements) {
        entries.push(SitemapEntry::anchor(base_url, "achievements"));
        for item in achievements {
            entries.push(SitemapEntry::anchor(base_url, &format!("achievements/{}", item.id)));
        }
    }
    if non_empty(&portfolio.experience).is_some() {
        entries.push(SitemapEntry::anchor(base_url, "experience"));
    }
    if let Some(certifications) = non_empty(&portfolio.certifications) {
        entries.push(SitemapEntry::anchor(base_url, "certifications"));
        for item in certifications {
            entries.push(SitemapEntry::anchor(base_url, &format!("certifications/{}", item.id)));
        }
    }
    if non_empty(&portfolio.education).is_some() {
        entries.push(SitemapEntry::anchor(base_url, "education"));
    }

    entries
}

/// Render the sitemap document.
pub fn render(portfolio: &Portfolio, base_url: &str, build: &BuildTime) -> Result<String> {
    write_urlset(&entries(portfolio, base_url, build))
}

fn write_urlset(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:image", IMAGE_NS));
    write(&mut writer, Event::Start(urlset))?;

    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.loc)?;
        if let Some(lastmod) = &entry.lastmod {
            text_element(&mut writer, "lastmod", lastmod)?;
        }
        if let Some(image) = &entry.image {
            write(&mut writer, Event::Start(BytesStart::new("image:image")))?;
            text_element(&mut writer, "image:loc", image)?;
            write(&mut writer, Event::End(BytesEnd::new("image:image")))?;
        }
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}
