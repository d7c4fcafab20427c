// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The page being built.
//!
//! Sections record edits against element ids (or, for the footer, a CSS
//! selector) on a `PageDocument` passed by `&mut`. Nothing touches the
//! template text until `render`, which applies every edit in one streaming
//! lol_html pass. Edits on the same target apply in the order they were
//! recorded, and only to the first element it matches: a duplicated id
//! leaves its later copies as authored.

use indexmap::IndexMap;
use lol_html::html_content::{ContentType, Element};
use lol_html::{HandlerResult, RewriteStrSettings, element, rewrite_str};

use crate::error::{Error, Result};
use crate::template::{Template, id_selector, validate_selector};

/// One recorded change to a matched element.
#[derive(Debug, Clone, PartialEq)]
enum Edit {
    /// Replace children with escaped text
    Text(String),
    /// Replace children with an HTML fragment
    Html(String),
    Attr { name: String, value: String },
    AddClass(String),
    RemoveClass(String),
    /// Insert an HTML fragment after the matched element
    AfterFirst(String),
    /// Insert an HTML fragment as the first child of the matched element
    PrependFirst(String),
}

/// Mutable view of the page: a template plus pending edits.
#[derive(Debug, Clone)]
pub struct PageDocument {
    template: Template,
    edits: Vec<(String, Edit)>,
}

impl PageDocument {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            edits: Vec::new(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Whether the template has an element with this id.
    pub fn has_id(&self, id: &str) -> bool {
        self.template.has_id(id)
    }

    /// Whether any template element matches `selector`. Invalid selectors
    /// match nothing.
    pub fn has_match(&self, selector: &str) -> bool {
        self.template.matches(selector).unwrap_or(false)
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        self.push_id(id, Edit::Text(text.to_string()));
    }

    pub fn set_html(&mut self, id: &str, html: &str) {
        self.push_id(id, Edit::Html(html.to_string()));
    }

    /// Remove every child of the element.
    pub fn clear(&mut self, id: &str) {
        self.push_id(id, Edit::Html(String::new()));
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        self.push_id(
            id,
            Edit::Attr {
                name: name.to_string(),
                value: value.to_string(),
            },
        );
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        self.push_id(id, Edit::AddClass(class.to_string()));
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        self.push_id(id, Edit::RemoveClass(class.to_string()));
    }

    pub fn insert_after_first(&mut self, selector: &str, html: &str) {
        self.edits
            .push((selector.to_string(), Edit::AfterFirst(html.to_string())));
    }

    pub fn prepend_first(&mut self, selector: &str, html: &str) {
        self.edits
            .push((selector.to_string(), Edit::PrependFirst(html.to_string())));
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    fn push_id(&mut self, id: &str, edit: Edit) {
        self.edits.push((id_selector(id), edit));
    }

    /// Apply all edits and serialize the page.
    pub fn render(&self) -> Result<String> {
        let mut groups: IndexMap<&str, Vec<&Edit>> = IndexMap::new();
        for (selector, edit) in &self.edits {
            groups.entry(selector.as_str()).or_default().push(edit);
        }

        let mut handlers = Vec::with_capacity(groups.len());
        for (selector, edits) in &groups {
            let selector: &str = selector;
            validate_selector(selector)?;
            let mut seen = false;
            handlers.push(element!(selector, move |el| {
                if seen {
                    return Ok(());
                }
                seen = true;
                for edit in edits.iter().copied() {
                    apply(el, edit)?;
                }
                Ok(())
            }));
        }

        rewrite_str(
            self.template.source(),
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| Error::Rewrite(e.to_string()))
    }
}

fn apply(el: &mut Element<'_, '_>, edit: &Edit) -> HandlerResult {
    match edit {
        Edit::Text(text) => el.set_inner_content(text, ContentType::Text),
        Edit::Html(html) => el.set_inner_content(html, ContentType::Html),
        Edit::Attr { name, value } => el.set_attribute(name, value)?,
        Edit::AddClass(class) => {
            let mut classes = class_list(el);
            if !classes.iter().any(|c| c == class) {
                classes.push(class.clone());
                el.set_attribute("class", &classes.join(" "))?;
            }
        }
        Edit::RemoveClass(class) => {
            let mut classes = class_list(el);
            let before = classes.len();
            classes.retain(|c| c != class);
            if classes.len() != before {
                if classes.is_empty() {
                    el.remove_attribute("class");
                } else {
                    el.set_attribute("class", &classes.join(" "))?;
                }
            }
        }
        Edit::AfterFirst(html) => el.after(html, ContentType::Html),
        Edit::PrependFirst(html) => el.prepend(html, ContentType::Html),
    }
    Ok(())
}

fn class_list(el: &Element<'_, '_>) -> Vec<String> {
    el.get_attribute("class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
