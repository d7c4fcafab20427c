// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The HTML template and the element ids it exposes.

use lol_html::{RewriteStrSettings, Selector, element, rewrite_str};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};

/// A loaded HTML template.
///
/// The id inventory is collected once at load time so sections can check
/// for their anchors without re-scanning the document.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    ids: BTreeSet<String>,
}

impl Template {
    pub fn parse<S: Into<String>>(source: S) -> Result<Self> {
        let source = source.into();
        let mut ids = BTreeSet::new();

        rewrite_str(
            &source,
            RewriteStrSettings {
                element_content_handlers: vec![element!("[id]", |el| {
                    if let Some(id) = el.get_attribute("id") {
                        ids.insert(id);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| Error::Rewrite(e.to_string()))?;

        Ok(Self { source, ids })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Whether any element matches a CSS selector.
    pub fn matches(&self, selector: &str) -> Result<bool> {
        validate_selector(selector)?;
        let mut found = false;

        rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |_el| {
                    found = true;
                    Ok(())
                })],
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| Error::Rewrite(e.to_string()))?;

        Ok(found)
    }
}

/// Check that lol_html accepts a selector before it is handed to a rewriter.
pub(crate) fn validate_selector(selector: &str) -> Result<()> {
    selector
        .parse::<Selector>()
        .map(|_| ())
        .map_err(|e| Error::Selector {
            selector: selector.to_string(),
            message: e.to_string(),
        })
}

/// Attribute-form id selector, valid for any id text.
pub(crate) fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}
