// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Portfolio data model and the JSON loader that fills it.
//!
//! Every `*.json` file in the data directory becomes one document keyed by
//! its file stem (`about`, `projects`, ...). A file that cannot be read or
//! parsed is logged and dropped; a record that does not fit its collection's
//! shape is logged and skipped. Neither stops the run.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Ordered label → URL mapping. Empty or null URLs are kept so that
/// per-section rendering decides what to show.
pub type LinkMap = IndexMap<String, Option<String>>;

/// Iterate the entries of a link map whose URL is non-empty.
pub fn present_links(links: &LinkMap) -> impl Iterator<Item = (&str, &str)> {
    links.iter().filter_map(|(label, url)| match url.as_deref() {
        Some(url) if !url.is_empty() => Some((label.as_str(), url)),
        _ => None,
    })
}

/// Owner profile, from `about.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Markdown
    #[serde(default)]
    pub bio: Option<String>,
    /// Site-relative path of the profile photo
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: LinkMap,
    /// Present (even if empty) means the coding-profiles section is rebuilt
    #[serde(default)]
    pub coding_profiles: Option<LinkMap>,
    #[serde(default)]
    pub google_scholar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechCategory {
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: LinkMap,
    /// Markdown file embedded as a hidden detail block
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: Option<String>,
    /// Markdown
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub grade: Option<String>,
}

/// An explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Years and grades are authored as either strings or numbers.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Raw JSON documents keyed by file stem.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub documents: BTreeMap<String, Value>,
}

impl DataSet {
    /// Load every `*.json` file in `dir`. A missing directory is an empty set.
    pub fn load(dir: &Path) -> Self {
        let mut documents = BTreeMap::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    let reason = Error::io(dir, e).to_string();
                    diagnostics::warn!("cannot list data directory: {reason}", reason: reason.as_str());
                }
                return Self { documents };
            }
        };

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_json(&path) {
                Ok(value) => {
                    diagnostics::debug!("loaded {key}", key: key);
                    documents.insert(key.to_string(), value);
                }
                Err(e) => {
                    let reason = e.to_string();
                    diagnostics::warn!("error loading {key}: {reason}", key: key, reason: reason.as_str());
                }
            }
        }

        Self { documents }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.documents.get(key)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

/// The aggregated, typed portfolio.
///
/// `None` means the source document was absent (or unusable) and its
/// section is left untouched; `Some(vec![])` clears the section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub profile: Option<Profile>,
    pub techstack: Option<Vec<TechCategory>>,
    pub projects: Option<Vec<Project>>,
    pub research: Option<Vec<ResearchItem>>,
    pub achievements: Option<Vec<Achievement>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub certifications: Option<Vec<Certification>>,
    pub education: Option<Vec<EducationEntry>>,
}

impl Portfolio {
    pub fn from_dataset(data: &DataSet) -> Self {
        for key in data.documents.keys() {
            if !KNOWN_DOCUMENTS.contains(&key.as_str()) {
                diagnostics::debug!("ignoring unrecognised document {key}", key: key.as_str());
            }
        }

        Self {
            profile: data.get("about").and_then(|v| typed_document("about", v)),
            techstack: data.get("techstack").and_then(|v| typed_collection("techstack", v)),
            projects: data.get("projects").and_then(|v| typed_collection("projects", v)),
            research: data.get("research").and_then(|v| typed_collection("research", v)),
            achievements: data
                .get("achievements")
                .and_then(|v| typed_collection("achievements", v)),
            experience: data.get("experience").and_then(|v| typed_collection("experience", v)),
            certifications: data
                .get("certifications")
                .and_then(|v| typed_collection("certifications", v)),
            education: data.get("education").and_then(|v| typed_collection("education", v)),
        }
    }

    pub fn load(dir: &Path) -> Self {
        Self::from_dataset(&DataSet::load(dir))
    }

    pub fn stats(&self) -> CompileStats {
        CompileStats {
            skills: self
                .techstack
                .iter()
                .flatten()
                .map(|category| category.skills.len())
                .sum(),
            projects: self.projects.as_ref().map_or(0, Vec::len),
            research: self.research.as_ref().map_or(0, Vec::len),
            achievements: self.achievements.as_ref().map_or(0, Vec::len),
            certifications: self.certifications.as_ref().map_or(0, Vec::len),
        }
    }
}

const KNOWN_DOCUMENTS: &[&str] = &[
    "about",
    "techstack",
    "projects",
    "research",
    "achievements",
    "experience",
    "certifications",
    "education",
];

fn typed_document<T: DeserializeOwned>(key: &str, value: &Value) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(doc) => Some(doc),
        Err(e) => {
            let reason = Error::record(key, e).to_string();
            diagnostics::warn!("dropping {key}: {reason}", key: key, reason: reason.as_str());
            None
        }
    }
}

/// Convert a JSON array record by record, skipping records that do not fit.
fn typed_collection<T: DeserializeOwned>(key: &str, value: &Value) -> Option<Vec<T>> {
    let Some(items) = value.as_array() else {
        diagnostics::warn!("dropping {key}: expected a list", key: key);
        return None;
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value(item.clone()) {
            Ok(record) => records.push(record),
            Err(e) => {
                let reason = Error::record(key, e).to_string();
                diagnostics::warn!("skipping {key} record {index}: {reason}", key: key, index: index, reason: reason.as_str());
            }
        }
    }
    Some(records)
}

/// Collection sizes reported after loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub skills: usize,
    pub projects: usize,
    pub research: usize,
    pub achievements: usize,
    pub certifications: usize,
}
