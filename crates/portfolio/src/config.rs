// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Compiler configuration, parsed from an optional `site.yaml` in the base
//! directory.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the base directory.
pub const CONFIG_FILE: &str = "site.yaml";

/// Top-level compiler configuration.
///
/// Every block is optional; an empty or missing file reproduces the
/// argument-free defaults.
///
/// ```yaml
/// site:
///   title: "Portfolio"
///   base_url: "https://example.dev/"
///
/// paths:
///   data_dir: "data"
///   template: "index-dynamic.html"
///   output: "index.html"
///   sitemap: "sitemap.xml"
///   llms: "llms.txt"
///
/// timestamp:
///   label: "IST"
///   utc_offset_minutes: 330
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub timestamp: TimestampConfig,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteMeta {
    /// Heading for llms.txt when the profile has no name
    #[serde(default = "default_title")]
    pub title: String,
    /// Prefix for sitemap locations and llms.txt links. The sitemap is
    /// only written when this is an absolute http(s) URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

/// Input and output locations, relative to the base directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub sitemap: PathBuf,
    pub llms: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            template: PathBuf::from("index-dynamic.html"),
            output: PathBuf::from("index.html"),
            sitemap: PathBuf::from("sitemap.xml"),
            llms: PathBuf::from("llms.txt"),
        }
    }
}

/// Zone used for the footer "Last Update" line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimestampConfig {
    pub label: String,
    pub utc_offset_minutes: i32,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            label: "IST".to_string(),
            utc_offset_minutes: 330,
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Load `site.yaml` from `base_dir`.
    ///
    /// A missing file yields the defaults. A malformed file is logged and
    /// also yields the defaults; configuration never aborts a run.
    pub fn load(base_dir: &Path) -> Self {
        let path = base_dir.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                let reason = Error::io(&path, e).to_string();
                diagnostics::warn!("cannot read config, using defaults: {reason}", reason: reason.as_str());
                return Self::default();
            }
        };
        match Self::from_yaml(&text) {
            Ok(config) => config,
            Err(e) => {
                let reason = e.to_string();
                diagnostics::warn!("ignoring config, using defaults: {reason}", reason: reason.as_str());
                Self::default()
            }
        }
    }

    /// Locations with every relative path joined onto `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> ResolvedPaths {
        ResolvedPaths {
            base_dir: base_dir.to_path_buf(),
            data_dir: base_dir.join(&self.paths.data_dir),
            template: base_dir.join(&self.paths.template),
            output: base_dir.join(&self.paths.output),
            sitemap: base_dir.join(&self.paths.sitemap),
            llms: base_dir.join(&self.paths.llms),
        }
    }
}

/// Absolute (or base-relative) file locations for one compile run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    /// Detail files resolve against this directory
    pub base_dir: PathBuf,
    pub data_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub sitemap: PathBuf,
    pub llms: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_is_default() {
        let config = SiteConfig::from_yaml("").expect("parse");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.paths.template, PathBuf::from("index-dynamic.html"));
        assert_eq!(config.timestamp.utc_offset_minutes, 330);
    }

    #[test]
    fn parse_partial_config() {
        let yaml = r#"
site:
  base_url: "https://example.dev/"

paths:
  output: "dist/index.html"

timestamp:
  label: "UTC"
  utc_offset_minutes: 0
"#;
        let config = SiteConfig::from_yaml(yaml).expect("parse config");
        assert_eq!(config.site.base_url, "https://example.dev/");
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.paths.output, PathBuf::from("dist/index.html"));
        assert_eq!(config.paths.data_dir, PathBuf::from("data"));
        assert_eq!(config.timestamp.label, "UTC");
        assert_eq!(config.timestamp.utc_offset_minutes, 0);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(SiteConfig::from_yaml("site: [unclosed").is_err());
    }

    #[test]
    fn load_missing_and_malformed_fall_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(SiteConfig::load(dir.path()), SiteConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "paths: 7").expect("write");
        assert_eq!(SiteConfig::load(dir.path()), SiteConfig::default());
    }

    #[test]
    fn resolve_joins_base_dir() {
        let config = SiteConfig::default();
        let paths = config.resolve(Path::new("/srv/site"));
        assert_eq!(paths.data_dir, PathBuf::from("/srv/site/data"));
        assert_eq!(paths.output, PathBuf::from("/srv/site/index.html"));
        assert_eq!(paths.llms, PathBuf::from("/srv/site/llms.txt"));
    }
}
