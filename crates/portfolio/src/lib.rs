// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Portfolio: static page compiler
//!
//! Reads the JSON documents in a data directory, splices them into an HTML
//! template by element id, and writes the finished page together with an
//! XML sitemap and an `llms.txt` digest.
//!
//! ```text
//! data/*.json ──► Portfolio ──► PageDocument (sections) ──► index.html
//!                     │
//!                     ├──────────────────────────────────► sitemap.xml
//!                     └──────────────────────────────────► llms.txt
//! ```
//!
//! Missing data never fails a run: absent documents leave their page
//! region as authored, malformed files and records are logged and dropped.
//! Only reading the template and writing outputs are fatal.

mod compile;
pub mod config;
pub mod data;
mod document;
mod error;
pub mod format;
pub mod llms;
pub mod markdown;
pub mod sections;
pub mod sitemap;
mod template;

pub use compile::{Artifacts, CompileReport, compile, compile_with, render_artifacts};
pub use config::{CONFIG_FILE, ResolvedPaths, SiteConfig};
pub use data::{CompileStats, DataSet, Portfolio};
pub use document::PageDocument;
pub use error::{Error, Result};
pub use format::BuildTime;
pub use template::Template;
