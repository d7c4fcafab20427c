// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while compiling the portfolio page.
///
/// Only template reads and artifact writes are fatal to a run; the rest are
/// logged and absorbed by the section or file that produced them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record in {collection}: {source}")]
    Record {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid site.yaml: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("Invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("HTML rewrite failed: {0}")]
    Rewrite(String),

    #[error("XML write failed: {0}")]
    Xml(String),
}

impl Error {
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn json<P: AsRef<Path>>(path: P, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn record<S: Into<String>>(collection: S, source: serde_json::Error) -> Self {
        Error::Record {
            collection: collection.into(),
            source,
        }
    }

    /// Whether the error came from a missing file rather than a bad one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
