// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Small text formatting helpers shared by the sections and artifacts.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::config::TimestampConfig;

/// Reformat a `YYYY-MM-DD` date as `MM/DD/YYYY`.
///
/// Anything that does not parse passes through unchanged.
pub fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Join the present, non-empty parts with a bullet separator.
pub fn meta_line(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" • ")
}

/// The moment a compile run started, in the configured display zone.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildTime {
    pub at: DateTime<FixedOffset>,
    pub label: String,
}

impl BuildTime {
    pub fn new(at: DateTime<Utc>, zone: &TimestampConfig) -> Self {
        // Out-of-range offsets fall back to UTC.
        let offset = zone
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self {
            at: at.with_timezone(&offset),
            label: zone.label.clone(),
        }
    }

    pub fn now(zone: &TimestampConfig) -> Self {
        Self::new(Utc::now(), zone)
    }

    /// `Last Update on 28/11/2025 11:41 PM IST`
    pub fn footer_line(&self) -> String {
        format!(
            "Last Update on {} {}",
            self.at.format("%d/%m/%Y %I:%M %p"),
            self.label
        )
        .trim_end()
        .to_string()
    }

    /// `2025-11-28`, for sitemap `lastmod`.
    pub fn date(&self) -> String {
        self.at.format("%Y-%m-%d").to_string()
    }

    /// `2025-11-28 23:41 IST`, for llms.txt.
    pub fn stamp(&self) -> String {
        format!("{} {}", self.at.format("%Y-%m-%d %H:%M"), self.label)
            .trim_end()
            .to_string()
    }
}
