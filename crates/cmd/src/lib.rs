// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point shared by the `compile` binary and its tests.

use std::path::Path;

use anyhow::{Context, Result};
use portfolio::{CompileReport, SiteConfig};

/// Compile the site in `base_dir` using its optional `site.yaml`.
pub fn run(base_dir: &Path) -> Result<CompileReport> {
    let config = SiteConfig::load(base_dir);
    portfolio::compile(&config, base_dir)
        .with_context(|| format!("Failed to compile portfolio in {}", base_dir.display()))
}
