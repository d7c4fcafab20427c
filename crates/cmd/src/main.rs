// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};

fn main() -> Result<()> {
    diagnostics::init();

    let base_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let report = cmd::run(&base_dir).inspect_err(|e| {
        let reason = format!("{e:#}");
        diagnostics::error!("compile failed: {reason}", reason: reason.as_str());
    })?;

    let output = report.output.display().to_string();
    diagnostics::debug!("artifacts written next to {output}", output: output.as_str());
    Ok(())
}
