// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! One compile run: load data, populate the template, write the page,
//! the sitemap and llms.txt.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::data::{CompileStats, Portfolio};
use crate::document::PageDocument;
use crate::error::{Error, Result};
use crate::format::BuildTime;
use crate::sections::{RenderContext, populate};
use crate::template::Template;
use crate::{llms, sitemap};

/// What a compile run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileReport {
    pub stats: CompileStats,
    pub output: PathBuf,
    /// `None` when the base URL is not absolute and no sitemap was written.
    pub sitemap: Option<PathBuf>,
    pub llms: PathBuf,
}

/// The three rendered artifacts, before they are written.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub page: String,
    pub sitemap: Option<String>,
    pub llms: String,
}

/// Render every artifact from an already-loaded portfolio and template.
pub fn render_artifacts(
    portfolio: &Portfolio,
    template: Template,
    config: &SiteConfig,
    base_dir: &Path,
    build: &BuildTime,
) -> Result<Artifacts> {
    let mut doc = PageDocument::new(template);
    let ctx = RenderContext { base_dir, build };
    populate(&mut doc, portfolio, &ctx);
    let edits = doc.edit_count();
    diagnostics::debug!("applying {edits} page edits", edits: edits);

    let base_url = config.site.base_url.as_str();
    let sitemap = if sitemap::is_absolute_url(base_url) {
        Some(sitemap::render(portfolio, base_url, build)?)
    } else {
        diagnostics::warn!(
            "skipping sitemap: site.base_url {base_url} is not an absolute http(s) URL",
            base_url: base_url
        );
        None
    };

    Ok(Artifacts {
        page: doc.render()?,
        sitemap,
        llms: llms::render(portfolio, &config.site.title, &config.site.base_url, build),
    })
}

/// Compile the site rooted at `base_dir`, stamping it with the current time.
pub fn compile(config: &SiteConfig, base_dir: &Path) -> Result<CompileReport> {
    compile_with(config, base_dir, BuildTime::now(&config.timestamp))
}

/// Compile with an explicit build time.
pub fn compile_with(config: &SiteConfig, base_dir: &Path, build: BuildTime) -> Result<CompileReport> {
    let paths = config.resolve(base_dir);
    let template_name = paths.template.display().to_string();
    diagnostics::info!("compiling {template}", template: template_name.as_str());

    let portfolio = Portfolio::load(&paths.data_dir);
    let stats = portfolio.stats();
    log_stats(&stats);

    let template = Template::load(&paths.template)?;
    let artifacts = render_artifacts(&portfolio, template, config, &paths.base_dir, &build)?;

    write_artifact(&paths.output, &artifacts.page)?;
    let sitemap = match &artifacts.sitemap {
        Some(xml) => {
            write_artifact(&paths.sitemap, xml)?;
            Some(paths.sitemap)
        }
        None => None,
    };
    write_artifact(&paths.llms, &artifacts.llms)?;

    let output_name = paths.output.display().to_string();
    diagnostics::info!(
        "successfully compiled {template} to {output}",
        template: template_name.as_str(),
        output: output_name.as_str()
    );

    Ok(CompileReport {
        stats,
        output: paths.output,
        sitemap,
        llms: paths.llms,
    })
}

fn log_stats(stats: &CompileStats) {
    diagnostics::info!(
        "compilation stats: {skills} skills, {projects} projects, {research} research papers, {achievements} achievements, {certifications} certifications",
        skills: stats.skills,
        projects: stats.projects,
        research: stats.research,
        achievements: stats.achievements,
        certifications: stats.certifications
    );
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    let name = path.display().to_string();
    diagnostics::debug!("wrote {path}", path: name.as_str());
    Ok(())
}
