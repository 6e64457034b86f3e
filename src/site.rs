//! Portfolio content loading.
//!
//! The page is described by a small TOML file: a title, the sections in
//! document order, the project cards shown in the carousel, and the nav
//! links. Everything here is immutable once loaded.

use crate::carousel::CarouselControls;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    Text,
    Projects,
    Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_section_kind")]
    pub kind: SectionKind,
}

fn default_section_kind() -> SectionKind {
    SectionKind::Text
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub controls: CarouselControls,
}

impl SiteContent {
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.id.as_str())
    }
}

/// Load the site description and resolve project images relative to it.
pub fn load_site_content(path: &Path) -> Result<SiteContent> {
    info!(path = %path.display(), "Loading site content");
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site content at {}", path.display()))?;
    let mut site = parse_site_content(&data)
        .with_context(|| format!("Invalid site content in {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for project in &mut site.projects {
        if let Some(image) = project.image.as_mut() {
            if image.is_relative() {
                *image = base.join(&*image);
            }
        }
    }

    info!(
        sections = site.sections.len(),
        projects = site.projects.len(),
        nav_links = site.nav.len(),
        "Finished loading site content"
    );
    Ok(site)
}

pub fn parse_site_content(data: &str) -> Result<SiteContent> {
    let mut site: SiteContent = toml::from_str(data).context("Failed to parse site TOML")?;

    let mut seen = HashSet::new();
    for section in &site.sections {
        if section.id.trim().is_empty() {
            bail!("Section '{}' has an empty id", section.title);
        }
        if !seen.insert(section.id.as_str()) {
            bail!("Duplicate section id '{}'", section.id);
        }
    }

    if site.nav.is_empty() {
        site.nav = site
            .sections
            .iter()
            .map(|section| NavLink {
                label: section.title.clone(),
                href: format!("#{}", section.id),
            })
            .collect();
    }

    if site.projects.is_empty()
        && site
            .sections
            .iter()
            .any(|section| section.kind == SectionKind::Projects)
    {
        warn!("Projects section present but no projects listed");
    }

    Ok(site)
}
