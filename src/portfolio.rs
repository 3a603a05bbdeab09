// SPDX-License-Identifier: MPL-2.0
//! Portfolio scanner: discovers categories and images on disk.
//!
//! A portfolio directory is laid out as one subdirectory per category, each
//! containing image files. A `hero` subdirectory, when present, supplies the
//! hero slideshow; otherwise the first image of each category is used.

use crate::config::MAX_HERO_SLIDES;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions accepted by the scanner.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Name of the subdirectory that feeds the hero slideshow.
const HERO_DIR: &str = "hero";

/// One image in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub path: PathBuf,
    /// Category name, taken from the containing subdirectory.
    pub category: String,
    /// Display title derived from the file stem.
    pub title: String,
}

/// Active grid filter: everything, or a single category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Checks whether an item passes this filter.
    #[must_use]
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => item.category == *name,
        }
    }
}

/// Scanned portfolio contents: hero slides, grid items, and the category
/// list driving the filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Portfolio {
    hero: Vec<PathBuf>,
    items: Vec<PortfolioItem>,
    categories: Vec<String>,
}

impl Portfolio {
    /// Scans `dir` for category subdirectories and their images.
    ///
    /// Ordering is alphabetical throughout so repeated scans of the same
    /// directory produce the same layout.
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Portfolio(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        let mut hero = Vec::new();
        let mut items = Vec::new();
        let mut categories = Vec::new();

        let mut subdirs: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                subdirs.push(path);
            }
        }
        subdirs.sort();

        for subdir in subdirs {
            let Some(name) = subdir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let images = scan_images(&subdir)?;
            if images.is_empty() {
                continue;
            }
            if name.eq_ignore_ascii_case(HERO_DIR) {
                hero = images;
            } else {
                let category = name.to_string();
                categories.push(category.clone());
                for path in images {
                    let title = title_from_path(&path);
                    items.push(PortfolioItem {
                        path,
                        category: category.clone(),
                        title,
                    });
                }
            }
        }

        // No dedicated hero directory: lead with one image per category.
        if hero.is_empty() {
            for category in &categories {
                if hero.len() >= MAX_HERO_SLIDES {
                    break;
                }
                if let Some(item) = items.iter().find(|item| item.category == *category) {
                    hero.push(item.path.clone());
                }
            }
        }

        Ok(Self {
            hero,
            items,
            categories,
        })
    }

    /// Assembles a portfolio from already-scanned parts; lets component
    /// tests stay filesystem-free.
    #[must_use]
    pub(crate) fn from_parts(
        hero: Vec<PathBuf>,
        items: Vec<PortfolioItem>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            hero,
            items,
            categories,
        }
    }

    /// Paths feeding the hero slideshow.
    #[must_use]
    pub fn hero_slides(&self) -> &[PathBuf] {
        &self.hero
    }

    /// All grid items, ordered by category then file name.
    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// Category names, one filter button each.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items passing the given filter, in display order. The lightbox is
    /// opened over exactly this list so navigation stays within the
    /// filtered view.
    #[must_use]
    pub fn visible_items(&self, filter: &Filter) -> Vec<&PortfolioItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// True when the scan found no displayable content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.hero.is_empty()
    }
}

/// Collects supported images directly inside `dir`, sorted by file name.
fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Checks the file extension against the supported set.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Turns `misty-morning_01.jpg` into `misty morning 01`.
fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Untitled")
        .replace(['_', '-'], " ")
        .trim()
        .to_string()
}
