// SPDX-License-Identifier: MPL-2.0
//! Testimonial data loaded from `testimonials.toml` in the portfolio
//! directory. A missing file simply yields no testimonials and the
//! carousel section is not shown.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// File name looked up inside the portfolio directory.
const TESTIMONIALS_FILE: &str = "testimonials.toml";

/// Highest star rating a testimonial can display.
pub const MAX_RATING: u8 = 5;

/// One client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub author: String,
    #[serde(default)]
    pub role: String,
    pub quote: String,
    #[serde(default = "default_rating")]
    rating: u8,
}

fn default_rating() -> u8 {
    MAX_RATING
}

impl Testimonial {
    /// Star rating clamped into `1..=5`, whatever the file said.
    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating.clamp(1, MAX_RATING)
    }
}

#[derive(Debug, Default, Deserialize)]
struct TestimonialFile {
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

/// Loads testimonials for a portfolio directory.
///
/// A missing file is not an error; a malformed one is, so typos in the
/// TOML surface instead of silently hiding the section.
pub fn load(portfolio_dir: &Path) -> Result<Vec<Testimonial>> {
    let path = portfolio_dir.join(TESTIMONIALS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    let file: TestimonialFile = toml::from_str(&content)?;
    Ok(file.testimonials)
}
