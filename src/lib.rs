// SPDX-License-Identifier: MPL-2.0
//! Desktop photography portfolio built with Iced.
//!
//! Scans a directory of images into a filterable gallery with a hero
//! slideshow, a testimonial carousel, and a fullscreen lightbox. The
//! carousels share one deadline-based state machine, [`cycler::Cycler`].

pub mod app;
pub mod config;
pub mod cycler;
pub mod error;
pub mod portfolio;
pub mod testimonials;
pub mod ui;
