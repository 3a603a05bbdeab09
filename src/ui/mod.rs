// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`navbar`] - Header bar with the hamburger menu
//! - [`hero`] - Auto-advancing hero slideshow
//! - [`gallery`] - Filterable portfolio grid
//! - [`lightbox`] - Fullscreen image overlay
//! - [`testimonials`] - Testimonial carousel
//! - [`empty_state`] - Placeholder before a portfolio is chosen
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)

pub mod design_tokens;
pub mod empty_state;
pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod navbar;
pub mod styles;
pub mod testimonials;
