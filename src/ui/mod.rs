// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The view is a stack of full-viewport layers following the Elm-style
//! "state down, messages up" pattern: the parallax canvas at the back, the
//! card canvas above it, and the widget overlays on top.
//!
//! - [`layers`] - Parallax background canvas
//! - [`card`] - The interactive card canvas
//! - [`overlay`] - Hero headline and info panel widgets
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card;
pub mod design_tokens;
pub mod layers;
pub mod overlay;
pub mod theming;
