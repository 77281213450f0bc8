// SPDX-License-Identifier: MPL-2.0
//! `iced_drift` is a parallax scrolling demo built with the Iced GUI
//! framework.
//!
//! A three-page scene of layered shapes drifts past at different speeds
//! while an interactive card answers hover tilt, drag, pinch, and wheel
//! input through a spring animation engine. The pipeline is deliberately
//! linear: raw events become gestures ([`input`]), gestures move transform
//! targets ([`transform`]), springs chase the targets ([`motion`]), and the
//! canvases paint whatever the springs currently hold ([`ui`]).

#![doc(html_root_url = "https://docs.rs/iced_drift/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod motion;
pub mod scene;
pub mod transform;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
