// SPDX-License-Identifier: MPL-2.0
//! Raw-event to gesture translation.
//!
//! [`gesture::Recognizer`] is the only consumer of raw window events; it
//! turns them into the high-level [`crate::transform::Gesture`] values the
//! mapper understands, plus scene-level actions (scrolling, the hero click).

pub mod gesture;

pub use gesture::{InputAction, Recognizer};
