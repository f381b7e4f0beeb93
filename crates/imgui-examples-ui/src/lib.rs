//! Demo content for imgui-examples-rs.
//!
//! - [`ExampleState`] drives the example window shown by every binary
//! - [`showcase`] holds the showcase window and its sections
//! - [`ExampleGui`] pairs the GUI context with that state for the frame loop

#![allow(clippy::must_use_candidate)]

pub mod example_window;
pub mod gui;
pub mod showcase;

#[cfg(test)]
mod test_support;

pub use example_window::ExampleState;
pub use gui::ExampleGui;
pub use showcase::{ShowcaseState, TableOptions, WidgetsState, WindowOptions};
