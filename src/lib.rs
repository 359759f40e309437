//! Paper Diff library
//!
//! The diff model, session state and scroll synchronization are independent
//! of egui; `app` and `ui` put them on screen.

pub mod app;
pub mod config;
pub mod constant;
pub mod debounce;
pub mod diff;
pub mod file;
pub mod loader;
pub mod session;
pub mod style;
pub mod sync;
pub mod ui;
