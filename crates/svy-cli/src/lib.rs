//! Terminal presentation layer for SVY
//!
//! Plumbing only: the form view converts keystrokes into the core's tagged
//! input events, the report view renders whatever the aggregator returns.
//! No survey rule lives in this crate.

mod config;
mod form;
mod report;
mod ui;


pub use config::{AppConfig, OutputFormat};
pub use form::run_form;
pub use report::{render_json, render_text};
pub use ui::{display_banner, prompt_line, prompt_with_current, read_command};

// Re-export core types
pub use svy_core::{Error, Result};
