// ABOUTME: Shared types and configuration for infobar.
// ABOUTME: Defines sidebar orientation, buffer spans, and config file handling.

pub mod config;
pub mod span;

pub use config::{Config, ConfigError, Orientation};
pub use span::Span;
