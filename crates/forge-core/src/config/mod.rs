//! Configuration for project setup
//!
//! Settings come from a YAML file given on the command line or named by
//! the `F8_FORGE_SETTINGS` environment variable, falling back to built-in
//! defaults.

pub mod settings;

pub use settings::{Settings, SETTINGS_ENV};
