//! Forge Core - project setup engine for fabric8 and Camel Maven projects
//!
//! This library works out sensible defaults for containerizing a Maven
//! project and applies them to the project model without ever adding the
//! same thing twice. It also finds Camel routes and endpoints in XML
//! resources.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - [`pom`] types, [`facts`] snapshots, [`config`] settings
//! - **Layer 2: Engines** - [`inference`] defaults, [`pom::merge`] upserts, [`camel`] detection
//! - **Layer 3: Commands** - [`commands`] orchestration plus [`project`] file IO
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use forge_core::{commands, config::Settings, facts::ProjectFacts, pom::PomModel};
//!
//! let settings = Settings::load(None)?;
//! let mut model: PomModel = serde_yaml::from_str(&yaml)?;
//! let options = commands::SetupOptions::from_defaults(&ProjectFacts::collect(&model), &settings);
//! let outcome = commands::fabric8_setup(Some(&mut model), &options, &settings)?;
//! if outcome.changed {
//!     // persist the model
//! }
//! ```

pub mod camel;
pub mod commands;
pub mod config;
pub mod error;
pub mod facts;
pub mod inference;
pub mod pom;
pub mod project;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use commands::{CommandOutcome, Status};
pub use config::Settings;
pub use error::{ForgeError, Result};
pub use facts::{FactsProvider, Packaging, ProjectFacts};
pub use inference::{infer_defaults, InferredDefaults};
pub use pom::PomModel;
