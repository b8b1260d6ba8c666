//! Project commands built on inference and merging
//!
//! Each command takes the project model plus explicit inputs and reports a
//! [`CommandOutcome`]. Commands never persist anything: the host saves the
//! model (and writes any generated file) when `changed` is set.
//!
//! - [`fabric8_setup`]: docker and fabric8 build support
//! - [`service_setup`]: Kubernetes service properties
//! - [`site_setup`]: Maven site publishing
//! - [`camel_context`]: new CamelContext XML file
//! - [`camel_component`]: add a Camel language or data format

pub mod camel_component;
pub mod camel_context;
pub mod fabric8_setup;
pub mod service_setup;
pub mod site_setup;

use crate::error::{ForgeError, Result};
use serde::Serialize;

pub use camel_component::add_camel_component;
pub use camel_context::{new_camel_context_xml, CamelContextInputs, GeneratedFile};
pub use fabric8_setup::{fabric8_setup, SetupOptions};
pub use service_setup::{service_setup, ServiceOptions};
pub use site_setup::site_setup;

/// Message for commands that need a project model but got none
pub const NO_POM_MESSAGE: &str = "No pom.xml available so cannot edit the project!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

/// Result of a command as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub status: Status,
    pub message: String,
    /// Whether the project model was modified
    pub changed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>, changed: bool) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            changed,
            warnings: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
            changed: false,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Turn validation errors into a failed outcome; other errors propagate
pub(crate) fn into_outcome(result: Result<CommandOutcome>) -> Result<CommandOutcome> {
    match result {
        Err(ForgeError::Validation(message)) => Ok(CommandOutcome::failure(message)),
        other => other,
    }
}
