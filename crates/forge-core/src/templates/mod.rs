//! Template rendering seam for generated files
//!
//! The core only decides which template to use and with which parameters;
//! rendering belongs to the host through [`TemplateRenderer`].
//! [`BuiltinTemplates`] covers the CamelContext skeletons for the CLI.

mod builtin;

use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;

pub use builtin::BuiltinTemplates;

/// Parameters handed to a template, by name
pub type TemplateParams = BTreeMap<String, String>;

/// Parameter holding the project (root directory) name
pub const PROJECT_NAME_PARAM: &str = "projectName";

/// Templates the commands know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    CamelSpring,
    CamelBlueprint,
}

impl TemplateId {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::CamelSpring => "camel-spring",
            TemplateId::CamelBlueprint => "camel-blueprint",
        }
    }

    pub fn required_params(&self) -> &'static [&'static str] {
        &[PROJECT_NAME_PARAM]
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces file content for a template and its parameters
pub trait TemplateRenderer {
    fn render(&self, template: TemplateId, params: &TemplateParams) -> Result<String>;
}
