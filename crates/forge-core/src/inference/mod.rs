//! Default inference from project facts
//!
//! Everything here is a pure function of [`ProjectFacts`], so a UI can call
//! it again whenever the user changes an input.
//!
//! - [`port`]: service port and readiness probe path
//! - [`image`]: base image choices and container labels
//! - [`icon`]: console icon
//! - [`naming`]: Kubernetes name length limit

pub mod icon;
pub mod image;
pub mod naming;
pub mod port;

use crate::facts::ProjectFacts;
use serde::Serialize;

pub use icon::{icon_ref, infer_default_icon, ICON_CHOICES};
pub use image::{derive_container_label_from_image, infer_base_image_choices, is_jar_image};
pub use naming::{canonicalize_service_name, CanonicalName, MAX_SERVICE_NAME_LEN};
pub use port::{infer_service_port, readiness_probe_path};

/// Properties that may already name the main class, most specific first
const MAIN_CLASS_PROPERTIES: [&str; 3] = ["docker.env.MAIN", "start-class", "mainClass"];

/// Defaults offered to the user before any override
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredDefaults {
    pub default_service_port: Option<String>,
    pub default_icon: String,
    pub default_main_class: Option<String>,
    pub default_container_name: Option<String>,
    pub default_base_image_choices: Vec<String>,
}

/// Main class already declared in the POM, if any
pub fn infer_default_main_class(facts: &ProjectFacts) -> Option<String> {
    MAIN_CLASS_PROPERTIES
        .iter()
        .find_map(|key| facts.existing_properties.get_non_blank(key))
        .map(|s| s.trim().to_string())
}

/// Compute all defaults at once
///
/// `container` is the container label the user picked, if they did; it
/// steers the icon. Without it the label is derived from the default base
/// image.
pub fn infer_defaults(facts: &ProjectFacts, container: Option<&str>) -> InferredDefaults {
    let choices = infer_base_image_choices(facts);
    let default_container_name = choices
        .first()
        .map(|image| derive_container_label_from_image(image));
    let container = container.or(default_container_name.as_deref());

    InferredDefaults {
        default_service_port: infer_service_port(facts),
        default_icon: infer_default_icon(facts, container).to_string(),
        default_main_class: infer_default_main_class(facts),
        default_container_name,
        default_base_image_choices: choices,
    }
}
