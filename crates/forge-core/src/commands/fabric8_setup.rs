//! Fabric8 build support for a Maven project

use super::{into_outcome, CommandOutcome, NO_POM_MESSAGE};
use crate::config::Settings;
use crate::error::{ForgeError, Result};
use crate::facts::{ProjectFacts, SPRING_BOOT_GROUP_ID};
use crate::inference::image::DEFAULT_JAVA_IMAGE;
use crate::inference::{
    derive_container_label_from_image, infer_base_image_choices, infer_default_icon,
    infer_default_main_class, infer_service_port,
};
use crate::pom::profiles::{upsert_fabric8_profiles, FABRIC8_PROFILES};
use crate::pom::{
    check_profile_ids, setup_docker, setup_fabric8_plugin, setup_fabric8_properties,
    upsert_dependency, Dependency, DockerInputs, Fabric8Inputs, PomModel,
};
use serde::{Deserialize, Serialize};

const ACTUATOR_ARTIFACT_ID: &str = "spring-boot-starter-actuator";

/// Everything the user can choose during setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupOptions {
    pub organization: String,
    pub from: String,
    pub main_class: Option<String>,
    pub container: Option<String>,
    pub group: Option<String>,
    pub icon: Option<String>,
    pub service: bool,
    pub readiness_probe: bool,
    pub profiles: bool,
}

impl SetupOptions {
    /// Options pre-filled from inference, as offered to the user
    pub fn from_defaults(facts: &ProjectFacts, settings: &Settings) -> Self {
        let from = facts
            .docker_from_image()
            .map(str::to_string)
            .or_else(|| infer_base_image_choices(facts).into_iter().next())
            .unwrap_or_else(|| DEFAULT_JAVA_IMAGE.to_string());
        let container = derive_container_label_from_image(&from);
        let icon = infer_default_icon(facts, Some(&container)).to_string();

        Self {
            organization: settings.docker_organization.clone(),
            main_class: infer_default_main_class(facts),
            container: Some(container),
            group: None,
            icon: Some(icon),
            service: true,
            readiness_probe: true,
            profiles: true,
            from,
        }
    }

    /// Recompute the fields that follow the base image after `from` changed
    pub fn with_from(mut self, facts: &ProjectFacts, from: impl Into<String>) -> Self {
        self.from = from.into();
        let container = derive_container_label_from_image(&self.from);
        self.icon = Some(infer_default_icon(facts, Some(&container)).to_string());
        self.container = Some(container);
        self
    }
}

/// A Java class name or a `${property}` reference
pub fn is_class_name_or_property(value: &str) -> bool {
    let value = value.trim();
    if let Some(inner) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        return !inner.trim().is_empty();
    }
    !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

/// Add docker and fabric8 build support to the project
///
/// Runs docker setup, the fabric8-maven-plugin, the actuator dependency for
/// Spring Boot readiness probes, the `fabric8.*` properties and the `f8-*`
/// profiles. Each step is idempotent.
pub fn fabric8_setup(
    model: Option<&mut PomModel>,
    options: &SetupOptions,
    settings: &Settings,
) -> Result<CommandOutcome> {
    let Some(model) = model else {
        return Ok(CommandOutcome::failure(NO_POM_MESSAGE));
    };
    into_outcome(run(model, options, settings))
}

fn run(model: &mut PomModel, options: &SetupOptions, settings: &Settings) -> Result<CommandOutcome> {
    if options.from.trim().is_empty() {
        return Err(ForgeError::validation("A base Docker image is required"));
    }
    if let Some(main) = options.main_class.as_deref().filter(|m| !m.trim().is_empty()) {
        if !is_class_name_or_property(main) {
            return Err(ForgeError::validation(format!(
                "'{}' is not a valid class name or Maven property",
                main
            )));
        }
    }

    // profiles are upserted last; a broken profile list must fail before anything is written
    if options.profiles {
        check_profile_ids(model)?;
    }

    tracing::debug!("Starting to setup fabric8 project {}", model.artifact_id);
    let facts = ProjectFacts::collect(&*model);

    let docker = DockerInputs {
        organization: &options.organization,
        from: &options.from,
        main_class: options.main_class.as_deref(),
    };
    let mut changed = setup_docker(model, &docker, settings)?;
    changed |= setup_fabric8_plugin(model, settings);

    if options.readiness_probe && infer_service_port(&facts).is_some() && facts.has_spring_boot {
        changed |= upsert_dependency(model, Dependency::new(SPRING_BOOT_GROUP_ID, ACTUATOR_ARTIFACT_ID));
    }

    let inputs = Fabric8Inputs {
        container: options.container.as_deref(),
        group: options.group.as_deref(),
        icon: options.icon.as_deref(),
        service: options.service,
        readiness_probe: options.readiness_probe,
    };
    let properties = setup_fabric8_properties(model, &facts, &inputs)?;
    changed |= properties.changed;

    let mut message = format!(
        "Added Fabric8 Maven support with base Docker image: {}",
        options.from
    );
    if options.profiles {
        changed |= !upsert_fabric8_profiles(model)?.is_empty();
        let ids: Vec<&str> = FABRIC8_PROFILES.iter().map(|p| p.id).collect();
        message.push_str(&format!(
            ". Added the following Maven profiles [{}] to make building the project easier, e.g. mvn -Pf8-local-deploy",
            ids.join(", ")
        ));
    }

    Ok(CommandOutcome::success(message, changed).with_warnings(properties.warnings))
}
