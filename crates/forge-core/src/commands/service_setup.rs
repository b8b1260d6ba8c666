//! Kubernetes service properties

use super::{into_outcome, CommandOutcome, NO_POM_MESSAGE};
use crate::error::{ForgeError, Result};
use crate::inference::MAX_SERVICE_NAME_LEN;
use crate::pom::{upsert_property, PomModel};
use serde::{Deserialize, Serialize};

const NAME_KEY: &str = "fabric8.service.name";
const PORT_KEY: &str = "fabric8.service.port";
const CONTAINER_PORT_KEY: &str = "fabric8.service.containerPort";

const MAX_PORT: u32 = 65535;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptions {
    pub name: Option<String>,
    pub port: Option<u32>,
    pub container_port: Option<u32>,
}

impl ServiceOptions {
    /// Current values from the POM, so they can be edited in place
    ///
    /// Port properties that are not numbers are treated as unset.
    pub fn from_model(model: &PomModel) -> Self {
        let port = |key: &str| {
            model
                .properties
                .get_non_blank(key)
                .and_then(|v| v.trim().parse().ok())
        };
        Self {
            name: model.properties.get_non_blank(NAME_KEY).map(str::to_string),
            port: port(PORT_KEY),
            container_port: port(CONTAINER_PORT_KEY),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.chars().count() > MAX_SERVICE_NAME_LEN {
                return Err(ForgeError::validation(format!(
                    "Service name '{}' is longer than {} characters",
                    name, MAX_SERVICE_NAME_LEN
                )));
            }
        }
        for (label, port) in [("Service port", self.port), ("Container port", self.container_port)] {
            if let Some(port) = port.filter(|p| *p > MAX_PORT) {
                return Err(ForgeError::validation(format!(
                    "{} {} must be between 0 and {}",
                    label, port, MAX_PORT
                )));
            }
        }
        Ok(())
    }
}

/// Add or update the `fabric8.service.*` properties
pub fn service_setup(model: Option<&mut PomModel>, options: &ServiceOptions) -> Result<CommandOutcome> {
    let Some(model) = model else {
        return Ok(CommandOutcome::failure(NO_POM_MESSAGE));
    };
    into_outcome(run(model, options))
}

fn run(model: &mut PomModel, options: &ServiceOptions) -> Result<CommandOutcome> {
    options.validate()?;

    let port = options.port.map(|p| p.to_string());
    let container_port = options.container_port.map(|p| p.to_string());
    let props = &mut model.properties;

    let mut updated = false;
    updated = upsert_property(props, NAME_KEY, options.name.as_deref(), updated)?;
    updated = upsert_property(props, PORT_KEY, port.as_deref(), updated)?;
    updated = upsert_property(props, CONTAINER_PORT_KEY, container_port.as_deref(), updated)?;

    Ok(CommandOutcome::success("Kubernetes service updated", updated))
}
