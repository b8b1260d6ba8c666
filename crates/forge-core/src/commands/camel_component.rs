//! Add a Camel language or data format to the project

use super::{CommandOutcome, NO_POM_MESSAGE};
use crate::camel::{available_components, find_camel_core, CamelCatalog, ComponentKind};
use crate::error::Result;
use crate::facts::CAMEL_GROUP_ID;
use crate::pom::{upsert_dependency, Dependency, PomModel};

/// Install the artifact of catalog entry `name`, aligned with camel-core
///
/// Only entries the project does not have yet are eligible.
pub fn add_camel_component<C: CamelCatalog + ?Sized>(
    model: Option<&mut PomModel>,
    catalog: &C,
    kind: ComponentKind,
    name: &str,
) -> Result<CommandOutcome> {
    let Some(model) = model else {
        return Ok(CommandOutcome::failure(NO_POM_MESSAGE));
    };

    let Some(core_version) = find_camel_core(model).map(|core| core.version.clone()) else {
        return Ok(CommandOutcome::failure("The project does not include camel-core"));
    };

    let Some(entry) = available_components(model, catalog, kind)
        .into_iter()
        .find(|e| e.name == name.trim())
    else {
        return Ok(CommandOutcome::failure(format!("Unknown Camel {}", kind)));
    };

    let mut dependency = Dependency::new(CAMEL_GROUP_ID, &entry.artifact_id);
    dependency.version = core_version;
    let changed = upsert_dependency(model, dependency);

    Ok(CommandOutcome::success(
        format!(
            "Added Camel {} {} ({}) to the project",
            kind, entry.name, entry.artifact_id
        ),
        changed,
    ))
}
