//! Charm-style setup prompts using cliclack

use crate::camel::{available_components, CamelCatalog, ComponentKind};
use crate::commands::fabric8_setup::is_class_name_or_property;
use crate::commands::{CommandOutcome, ServiceOptions, SetupOptions};
use crate::config::Settings;
use crate::facts::ProjectFacts;
use crate::inference::{
    infer_base_image_choices, infer_service_port, is_jar_image, ICON_CHOICES, MAX_SERVICE_NAME_LEN,
};
use crate::pom::PomModel;
use anyhow::Result;

/// How much to ask
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptArgs {
    /// Accept every inferred default without prompting
    pub yes: bool,
}

/// Walk the user through the fabric8 setup options
///
/// Every prompt starts from the inferred default, so pressing enter
/// throughout is the same as `--yes`.
pub fn prompt_setup_options(
    model: &PomModel,
    settings: &Settings,
    args: PromptArgs,
) -> Result<SetupOptions> {
    let facts = ProjectFacts::collect(model);
    let mut options = SetupOptions::from_defaults(&facts, settings);

    if args.yes {
        cliclack::log::info(format!("Using base image {}", options.from))?;
        return Ok(options);
    }

    options.organization = cliclack::input("Docker organization")
        .default_input(&options.organization)
        .interact()?;

    let choices = infer_base_image_choices(&facts);
    let from: String = if choices.len() > 1 {
        let mut select = cliclack::select("Docker base image").initial_value(options.from.clone());
        for image in &choices {
            select = select.item(image.clone(), image, "");
        }
        select.interact()?
    } else {
        cliclack::input("Docker base image")
            .default_input(&options.from)
            .interact()?
    };
    options = options.with_from(&facts, from);

    if is_jar_image(&options.from) {
        let main: String = cliclack::input("Main class")
            .placeholder("com.example.Main")
            .default_input(options.main_class.as_deref().unwrap_or_default())
            .required(false)
            .validate(|input: &String| {
                if input.trim().is_empty() || is_class_name_or_property(input) {
                    Ok(())
                } else {
                    Err("Enter a Java class name or a ${property}")
                }
            })
            .interact()?;
        options.main_class = Some(main).filter(|m| !m.trim().is_empty());
    }

    let container: String = cliclack::input("Container label")
        .default_input(options.container.as_deref().unwrap_or_default())
        .required(false)
        .interact()?;
    options.container = Some(container).filter(|c| !c.trim().is_empty());

    let current_icon = options.icon.clone().unwrap_or_default();
    let mut select = cliclack::select("Console icon").initial_value(current_icon);
    for icon in ICON_CHOICES {
        select = select.item(icon.to_string(), icon, "");
    }
    options.icon = Some(select.interact()?);

    let group: String = cliclack::input("Group label")
        .placeholder("leave empty for none")
        .required(false)
        .interact()?;
    options.group = Some(group).filter(|g| !g.trim().is_empty());

    if infer_service_port(&facts).is_some() {
        options.service = cliclack::confirm("Create a Kubernetes service?")
            .initial_value(options.service)
            .interact()?;
        options.readiness_probe = cliclack::confirm("Add a readiness probe?")
            .initial_value(options.readiness_probe)
            .interact()?;
    } else {
        cliclack::log::remark("No HTTP port detected; skipping service and readiness probe")?;
    }

    options.profiles = cliclack::confirm("Add the f8-* Maven profiles?")
        .initial_value(options.profiles)
        .interact()?;

    Ok(options)
}

/// Ask for the Kubernetes service values, starting from the POM's current ones
pub fn prompt_service_options(model: &PomModel, args: PromptArgs) -> Result<ServiceOptions> {
    let mut options = ServiceOptions::from_model(model);
    if args.yes {
        return Ok(options);
    }

    let name: String = cliclack::input("Service name")
        .default_input(options.name.as_deref().unwrap_or(&model.artifact_id))
        .validate(|input: &String| {
            if input.chars().count() > MAX_SERVICE_NAME_LEN {
                Err(format!("At most {} characters", MAX_SERVICE_NAME_LEN))
            } else {
                Ok(())
            }
        })
        .interact()?;
    options.name = Some(name);

    let port: u16 = cliclack::input("Service port")
        .default_input(&options.port.unwrap_or(80).to_string())
        .interact()?;
    options.port = Some(port.into());

    let container_port: u16 = cliclack::input("Container port")
        .default_input(&options.container_port.unwrap_or(8080).to_string())
        .interact()?;
    options.container_port = Some(container_port.into());

    Ok(options)
}

/// Pick a language or data format from those the project does not have yet
pub fn prompt_component<C: CamelCatalog + ?Sized>(
    model: &PomModel,
    catalog: &C,
    kind: ComponentKind,
) -> Result<Option<String>> {
    let choices = available_components(model, catalog, kind);
    if choices.is_empty() {
        cliclack::log::warning(format!("No Camel {} available to add", kind))?;
        return Ok(None);
    }

    let mut select = cliclack::select(format!("Camel {}", kind));
    for entry in &choices {
        select = select.item(
            entry.name.clone(),
            &entry.name,
            entry.description.as_deref().unwrap_or_default(),
        );
    }
    Ok(Some(select.interact()?))
}

/// Print a command outcome the way the rest of the prompts look
pub fn report_outcome(outcome: &CommandOutcome) -> Result<()> {
    for warning in &outcome.warnings {
        cliclack::log::warning(warning)?;
    }
    if outcome.is_success() {
        cliclack::outro(&outcome.message)?;
    } else {
        cliclack::outro_cancel(&outcome.message)?;
    }
    Ok(())
}
