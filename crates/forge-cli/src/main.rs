//! f8-forge CLI - fabric8 and Camel setup for Maven projects

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use forge_core::camel::{
    find_camel_endpoints, find_camel_xml_files, load_xml_resources, ComponentKind, StaticCatalog,
};
use forge_core::commands::{
    self, camel_context, CamelContextInputs, CommandOutcome, ServiceOptions,
};
use forge_core::project::{self, PROJECT_FILE};
use forge_core::templates::BuiltinTemplates;
use forge_core::tui::{self, PromptArgs};
use forge_core::{infer_defaults, PomModel, ProjectFacts, Settings};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "f8-forge")]
#[command(about = "Set up fabric8 and Camel support in Maven projects")]
#[command(version)]
pub struct Args {
    /// Project snapshot (YAML form of the pom.xml)
    #[arg(short, long, global = true, default_value = PROJECT_FILE)]
    pub project: PathBuf,

    /// Settings file; defaults to $F8_FORGE_SETTINGS
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add docker and fabric8 build support
    Setup(SetupArgs),
    /// Add or update the Kubernetes service
    Service(ServiceArgs),
    /// Add Maven site publishing support
    Site,
    /// Show the inferred defaults for the project
    Defaults,
    /// Create a new CamelContext XML file
    CamelContext(CamelContextArgs),
    /// List XML files containing Camel routes
    CamelFiles(ScanArgs),
    /// List the endpoints of all Camel XML files
    CamelEndpoints(ScanArgs),
    /// Add a Camel language or data format
    CamelAdd(CamelAddArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct SetupArgs {
    /// Docker organization
    #[arg(long)]
    pub organization: Option<String>,
    /// Docker base image
    #[arg(long)]
    pub from: Option<String>,
    /// Main class for Java images
    #[arg(long = "main-class")]
    pub main_class: Option<String>,
    /// Container label
    #[arg(long)]
    pub container: Option<String>,
    /// Group label
    #[arg(long)]
    pub group: Option<String>,
    /// Console icon
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long = "no-service")]
    pub no_service: bool,
    #[arg(long = "no-readiness-probe")]
    pub no_readiness_probe: bool,
    #[arg(long = "no-profiles")]
    pub no_profiles: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ServiceArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub port: Option<u32>,
    #[arg(long = "container-port")]
    pub container_port: Option<u32>,
}

#[derive(ClapArgs, Debug)]
pub struct CamelContextArgs {
    /// File name; `.xml` is appended when missing
    pub name: String,
    /// Directory below src/main/resources
    #[arg(short, long)]
    pub directory: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// Skip files whose path contains any of these
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct CamelAddArgs {
    /// Component catalog (YAML with `languages` and `dataFormats`)
    #[arg(long)]
    pub catalog: PathBuf,
    /// Add a data format instead of a language
    #[arg(long = "data-format")]
    pub data_format: bool,
    /// Name in the catalog; prompted for when omitted
    pub name: Option<String>,
}

/// Directory the project snapshot lives in
fn project_dir(project_file: &Path) -> PathBuf {
    match project_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

fn print_outcome(outcome: &CommandOutcome) {
    for warning in &outcome.warnings {
        println!("  {} {}", "▲".yellow(), warning);
    }
    if outcome.is_success() {
        println!("  {} {}", "◆".green().bold(), outcome.message);
    } else {
        println!("  {} {}", "■".red().bold(), outcome.message);
    }
}

/// Report the outcome and save the model if the command changed it
async fn finish(args: &Args, model: Option<&PomModel>, outcome: CommandOutcome) -> Result<()> {
    if args.yes {
        print_outcome(&outcome);
    } else {
        tui::report_outcome(&outcome)?;
    }
    if let (true, Some(model)) = (outcome.changed, model) {
        project::save_project(&args.project, model).await?;
        tracing::info!("Saved {}", args.project.display());
    }
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn exclude_filter(exclude: &[String]) -> impl Fn(&str) -> Option<bool> + '_ {
    move |path: &str| {
        if exclude.iter().any(|e| !e.is_empty() && path.contains(e.as_str())) {
            Some(false)
        } else {
            None
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let settings = Settings::load(args.settings.as_deref()).context("Failed to load settings")?;
    let mut model = project::load_project(&args.project).await?;
    let dir = project_dir(&args.project);
    let prompt = PromptArgs { yes: args.yes };

    match &args.command {
        Command::Setup(setup) => {
            if !args.yes {
                cliclack::intro("Fabric8: Setup")?;
            }
            let outcome = match model.as_mut() {
                Some(pom) => {
                    let mut options = tui::prompt_setup_options(pom, &settings, prompt)?;
                    apply_setup_overrides(&mut options, pom, setup);
                    commands::fabric8_setup(Some(pom), &options, &settings)?
                }
                None => CommandOutcome::failure(commands::NO_POM_MESSAGE),
            };
            finish(&args, model.as_ref(), outcome).await
        }
        Command::Service(service) => {
            let outcome = match model.as_mut() {
                Some(pom) => {
                    let mut options = if service.name.is_some()
                        || service.port.is_some()
                        || service.container_port.is_some()
                    {
                        ServiceOptions::from_model(pom)
                    } else {
                        tui::prompt_service_options(pom, prompt)?
                    };
                    options.name = service.name.clone().or(options.name);
                    options.port = service.port.or(options.port);
                    options.container_port = service.container_port.or(options.container_port);
                    commands::service_setup(Some(pom), &options)?
                }
                None => CommandOutcome::failure(commands::NO_POM_MESSAGE),
            };
            finish(&args, model.as_ref(), outcome).await
        }
        Command::Site => {
            let outcome = commands::site_setup(model.as_mut(), &settings)?;
            finish(&args, model.as_ref(), outcome).await
        }
        Command::Defaults => {
            let pom = model.with_context(|| {
                format!("{} ({})", commands::NO_POM_MESSAGE, args.project.display())
            })?;
            let defaults = infer_defaults(&ProjectFacts::collect(&pom), None);
            print!("{}", serde_yaml_string(&defaults)?);
            Ok(())
        }
        Command::CamelContext(context) => {
            let resources = project::resources_dir(&dir);
            let files = load_xml_resources(&resources);
            let existing = find_camel_xml_files(&files, &resources.to_string_lossy(), |_| None);
            let project_name = dir
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| "camel".to_string());
            let inputs = CamelContextInputs {
                directory: context.directory.clone(),
                name: context.name.clone(),
                project_name,
            };

            if let Some(pom) = model.as_ref() {
                if !camel_context::is_enabled(pom) {
                    tracing::warn!("{} is neither a Blueprint nor a Spring project", pom.artifact_id);
                }
            }
            let (outcome, file) = commands::new_camel_context_xml(
                model.as_mut(),
                &inputs,
                &existing,
                |path| resources.join(path).exists(),
                &BuiltinTemplates,
            )?;
            if let Some(file) = file {
                let written = project::write_generated_file(&dir, &file).await?;
                tracing::debug!("Wrote {}", written.display());
            }
            finish(&args, model.as_ref(), outcome).await
        }
        Command::CamelFiles(scan) => {
            let resources = project::resources_dir(&dir);
            let files = load_xml_resources(&resources);
            let found = find_camel_xml_files(
                &files,
                &resources.to_string_lossy(),
                exclude_filter(&scan.exclude),
            );
            if found.files.is_empty() {
                println!("  {} No Camel XML files found", "●".blue());
            }
            for file in &found.files {
                println!("  {} {}", "●".blue(), file);
            }
            Ok(())
        }
        Command::CamelEndpoints(scan) => {
            let resources = project::resources_dir(&dir);
            let files = load_xml_resources(&resources);
            let result = find_camel_endpoints(
                &files,
                &resources.to_string_lossy(),
                exclude_filter(&scan.exclude),
            );
            for endpoint in result.endpoints() {
                let location = match endpoint.line_number {
                    Some(line) => format!("{}:{}", endpoint.file_uri, line),
                    None => endpoint.file_uri.clone(),
                };
                println!(
                    "  {} {} {} {}",
                    "●".blue(),
                    location,
                    endpoint.endpoint_uri.bold(),
                    endpoint
                        .endpoint_instance_name
                        .as_deref()
                        .map(|id| format!("({})", id))
                        .unwrap_or_default()
                        .dimmed()
                );
            }
            for diagnostic in result.diagnostics() {
                println!("  {} {}", "▲".yellow(), diagnostic);
            }
            Ok(())
        }
        Command::CamelAdd(add) => {
            let content = tokio::fs::read_to_string(&add.catalog)
                .await
                .with_context(|| format!("Failed to read catalog: {}", add.catalog.display()))?;
            let catalog = StaticCatalog::from_yaml(&content)?;
            let kind = if add.data_format {
                ComponentKind::DataFormat
            } else {
                ComponentKind::Language
            };
            let name = match (&add.name, model.as_ref()) {
                (Some(name), _) => Some(name.clone()),
                (None, Some(pom)) if !args.yes => tui::prompt_component(pom, &catalog, kind)?,
                _ => None,
            };
            let outcome = commands::add_camel_component(
                model.as_mut(),
                &catalog,
                kind,
                name.as_deref().unwrap_or_default(),
            )?;
            finish(&args, model.as_ref(), outcome).await
        }
    }
}

/// Command-line values win over prompted or inferred ones
fn apply_setup_overrides(
    options: &mut commands::SetupOptions,
    pom: &PomModel,
    setup: &SetupArgs,
) {
    if let Some(from) = &setup.from {
        let facts = ProjectFacts::collect(pom);
        *options = options.clone().with_from(&facts, from.clone());
    }
    if let Some(organization) = &setup.organization {
        options.organization = organization.clone();
    }
    if setup.main_class.is_some() {
        options.main_class = setup.main_class.clone();
    }
    if setup.container.is_some() {
        options.container = setup.container.clone();
    }
    if setup.group.is_some() {
        options.group = setup.group.clone();
    }
    if setup.icon.is_some() {
        options.icon = setup.icon.clone();
    }
    options.service &= !setup.no_service;
    options.readiness_probe &= !setup.no_readiness_probe;
    options.profiles &= !setup.no_profiles;
}

fn serde_yaml_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).context("Failed to render YAML")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
