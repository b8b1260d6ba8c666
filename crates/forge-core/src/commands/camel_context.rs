//! New CamelContext XML file

use super::{into_outcome, CommandOutcome, NO_POM_MESSAGE};
use crate::camel::{detect_xml_flavor, find_camel_core, CamelXmlFiles, XmlFlavor};
use crate::error::{ForgeError, Result};
use crate::facts::CAMEL_GROUP_ID;
use crate::pom::{upsert_dependency, Dependency, PomModel};
use crate::templates::{TemplateParams, TemplateRenderer, PROJECT_NAME_PARAM};

/// Resources root the generated file lives under
pub const RESOURCES_DIR: &str = "src/main/resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamelContextInputs {
    /// Directory below the resources root; the flavor default when unset
    pub directory: Option<String>,
    pub name: String,
    /// Name of the project root directory, used as the context id
    pub project_name: String,
}

/// File the host should write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the resources root
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    /// Path relative to the project root
    pub fn project_path(&self) -> String {
        format!("{}/{}", RESOURCES_DIR, self.path)
    }
}

/// The command only applies to Blueprint and Spring projects
pub fn is_enabled(model: &PomModel) -> bool {
    detect_xml_flavor(model).is_some()
}

/// Directory offered to the user
///
/// The only directory already holding Camel XML wins over the flavor's
/// conventional directory.
pub fn default_directory(model: &PomModel, existing: &CamelXmlFiles) -> Option<String> {
    if existing.directories.len() == 1 {
        return existing.directories.iter().next().cloned();
    }
    detect_xml_flavor(model).map(|flavor| flavor.default_directory().to_string())
}

/// `directory/name.xml`, with `.xml` appended when missing
pub fn xml_file_name(directory: &str, name: &str) -> String {
    let name = name.trim();
    let name = if name.ends_with(".xml") {
        name.to_string()
    } else {
        format!("{}.xml", name)
    };
    let directory = directory.trim().trim_matches('/');
    if directory.is_empty() {
        name
    } else {
        format!("{}/{}", directory, name)
    }
}

/// Create a CamelContext XML file
///
/// `exists` tells whether a path below the resources root is already
/// taken. On success the returned [`GeneratedFile`] still has to be written
/// by the host, along with the model when the outcome says it changed.
pub fn new_camel_context_xml<E, R>(
    model: Option<&mut PomModel>,
    inputs: &CamelContextInputs,
    existing: &CamelXmlFiles,
    exists: E,
    renderer: &R,
) -> Result<(CommandOutcome, Option<GeneratedFile>)>
where
    E: Fn(&str) -> bool,
    R: TemplateRenderer + ?Sized,
{
    let Some(model) = model else {
        return Ok((CommandOutcome::failure(NO_POM_MESSAGE), None));
    };

    match run(model, inputs, existing, exists, renderer) {
        Ok((outcome, file)) => Ok((outcome, Some(file))),
        Err(err) => into_outcome(Err(err)).map(|outcome| (outcome, None)),
    }
}

fn run<E, R>(
    model: &mut PomModel,
    inputs: &CamelContextInputs,
    existing: &CamelXmlFiles,
    exists: E,
    renderer: &R,
) -> Result<(CommandOutcome, GeneratedFile)>
where
    E: Fn(&str) -> bool,
    R: TemplateRenderer + ?Sized,
{
    let flavor: XmlFlavor = detect_xml_flavor(model).ok_or_else(|| {
        ForgeError::validation("The project is neither a Camel Blueprint nor a Camel Spring project")
    })?;
    if inputs.name.trim().is_empty() {
        return Err(ForgeError::validation("A file name is required"));
    }

    let directory = inputs
        .directory
        .clone()
        .filter(|d| !d.trim().is_empty())
        .or_else(|| default_directory(model, existing))
        .unwrap_or_default();
    let path = xml_file_name(&directory, &inputs.name);
    let full_name = format!("{}/{}", RESOURCES_DIR, path);

    if exists(&path) {
        return Err(ForgeError::validation(format!("XML file {} already exists", full_name)));
    }

    let core_version = find_camel_core(model)
        .ok_or_else(|| ForgeError::validation("The project does not include camel-core"))?
        .version
        .clone();

    // a managed flavor artifact is left to dependencyManagement
    let changed = if model.has_managed_dependency(CAMEL_GROUP_ID, flavor.artifact_id()) {
        tracing::debug!("{} is managed; not adding it", flavor.artifact_id());
        false
    } else {
        let mut dependency = Dependency::new(CAMEL_GROUP_ID, flavor.artifact_id());
        dependency.version = core_version;
        upsert_dependency(model, dependency)
    };

    let params: TemplateParams = [(PROJECT_NAME_PARAM.to_string(), inputs.project_name.clone())]
        .into_iter()
        .collect();
    let content = renderer.render(flavor.template(), &params)?;
    tracing::debug!("Rendered {} for {}", flavor.template(), full_name);

    Ok((
        CommandOutcome::success(format!("Created new XML file {}", full_name), changed),
        GeneratedFile { path, content },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camel::{find_camel_xml_files, ResourceFile};
    use crate::commands::Status;
    use crate::templates::BuiltinTemplates;

    fn spring_project(with_core: bool) -> PomModel {
        let mut model = PomModel::new("orders");
        model
            .dependencies
            .push(Dependency::new("org.springframework", "spring-context"));
        if with_core {
            model
                .dependencies
                .push(Dependency::new(CAMEL_GROUP_ID, "camel-core").with_version("2.17.0"));
        }
        model
    }

    fn inputs(name: &str) -> CamelContextInputs {
        CamelContextInputs {
            directory: None,
            name: name.to_string(),
            project_name: "orders".to_string(),
        }
    }

    #[test]
    fn test_creates_spring_context() {
        let mut model = spring_project(true);
        let (outcome, file) = new_camel_context_xml(
            Some(&mut model),
            &inputs("camel-context"),
            &CamelXmlFiles::default(),
            |_| false,
            &BuiltinTemplates,
        )
        .unwrap();

        assert!(outcome.is_success());
        assert_eq!(
            outcome.message,
            "Created new XML file src/main/resources/META-INF/spring/camel-context.xml"
        );
        assert!(outcome.changed);
        let file = file.unwrap();
        assert_eq!(file.path, "META-INF/spring/camel-context.xml");
        assert!(file.content.contains(r#"id="orders""#));
        assert_eq!(
            model
                .find_dependency(CAMEL_GROUP_ID, "camel-spring")
                .and_then(|d| d.version.as_deref()),
            Some("2.17.0")
        );
    }

    #[test]
    fn test_existing_file_fails() {
        let mut model = spring_project(true);
        let (outcome, file) = new_camel_context_xml(
            Some(&mut model),
            &inputs("camel.xml"),
            &CamelXmlFiles::default(),
            |path| path == "META-INF/spring/camel.xml",
            &BuiltinTemplates,
        )
        .unwrap();

        assert_eq!(outcome.status, Status::Failure);
        assert_eq!(
            outcome.message,
            "XML file src/main/resources/META-INF/spring/camel.xml already exists"
        );
        assert!(file.is_none());
    }

    #[test]
    fn test_missing_camel_core_fails() {
        let mut model = spring_project(false);
        let (outcome, _) = new_camel_context_xml(
            Some(&mut model),
            &inputs("camel"),
            &CamelXmlFiles::default(),
            |_| false,
            &BuiltinTemplates,
        )
        .unwrap();
        assert_eq!(outcome.message, "The project does not include camel-core");
        assert!(!model.has_dependency(CAMEL_GROUP_ID, "camel-spring"));
    }

    #[test]
    fn test_managed_flavor_dependency_not_added() {
        let mut model = spring_project(true);
        model
            .dependency_management
            .push(Dependency::new(CAMEL_GROUP_ID, "camel-spring").with_version("2.17.0"));

        let (outcome, file) = new_camel_context_xml(
            Some(&mut model),
            &inputs("camel"),
            &CamelXmlFiles::default(),
            |_| false,
            &BuiltinTemplates,
        )
        .unwrap();

        assert!(outcome.is_success());
        assert!(!outcome.changed);
        assert!(file.is_some());
        assert!(!model.has_dependency(CAMEL_GROUP_ID, "camel-spring"));
    }

    #[test]
    fn test_single_existing_directory_is_default() {
        let files = vec![ResourceFile::new(
            "/p/src/main/resources/spring/routes.xml",
            r#"<beans><camelContext xmlns="http://camel.apache.org/schema/spring"/></beans>"#,
        )];
        let existing = find_camel_xml_files(&files, "/p/src/main/resources", |_| None);
        let model = spring_project(true);
        assert_eq!(default_directory(&model, &existing).as_deref(), Some("spring"));
    }

    #[test]
    fn test_blueprint_default_directory() {
        let mut model = PomModel::new("bundle");
        model.packaging = Some("bundle".to_string());
        assert!(is_enabled(&model));
        assert_eq!(
            default_directory(&model, &CamelXmlFiles::default()).as_deref(),
            Some("OSGI-INF/blueprint")
        );
        assert!(!is_enabled(&PomModel::new("plain")));
    }

    #[test]
    fn test_xml_file_name() {
        assert_eq!(xml_file_name("META-INF/spring/", "a"), "META-INF/spring/a.xml");
        assert_eq!(xml_file_name("", "a.xml"), "a.xml");
    }
}
