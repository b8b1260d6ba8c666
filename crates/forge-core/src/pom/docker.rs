//! docker-maven-plugin wiring

use super::{merge::upsert_plugin, merge::upsert_property, Plugin, PomModel};
use crate::config::Settings;
use crate::error::Result;
use crate::inference::is_jar_image;

pub const DOCKER_PLUGIN_GROUP_ID: &str = "io.fabric8";
pub const DOCKER_PLUGIN_ARTIFACT_ID: &str = "docker-maven-plugin";
const DOCKER_PLUGIN_VERSION: &str = "0.14.2";

/// Inputs for the docker build of the project
#[derive(Debug, Clone, Copy)]
pub struct DockerInputs<'a> {
    pub organization: &'a str,
    pub from: &'a str,
    pub main_class: Option<&'a str>,
}

/// Add the docker-maven-plugin and the `docker.*` properties it reads
///
/// `docker.env.MAIN` is only set for Java main class images; servlet and
/// OSGi containers start their own main.
pub fn setup_docker(model: &mut PomModel, inputs: &DockerInputs<'_>, settings: &Settings) -> Result<bool> {
    let mut plugin = Plugin::new(DOCKER_PLUGIN_GROUP_ID, DOCKER_PLUGIN_ARTIFACT_ID);
    plugin.version = Some(settings.version_of(
        DOCKER_PLUGIN_GROUP_ID,
        DOCKER_PLUGIN_ARTIFACT_ID,
        DOCKER_PLUGIN_VERSION,
    ));
    let mut changed = upsert_plugin(model.build_mut(), plugin);

    let image = format!(
        "{}/${{project.artifactId}}:${{project.version}}",
        inputs.organization.trim()
    );
    let props = &mut model.properties;
    changed = upsert_property(props, "docker.from", Some(inputs.from), changed)?;
    changed = upsert_property(props, "docker.image", Some(&image), changed)?;
    if is_jar_image(inputs.from) {
        changed = upsert_property(props, "docker.env.MAIN", inputs.main_class, changed)?;
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::image::{DEFAULT_JAVA_IMAGE, DEFAULT_TOMCAT_IMAGE};

    #[test]
    fn test_jar_image_sets_main() {
        let mut model = PomModel::new("app");
        let inputs = DockerInputs {
            organization: "fabric8",
            from: DEFAULT_JAVA_IMAGE,
            main_class: Some("com.acme.Main"),
        };
        assert!(setup_docker(&mut model, &inputs, &Settings::default()).unwrap());
        assert_eq!(model.properties.get("docker.from"), Some(DEFAULT_JAVA_IMAGE));
        assert_eq!(
            model.properties.get("docker.image"),
            Some("fabric8/${project.artifactId}:${project.version}")
        );
        assert_eq!(model.properties.get("docker.env.MAIN"), Some("com.acme.Main"));
        assert!(model
            .find_plugin(DOCKER_PLUGIN_GROUP_ID, DOCKER_PLUGIN_ARTIFACT_ID)
            .is_some());

        assert!(!setup_docker(&mut model, &inputs, &Settings::default()).unwrap());
    }

    #[test]
    fn test_servlet_image_skips_main() {
        let mut model = PomModel::new("web");
        let inputs = DockerInputs {
            organization: "acme",
            from: DEFAULT_TOMCAT_IMAGE,
            main_class: Some("com.acme.Main"),
        };
        setup_docker(&mut model, &inputs, &Settings::default()).unwrap();
        assert!(!model.properties.contains_key("docker.env.MAIN"));
    }
}
