//! fabric8-maven-plugin and the `fabric8.*` properties it turns into
//! Kubernetes metadata

use super::{merge::upsert_plugin, merge::upsert_property, Execution, Plugin, PomModel};
use crate::config::Settings;
use crate::error::Result;
use crate::facts::ProjectFacts;
use crate::inference::{canonicalize_service_name, icon_ref, infer_service_port, readiness_probe_path};

pub const FABRIC8_PLUGIN_GROUP_ID: &str = "io.fabric8";
pub const FABRIC8_PLUGIN_ARTIFACT_ID: &str = "fabric8-maven-plugin";

pub const SERVICE_PORT: &str = "80";
pub const SERVICE_TYPE: &str = "LoadBalancer";
pub const READINESS_TIMEOUT_SECONDS: &str = "30";
pub const READINESS_INITIAL_DELAY_SECONDS: &str = "5";

/// Add the fabric8-maven-plugin unless the POM already has one; an existing
/// declaration is left as-is
pub fn setup_fabric8_plugin(model: &mut PomModel, settings: &Settings) -> bool {
    let plugin = Plugin {
        version: Some(settings.version_of(
            FABRIC8_PLUGIN_GROUP_ID,
            FABRIC8_PLUGIN_ARTIFACT_ID,
            &settings.fabric8_version,
        )),
        executions: vec![
            Execution::new("json", "generate-resources", "json"),
            Execution::new("attach", "package", "attach"),
        ],
        ..Plugin::new(FABRIC8_PLUGIN_GROUP_ID, FABRIC8_PLUGIN_ARTIFACT_ID)
    };
    upsert_plugin(model.build_mut(), plugin)
}

/// What the user chose for the fabric8 properties
#[derive(Debug, Clone, Copy, Default)]
pub struct Fabric8Inputs<'a> {
    pub container: Option<&'a str>,
    pub group: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub service: bool,
    pub readiness_probe: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesOutcome {
    pub changed: bool,
    pub warnings: Vec<String>,
}

/// Write the `fabric8.*` labels, service and readiness probe properties
///
/// Service and readiness properties need a service port; without one they
/// are skipped. The service name is the artifactId clipped to the
/// Kubernetes limit.
pub fn setup_fabric8_properties(
    model: &mut PomModel,
    facts: &ProjectFacts,
    inputs: &Fabric8Inputs<'_>,
) -> Result<PropertiesOutcome> {
    let mut warnings = Vec::new();
    let service_port = infer_service_port(facts);
    let artifact_id = model.artifact_id.clone();
    let props = &mut model.properties;

    let mut updated = false;
    updated = upsert_property(props, "fabric8.label.container", inputs.container, updated)?;
    if let Some(icon) = inputs.icon.filter(|i| !i.trim().is_empty()) {
        updated = upsert_property(props, "fabric8.iconRef", Some(&icon_ref(icon)), updated)?;
    }
    updated = upsert_property(props, "fabric8.label.group", inputs.group, updated)?;

    if let Some(port) = service_port.as_deref() {
        if inputs.service {
            let name = canonicalize_service_name(&artifact_id);
            warnings.extend(name.warning);
            updated = upsert_property(props, "fabric8.service.containerPort", Some(port), updated)?;
            updated = upsert_property(props, "fabric8.service.port", Some(SERVICE_PORT), updated)?;
            updated = upsert_property(props, "fabric8.service.name", Some(&name.name), updated)?;
            updated = upsert_property(props, "fabric8.service.type", Some(SERVICE_TYPE), updated)?;
        }

        if inputs.readiness_probe {
            let path = readiness_probe_path(facts);
            updated = upsert_property(props, "fabric8.readinessProbe.httpGet.port", Some(port), updated)?;
            updated = upsert_property(props, "fabric8.readinessProbe.httpGet.path", Some(path), updated)?;
            updated = upsert_property(
                props,
                "fabric8.readinessProbe.timeoutSeconds",
                Some(READINESS_TIMEOUT_SECONDS),
                updated,
            )?;
            updated = upsert_property(
                props,
                "fabric8.readinessProbe.initialDelaySeconds",
                Some(READINESS_INITIAL_DELAY_SECONDS),
                updated,
            )?;
        }
    } else if inputs.service || inputs.readiness_probe {
        tracing::debug!("No service port could be inferred; skipping service and readiness probe");
    }

    Ok(PropertiesOutcome {
        changed: updated,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::Dependency;

    fn spring_boot_web() -> PomModel {
        let mut model = PomModel::new("a-really-long-spring-boot-service");
        model.packaging = Some("jar".to_string());
        model
            .dependencies
            .push(Dependency::new("org.springframework.boot", "spring-boot-starter-web"));
        model
    }

    fn all_on<'a>() -> Fabric8Inputs<'a> {
        Fabric8Inputs {
            container: Some("java"),
            group: Some("shop"),
            icon: Some("spring-boot"),
            service: true,
            readiness_probe: true,
        }
    }

    #[test]
    fn test_spring_boot_properties() {
        let mut model = spring_boot_web();
        let facts = ProjectFacts::collect(&model);
        let outcome = setup_fabric8_properties(&mut model, &facts, &all_on()).unwrap();

        assert!(outcome.changed);
        assert_eq!(outcome.warnings.len(), 1);

        let props = &model.properties;
        assert_eq!(props.get("fabric8.label.container"), Some("java"));
        assert_eq!(props.get("fabric8.iconRef"), Some("icons/spring-boot"));
        assert_eq!(props.get("fabric8.label.group"), Some("shop"));
        assert_eq!(props.get("fabric8.service.containerPort"), Some("8080"));
        assert_eq!(props.get("fabric8.service.port"), Some("80"));
        assert_eq!(props.get("fabric8.service.name"), Some("a-really-long-spring-boo"));
        assert_eq!(props.get("fabric8.service.type"), Some("LoadBalancer"));
        assert_eq!(props.get("fabric8.readinessProbe.httpGet.port"), Some("8080"));
        assert_eq!(props.get("fabric8.readinessProbe.httpGet.path"), Some("/health"));
        assert_eq!(props.get("fabric8.readinessProbe.timeoutSeconds"), Some("30"));
        assert_eq!(props.get("fabric8.readinessProbe.initialDelaySeconds"), Some("5"));

        let again = setup_fabric8_properties(&mut model, &facts, &all_on()).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn test_no_port_skips_service_and_probe() {
        let mut model = PomModel::new("batch");
        model.packaging = Some("jar".to_string());
        let facts = ProjectFacts::collect(&model);
        let outcome = setup_fabric8_properties(&mut model, &facts, &all_on()).unwrap();

        assert!(outcome.changed);
        assert!(!model.properties.contains_key("fabric8.service.name"));
        assert!(!model
            .properties
            .contains_key("fabric8.readinessProbe.httpGet.port"));
    }

    #[test]
    fn test_war_readiness_path_is_root() {
        let mut model = PomModel::new("web");
        model.packaging = Some("war".to_string());
        let facts = ProjectFacts::collect(&model);
        let inputs = Fabric8Inputs {
            readiness_probe: true,
            ..Default::default()
        };
        setup_fabric8_properties(&mut model, &facts, &inputs).unwrap();
        assert_eq!(
            model.properties.get("fabric8.readinessProbe.httpGet.path"),
            Some("/")
        );
        assert!(!model.properties.contains_key("fabric8.service.port"));
    }

    #[test]
    fn test_fabric8_plugin_added_once() {
        let mut model = PomModel::new("app");
        assert!(setup_fabric8_plugin(&mut model, &Settings::default()));
        let plugin = model
            .find_plugin(FABRIC8_PLUGIN_GROUP_ID, FABRIC8_PLUGIN_ARTIFACT_ID)
            .unwrap();
        assert_eq!(plugin.executions.len(), 2);
        assert_eq!(plugin.executions[1].phase.as_deref(), Some("package"));
        assert!(!setup_fabric8_plugin(&mut model, &Settings::default()));
    }
}
