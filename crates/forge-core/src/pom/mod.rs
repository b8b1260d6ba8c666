//! In-memory Maven project object model
//!
//! This is not a POM parser: the host supplies (and persists) the model.
//! The types carry just the parts of a POM that project setup reads or
//! writes, and serialize to YAML so a snapshot can round trip through the
//! CLI.
//!
//! - [`properties`]: the ordered `<properties>` map
//! - [`merge`]: find-or-create upserts that report whether anything changed
//! - [`profiles`]: the fixed `f8-*` automation profiles
//! - [`site`]: site extension, javadoc reporting and site distribution
//! - [`docker`]: docker-maven-plugin and `docker.*` properties
//! - [`fabric8`]: fabric8-maven-plugin and `fabric8.*` properties

pub mod docker;
pub mod fabric8;
pub mod merge;
pub mod profiles;
pub mod properties;
pub mod site;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use merge::{
    check_profile_ids, upsert_dependency, upsert_extension, upsert_plugin, upsert_profile,
    upsert_property, upsert_report_plugin, upsert_site_distribution,
};
pub use docker::{setup_docker, DockerInputs};
pub use fabric8::{setup_fabric8_plugin, setup_fabric8_properties, Fabric8Inputs, PropertiesOutcome};
pub use properties::PomProperties;

/// Maven `groupId:artifactId` pair used as the identity of plugins,
/// extensions and dependencies
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }

    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id == group_id && self.artifact_id == artifact_id
    }
}

/// A node of a plugin `<configuration>` tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigElement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ConfigElement>,
}

impl ConfigElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&ConfigElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn add_child(mut self, child: ConfigElement) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Execution {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    pub goals: Vec<String>,
}

impl Execution {
    pub fn new(id: &str, phase: &str, goal: &str) -> Self {
        Self {
            id: id.to_string(),
            phase: Some(phase.to_string()),
            goals: vec![goal.to_string()],
        }
    }
}

/// A `<build><plugins>` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<Execution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigElement>,
}

impl Plugin {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }

    /// Look up `<configuration><a><b>...` by element names
    pub fn config_path(&self, path: &[&str]) -> Option<&ConfigElement> {
        let mut node = self.configuration.as_ref()?;
        for name in path {
            node = node.child(name)?;
        }
        Some(node)
    }
}

/// A `<build><extensions>` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extension {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A `<reporting><plugins>` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportPlugin {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reporting {
    pub plugins: Vec<ReportPlugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionManagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_goal: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
}

/// A `<profiles>` entry; identity is the `id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    #[serde(skip_serializing_if = "PomProperties::is_empty")]
    pub properties: PomProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
}

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn build_default_goal(&self) -> Option<&str> {
        self.build.as_ref()?.default_goal.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The project descriptor handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(skip_serializing_if = "PomProperties::is_empty")]
    pub properties: PomProperties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_management: Vec<Dependency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Reporting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_management: Option<DistributionManagement>,
}

impl PomModel {
    pub fn new(artifact_id: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn find_plugin(&self, group_id: &str, artifact_id: &str) -> Option<&Plugin> {
        self.build
            .as_ref()?
            .plugins
            .iter()
            .find(|p| p.group_id == group_id && p.artifact_id == artifact_id)
    }

    pub fn find_profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn find_dependency(&self, group_id: &str, artifact_id: &str) -> Option<&Dependency> {
        self.dependencies
            .iter()
            .find(|d| d.matches(group_id, artifact_id))
    }

    pub fn has_dependency(&self, group_id: &str, artifact_id: &str) -> bool {
        self.find_dependency(group_id, artifact_id).is_some()
    }

    pub fn has_managed_dependency(&self, group_id: &str, artifact_id: &str) -> bool {
        self.dependency_management
            .iter()
            .any(|d| d.matches(group_id, artifact_id))
    }

    /// `<build>`, created empty when the POM has none
    pub fn build_mut(&mut self) -> &mut Build {
        self.build.get_or_insert_with(Build::default)
    }

    /// `<reporting>`, created empty when the POM has none
    pub fn reporting_mut(&mut self) -> &mut Reporting {
        self.reporting.get_or_insert_with(Reporting::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_config_path() {
        let plugin = Plugin {
            configuration: Some(
                ConfigElement::new("configuration").add_child(
                    ConfigElement::new("properties")
                        .add_child(ConfigElement::with_value("swarm.http.port", "8181")),
                ),
            ),
            ..Plugin::new("org.wildfly.swarm", "wildfly-swarm-plugin")
        };

        let port = plugin.config_path(&["properties", "swarm.http.port"]);
        assert_eq!(port.and_then(|e| e.value.as_deref()), Some("8181"));
        assert!(plugin.config_path(&["properties", "missing"]).is_none());
    }

    #[test]
    fn test_model_yaml_uses_maven_names() {
        let yaml = r#"
artifactId: demo
packaging: war
dependencies:
  - groupId: org.apache.camel
    artifactId: camel-core
    version: 2.17.0
properties:
  b.key: "2"
  a.key: "1"
"#;
        let model: PomModel = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(model.packaging.as_deref(), Some("war"));
        assert!(model.has_dependency("org.apache.camel", "camel-core"));
        let keys: Vec<_> = model.properties.keys().collect();
        assert_eq!(keys, vec!["b.key", "a.key"]);

        let out = serde_yaml::to_string(&model).unwrap();
        assert!(out.contains("artifactId: camel-core"));
        assert!(!out.contains("profiles"));
    }

    #[test]
    fn test_build_mut_creates_build() {
        let mut model = PomModel::new("demo");
        assert!(model.build.is_none());
        model.build_mut().default_goal = Some("install".to_string());
        assert_eq!(
            model.build.as_ref().and_then(|b| b.default_goal.as_deref()),
            Some("install")
        );
    }
}
