//! Project facts: the read-only view of a project that inference works on
//!
//! The host owns the project descriptor and exposes it through
//! [`FactsProvider`]. [`ProjectFacts`] is an immutable snapshot taken once
//! per command invocation.

use crate::pom::{Coordinate, PomModel, PomProperties};
use std::collections::BTreeSet;
use std::fmt;

pub const SPRING_BOOT_GROUP_ID: &str = "org.springframework.boot";
pub const SPRING_BOOT_WEB_ARTIFACT_ID: &str = "spring-boot-starter-web";
pub const SPRING_BOOT_PLUGIN_ARTIFACT_ID: &str = "spring-boot-maven-plugin";
pub const WILDFLY_SWARM_GROUP_ID: &str = "org.wildfly.swarm";
pub const WILDFLY_SWARM_PLUGIN_ARTIFACT_ID: &str = "wildfly-swarm-plugin";
pub const CAMEL_GROUP_ID: &str = "org.apache.camel";
pub const VERTX_GROUP_ID: &str = "io.vertx";

/// Maven packaging types that influence defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packaging {
    Jar,
    War,
    Ear,
    Bundle,
    /// Missing or any packaging not listed above
    Unknown,
}

impl Packaging {
    pub fn parse(packaging: Option<&str>) -> Self {
        match packaging.map(str::trim) {
            Some("jar") => Packaging::Jar,
            Some("war") => Packaging::War,
            Some("ear") => Packaging::Ear,
            Some("bundle") => Packaging::Bundle,
            _ => Packaging::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Packaging::Jar => "jar",
            Packaging::War => "war",
            Packaging::Ear => "ear",
            Packaging::Bundle => "bundle",
            Packaging::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the host's project descriptor
///
/// Hosts that keep their own project model implement this; the in-memory
/// [`PomModel`] implements it for the CLI and for tests.
pub trait FactsProvider {
    /// Raw `<packaging>` value, if declared
    fn packaging(&self) -> Option<&str>;

    fn artifact_id(&self) -> &str;

    fn properties(&self) -> &PomProperties;

    fn dependencies(&self) -> Vec<Coordinate>;

    fn plugins(&self) -> Vec<Coordinate>;

    fn profile_ids(&self) -> Vec<String>;

    /// `swarm.http.port` from the wildfly-swarm-plugin configuration
    fn swarm_http_port(&self) -> Option<String>;
}

impl FactsProvider for PomModel {
    fn packaging(&self) -> Option<&str> {
        self.packaging.as_deref()
    }

    fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    fn properties(&self) -> &PomProperties {
        &self.properties
    }

    fn dependencies(&self) -> Vec<Coordinate> {
        self.dependencies.iter().map(|d| d.coordinate()).collect()
    }

    fn plugins(&self) -> Vec<Coordinate> {
        self.build
            .iter()
            .flat_map(|b| b.plugins.iter().map(|p| p.coordinate()))
            .collect()
    }

    fn profile_ids(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.id.clone()).collect()
    }

    fn swarm_http_port(&self) -> Option<String> {
        self.find_plugin(WILDFLY_SWARM_GROUP_ID, WILDFLY_SWARM_PLUGIN_ARTIFACT_ID)?
            .config_path(&["properties", "swarm.http.port"])?
            .value
            .clone()
    }
}

/// Immutable snapshot of everything default inference looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFacts {
    pub packaging: Packaging,
    pub artifact_id: String,
    pub has_spring_boot: bool,
    pub has_spring_boot_web: bool,
    pub has_wildfly_swarm: bool,
    pub has_camel: bool,
    pub has_vertx: bool,
    pub swarm_http_port: Option<String>,
    pub existing_properties: PomProperties,
    pub existing_profiles: BTreeSet<String>,
    pub existing_plugins: BTreeSet<Coordinate>,
    pub existing_dependencies: BTreeSet<Coordinate>,
}

impl ProjectFacts {
    pub fn collect<P: FactsProvider + ?Sized>(provider: &P) -> Self {
        let dependencies: BTreeSet<Coordinate> = provider.dependencies().into_iter().collect();
        let plugins: BTreeSet<Coordinate> = provider.plugins().into_iter().collect();

        let depends_on_group = |group: &str| dependencies.iter().any(|d| d.group_id == group);
        let has_plugin = |group: &str, artifact: &str| plugins.iter().any(|p| p.matches(group, artifact));

        let has_spring_boot = depends_on_group(SPRING_BOOT_GROUP_ID)
            || has_plugin(SPRING_BOOT_GROUP_ID, SPRING_BOOT_PLUGIN_ARTIFACT_ID);
        let has_spring_boot_web = dependencies
            .iter()
            .any(|d| d.matches(SPRING_BOOT_GROUP_ID, SPRING_BOOT_WEB_ARTIFACT_ID));
        let has_wildfly_swarm = depends_on_group(WILDFLY_SWARM_GROUP_ID)
            || has_plugin(WILDFLY_SWARM_GROUP_ID, WILDFLY_SWARM_PLUGIN_ARTIFACT_ID);

        Self {
            packaging: Packaging::parse(provider.packaging()),
            artifact_id: provider.artifact_id().to_string(),
            has_spring_boot,
            has_spring_boot_web,
            has_wildfly_swarm,
            has_camel: depends_on_group(CAMEL_GROUP_ID),
            has_vertx: depends_on_group(VERTX_GROUP_ID),
            swarm_http_port: provider.swarm_http_port(),
            existing_properties: provider.properties().clone(),
            existing_profiles: provider.profile_ids().into_iter().collect(),
            existing_plugins: plugins,
            existing_dependencies: dependencies,
        }
    }

    /// Base image already configured via the `docker.from` property
    pub fn docker_from_image(&self) -> Option<&str> {
        self.existing_properties.get_non_blank("docker.from")
    }
}
