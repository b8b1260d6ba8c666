//! What kind of Camel project we are looking at

use crate::facts::{CAMEL_GROUP_ID, SPRING_BOOT_GROUP_ID};
use crate::pom::{Dependency, PomModel};
use crate::templates::TemplateId;

pub const CAMEL_CORE_ARTIFACT_ID: &str = "camel-core";

/// XML DSL flavor used for CamelContext files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlFlavor {
    Blueprint,
    Spring,
}

impl XmlFlavor {
    /// Conventional directory below the resources root
    pub fn default_directory(&self) -> &'static str {
        match self {
            XmlFlavor::Blueprint => "OSGI-INF/blueprint",
            XmlFlavor::Spring => "META-INF/spring",
        }
    }

    /// Camel module providing the XML DSL
    pub fn artifact_id(&self) -> &'static str {
        match self {
            XmlFlavor::Blueprint => "camel-blueprint",
            XmlFlavor::Spring => "camel-spring",
        }
    }

    pub fn template(&self) -> TemplateId {
        match self {
            XmlFlavor::Blueprint => TemplateId::CamelBlueprint,
            XmlFlavor::Spring => TemplateId::CamelSpring,
        }
    }
}

pub fn is_blueprint_project(model: &PomModel) -> bool {
    model.packaging.as_deref() == Some("bundle")
        || model.has_dependency(CAMEL_GROUP_ID, XmlFlavor::Blueprint.artifact_id())
}

pub fn is_spring_project(model: &PomModel) -> bool {
    model.has_dependency(CAMEL_GROUP_ID, XmlFlavor::Spring.artifact_id())
        || model
            .dependencies
            .iter()
            .any(|d| d.group_id == SPRING_BOOT_GROUP_ID || d.group_id == "org.springframework")
}

/// Blueprint wins when a project looks like both
pub fn detect_xml_flavor(model: &PomModel) -> Option<XmlFlavor> {
    if is_blueprint_project(model) {
        Some(XmlFlavor::Blueprint)
    } else if is_spring_project(model) {
        Some(XmlFlavor::Spring)
    } else {
        None
    }
}

pub fn find_camel_core(model: &PomModel) -> Option<&Dependency> {
    model.find_dependency(CAMEL_GROUP_ID, CAMEL_CORE_ARTIFACT_ID)
}

/// All org.apache.camel dependencies of the project
pub fn camel_artifacts(model: &PomModel) -> impl Iterator<Item = &Dependency> {
    model
        .dependencies
        .iter()
        .filter(|d| d.group_id == CAMEL_GROUP_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_detection() {
        let mut model = PomModel::new("demo");
        assert_eq!(detect_xml_flavor(&model), None);

        model
            .dependencies
            .push(Dependency::new("org.springframework", "spring-context"));
        assert_eq!(detect_xml_flavor(&model), Some(XmlFlavor::Spring));

        model.packaging = Some("bundle".to_string());
        assert_eq!(detect_xml_flavor(&model), Some(XmlFlavor::Blueprint));
    }

    #[test]
    fn test_flavor_layout() {
        assert_eq!(XmlFlavor::Blueprint.default_directory(), "OSGI-INF/blueprint");
        assert_eq!(XmlFlavor::Spring.default_directory(), "META-INF/spring");
        assert_eq!(XmlFlavor::Spring.artifact_id(), "camel-spring");
    }

    #[test]
    fn test_camel_core_lookup() {
        let mut model = PomModel::new("demo");
        assert!(find_camel_core(&model).is_none());
        model
            .dependencies
            .push(Dependency::new(CAMEL_GROUP_ID, "camel-core").with_version("2.17.0"));
        model
            .dependencies
            .push(Dependency::new("junit", "junit"));
        assert_eq!(
            find_camel_core(&model).and_then(|d| d.version.as_deref()),
            Some("2.17.0")
        );
        assert_eq!(camel_artifacts(&model).count(), 1);
    }
}
