//! Camel component catalog seam
//!
//! The real catalog ships with Camel itself; the host supplies it through
//! [`CamelCatalog`]. [`StaticCatalog`] is a YAML-backed stand-in.

use super::project::{camel_artifacts, find_camel_core};
use crate::error::Result;
use crate::pom::PomModel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Language,
    DataFormat,
}

impl ComponentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Language => "language",
            ComponentKind::DataFormat => "data format",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub artifact_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub trait CamelCatalog {
    fn entries(&self, kind: ComponentKind) -> Vec<CatalogEntry>;

    fn find(&self, kind: ComponentKind, name: &str) -> Option<CatalogEntry> {
        self.entries(kind).into_iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticCatalog {
    pub languages: Vec<CatalogEntry>,
    pub data_formats: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl CamelCatalog for StaticCatalog {
    fn entries(&self, kind: ComponentKind) -> Vec<CatalogEntry> {
        match kind {
            ComponentKind::Language => self.languages.clone(),
            ComponentKind::DataFormat => self.data_formats.clone(),
        }
    }
}

/// Catalog entries the project does not have yet
///
/// Empty when the project has no camel-core, since there is no Camel
/// version to align with.
pub fn available_components<C: CamelCatalog + ?Sized>(
    model: &PomModel,
    catalog: &C,
    kind: ComponentKind,
) -> Vec<CatalogEntry> {
    if find_camel_core(model).is_none() {
        return Vec::new();
    }
    let present: Vec<&str> = camel_artifacts(model)
        .map(|d| d.artifact_id.as_str())
        .collect();
    catalog
        .entries(kind)
        .into_iter()
        .filter(|e| !present.contains(&e.artifact_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::Dependency;

    const CATALOG: &str = r#"
languages:
  - name: simple
    artifactId: camel-core
  - name: groovy
    artifactId: camel-groovy
    description: Groovy scripting
  - name: xpath
    artifactId: camel-core
dataFormats:
  - name: json-jackson
    artifactId: camel-jackson
"#;

    #[test]
    fn test_filters_present_artifacts() {
        let catalog = StaticCatalog::from_yaml(CATALOG).unwrap();
        let mut model = PomModel::new("demo");
        model
            .dependencies
            .push(Dependency::new("org.apache.camel", "camel-core").with_version("2.17.0"));

        let names: Vec<_> = available_components(&model, &catalog, ComponentKind::Language)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["groovy"]);

        let formats = available_components(&model, &catalog, ComponentKind::DataFormat);
        assert_eq!(formats.len(), 1);
    }

    #[test]
    fn test_nothing_without_camel_core() {
        let catalog = StaticCatalog::from_yaml(CATALOG).unwrap();
        let model = PomModel::new("demo");
        assert!(available_components(&model, &catalog, ComponentKind::Language).is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = StaticCatalog::from_yaml(CATALOG).unwrap();
        let groovy = catalog.find(ComponentKind::Language, "groovy").unwrap();
        assert_eq!(groovy.description.as_deref(), Some("Groovy scripting"));
        assert!(catalog.find(ComponentKind::DataFormat, "groovy").is_none());
    }
}
