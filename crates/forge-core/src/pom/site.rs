//! Site publishing support: webdav wagon, javadoc report, site distribution

use super::{
    merge::{upsert_extension, upsert_report_plugin, upsert_site_distribution},
    ConfigElement, DistributionManagement, Extension, PomModel, ReportPlugin,
};
use crate::config::Settings;

pub const EXTENSION_DAV_GROUP_ID: &str = "org.apache.maven.wagon";
pub const EXTENSION_DAV_ARTIFACT_ID: &str = "wagon-webdav-jackrabbit";
const EXTENSION_DAV_VERSION: &str = "2.10";

pub const PLUGIN_JAVADOC_GROUP_ID: &str = "org.apache.maven.plugins";
pub const PLUGIN_JAVADOC_ARTIFACT_ID: &str = "maven-javadoc-plugin";
const PLUGIN_JAVADOC_VERSION: &str = "2.10.3";

pub const SITE_ID: &str = "website";
pub const SITE_URL: &str =
    "dav:http://content-repository/sites/${project.groupId}/${project.artifactId}/${project.version}";

/// Ensure the POM can publish a site; returns whether anything changed
///
/// A distributionManagement section is only created for POMs without a
/// parent, since it normally lives once in a shared parent POM.
pub fn setup_site(model: &mut PomModel, settings: &Settings) -> bool {
    let mut changed = upsert_extension(
        model.build_mut(),
        Extension {
            group_id: EXTENSION_DAV_GROUP_ID.to_string(),
            artifact_id: EXTENSION_DAV_ARTIFACT_ID.to_string(),
            version: Some(settings.version_of(
                EXTENSION_DAV_GROUP_ID,
                EXTENSION_DAV_ARTIFACT_ID,
                EXTENSION_DAV_VERSION,
            )),
        },
    );

    let javadoc = ReportPlugin {
        group_id: PLUGIN_JAVADOC_GROUP_ID.to_string(),
        artifact_id: PLUGIN_JAVADOC_ARTIFACT_ID.to_string(),
        version: Some(settings.version_of(
            PLUGIN_JAVADOC_GROUP_ID,
            PLUGIN_JAVADOC_ARTIFACT_ID,
            PLUGIN_JAVADOC_VERSION,
        )),
        configuration: Some(
            ConfigElement::new("configuration")
                .add_child(ConfigElement::with_value("detectLinks", "true"))
                .add_child(ConfigElement::with_value("detectJavaApiLink", "true"))
                .add_child(ConfigElement::with_value("linksource", "true")),
        ),
    };
    changed |= upsert_report_plugin(model.reporting_mut(), javadoc);

    if model.distribution_management.is_none() && model.parent.is_none() {
        model.distribution_management = Some(DistributionManagement::default());
    }
    if let Some(distribution) = model.distribution_management.as_mut() {
        changed |= upsert_site_distribution(distribution, SITE_ID, SITE_URL);
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::Parent;

    #[test]
    fn test_setup_site_on_bare_pom() {
        let mut model = PomModel::new("demo");
        assert!(setup_site(&mut model, &Settings::default()));

        let build = model.build.as_ref().unwrap();
        assert_eq!(build.extensions[0].artifact_id, EXTENSION_DAV_ARTIFACT_ID);
        assert_eq!(build.extensions[0].version.as_deref(), Some("2.10"));

        let report = &model.reporting.as_ref().unwrap().plugins[0];
        let config = report.configuration.as_ref().unwrap();
        assert_eq!(config.children.len(), 3);
        assert_eq!(
            config.child("linksource").and_then(|c| c.value.as_deref()),
            Some("true")
        );

        let site = model
            .distribution_management
            .as_ref()
            .and_then(|d| d.site.as_ref())
            .unwrap();
        assert_eq!(site.id.as_deref(), Some(SITE_ID));
        assert_eq!(site.url.as_deref(), Some(SITE_URL));

        // second run is a no-op
        assert!(!setup_site(&mut model, &Settings::default()));
    }

    #[test]
    fn test_no_distribution_for_child_pom() {
        let mut model = PomModel::new("demo");
        model.parent = Some(Parent {
            group_id: "io.fabric8".into(),
            artifact_id: "parent".into(),
            version: None,
        });
        assert!(setup_site(&mut model, &Settings::default()));
        assert!(model.distribution_management.is_none());
    }
}
