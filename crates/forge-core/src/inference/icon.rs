//! Console icon selection

use crate::facts::ProjectFacts;

/// Icons the fabric8 console ships, in display order
pub const ICON_CHOICES: [&str; 12] = [
    "activemq",
    "camel",
    "java",
    "jetty",
    "karaf",
    "mule",
    "spring-boot",
    "tomcat",
    "tomee",
    "vertx",
    "weld",
    "wildfly",
];

pub const DEFAULT_ICON: &str = "java";

/// Pick the icon for the app
///
/// Camel wins over the runtime, then popular runtimes, then an icon named
/// like the chosen container label, then plain java.
pub fn infer_default_icon(facts: &ProjectFacts, container: Option<&str>) -> &'static str {
    if facts.has_camel {
        return "camel";
    }
    if facts.has_spring_boot {
        return "spring-boot";
    }
    if facts.has_vertx {
        return "vertx";
    }
    if let Some(container) = container {
        if let Some(icon) = ICON_CHOICES.iter().copied().find(|icon| *icon == container) {
            return icon;
        }
    }
    DEFAULT_ICON
}

/// `fabric8.iconRef` value for an icon name
pub fn icon_ref(icon: &str) -> String {
    format!("icons/{}", icon)
}
