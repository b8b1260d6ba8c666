//! Docker base image choices and labels derived from image names

use crate::facts::{Packaging, ProjectFacts};

pub const DEFAULT_JAVA_IMAGE: &str = "fabric8/java-jboss-openjdk8-jdk:1.0.10";
pub const S2I_JAVA_IMAGE: &str = "fabric8/s2i-java:1.2";
pub const DEFAULT_KARAF_IMAGE: &str = "fabric8/karaf-2.4";
pub const DEFAULT_TOMCAT_IMAGE: &str = "fabric8/tomcat-8.0";
pub const DEFAULT_WILDFLY_IMAGE: &str = "jboss/wildfly:9.0.2.Final";

const JAR_IMAGES: [&str; 2] = [DEFAULT_JAVA_IMAGE, S2I_JAVA_IMAGE];
const WAR_IMAGES: [&str; 2] = [DEFAULT_TOMCAT_IMAGE, DEFAULT_WILDFLY_IMAGE];

/// Base images offered for the project, default first
///
/// An unknown packaging gets every family since nothing rules any out.
pub fn infer_base_image_choices(facts: &ProjectFacts) -> Vec<String> {
    let unknown = facts.packaging == Packaging::Unknown;
    let mut choices = Vec::new();

    if unknown || facts.has_spring_boot || facts.packaging == Packaging::Jar {
        match facts.docker_from_image() {
            Some(current) => choices.push(current.to_string()),
            None => choices.extend(JAR_IMAGES.iter().map(|s| s.to_string())),
        }
    }
    if unknown || facts.packaging == Packaging::Bundle {
        choices.push(DEFAULT_KARAF_IMAGE.to_string());
    }
    if !facts.has_spring_boot && (unknown || facts.packaging == Packaging::War) {
        choices.extend(WAR_IMAGES.iter().map(|s| s.to_string()));
    }

    choices
}

/// Short container label for an image: `fabric8/java-jboss-openjdk8-jdk:1.0`
/// becomes `java`
///
/// Drops everything through the last `/`, then cuts at the first `-`.
/// Input that would reduce to nothing is returned unchanged.
pub fn derive_container_label_from_image(image: &str) -> String {
    let name = match image.rfind('/') {
        Some(idx) if idx + 1 < image.len() => &image[idx + 1..],
        _ => image,
    };
    let label = match name.find('-') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    };
    label.to_string()
}

/// Whether the image runs a plain Java main class (as opposed to a
/// servlet or OSGi container), which is when a main class matters
pub fn is_jar_image(image: &str) -> bool {
    derive_container_label_from_image(image) == "java" || image.contains("s2i-java")
}
