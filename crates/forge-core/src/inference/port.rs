//! Service port and readiness probe defaults

use crate::facts::{Packaging, ProjectFacts};

pub const DEFAULT_HTTP_PORT: &str = "8080";

/// Guess the port the container serves HTTP on
///
/// A WAR, EAR or Spring Boot web app is assumed to listen on 8080. Karaf
/// bundles get no default: web support is not installed there by default,
/// so there is nothing to point a service at.
pub fn infer_service_port(facts: &ProjectFacts) -> Option<String> {
    if facts.has_wildfly_swarm {
        if let Some(port) = facts
            .swarm_http_port
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            return Some(port.to_string());
        }
    }

    if matches!(facts.packaging, Packaging::War | Packaging::Ear) {
        return Some(DEFAULT_HTTP_PORT.to_string());
    }

    if facts.has_spring_boot_web {
        return Some(DEFAULT_HTTP_PORT.to_string());
    }

    None
}

/// HTTP path for the readiness probe; Spring Boot exposes `/health` through
/// the actuator
pub fn readiness_probe_path(facts: &ProjectFacts) -> &'static str {
    if facts.has_spring_boot {
        "/health"
    } else {
        "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::PomModel;

    fn facts(packaging: Packaging) -> ProjectFacts {
        let mut facts = ProjectFacts::collect(&PomModel::new("demo"));
        facts.packaging = packaging;
        facts
    }

    #[test]
    fn test_war_and_ear_default_to_8080() {
        assert_eq!(infer_service_port(&facts(Packaging::War)).as_deref(), Some("8080"));
        assert_eq!(infer_service_port(&facts(Packaging::Ear)).as_deref(), Some("8080"));
    }

    #[test]
    fn test_war_ignores_other_flags() {
        let mut f = facts(Packaging::War);
        f.has_spring_boot = true;
        f.has_spring_boot_web = false;
        f.has_wildfly_swarm = true;
        assert_eq!(infer_service_port(&f).as_deref(), Some("8080"));
    }

    #[test]
    fn test_swarm_port_wins_over_packaging() {
        let mut f = facts(Packaging::War);
        f.has_wildfly_swarm = true;
        f.swarm_http_port = Some("9090".to_string());
        assert_eq!(infer_service_port(&f).as_deref(), Some("9090"));
    }

    #[test]
    fn test_blank_swarm_port_falls_through() {
        let mut f = facts(Packaging::Jar);
        f.has_wildfly_swarm = true;
        f.swarm_http_port = Some("  ".to_string());
        assert_eq!(infer_service_port(&f), None);
    }

    #[test]
    fn test_swarm_port_ignored_without_swarm() {
        let mut f = facts(Packaging::Jar);
        f.swarm_http_port = Some("9090".to_string());
        assert_eq!(infer_service_port(&f), None);
    }

    #[test]
    fn test_spring_boot_web_jar() {
        let mut f = facts(Packaging::Jar);
        f.has_spring_boot_web = true;
        assert_eq!(infer_service_port(&f).as_deref(), Some("8080"));
    }

    #[test]
    fn test_plain_jar_and_bundle_have_no_port() {
        assert_eq!(infer_service_port(&facts(Packaging::Jar)), None);
        assert_eq!(infer_service_port(&facts(Packaging::Bundle)), None);
        assert_eq!(infer_service_port(&facts(Packaging::Unknown)), None);
    }

    #[test]
    fn test_readiness_path() {
        let mut f = facts(Packaging::Jar);
        assert_eq!(readiness_probe_path(&f), "/");
        f.has_spring_boot = true;
        assert_eq!(readiness_probe_path(&f), "/health");
    }
}
