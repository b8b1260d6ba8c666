//! Kubernetes resource name limits

/// OpenShift/Kubernetes limit on service names
pub const MAX_SERVICE_NAME_LEN: usize = 24;

/// A name clipped to [`MAX_SERVICE_NAME_LEN`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    pub name: String,
    /// Set when the name had to be clipped
    pub warning: Option<String>,
}

/// Clip `name` to the service name limit
///
/// Truncation is a hard cut at the limit. It is logged and the warning is
/// returned so the caller can show it to the user.
pub fn canonicalize_service_name(name: &str) -> CanonicalName {
    if name.chars().count() <= MAX_SERVICE_NAME_LEN {
        return CanonicalName {
            name: name.to_string(),
            warning: None,
        };
    }

    let warning = format!(
        "The fabric8.service.name: {} is being limited to max {} chars as that is required by Kubernetes/Openshift. \
         You can change the name of the service in the <properties> section of the Maven pom file.",
        name, MAX_SERVICE_NAME_LEN
    );
    tracing::warn!("{}", warning);

    CanonicalName {
        name: name.chars().take(MAX_SERVICE_NAME_LEN).collect(),
        warning: Some(warning),
    }
}
