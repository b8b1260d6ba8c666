//! Find-or-create upserts over the POM model
//!
//! Every function reports whether it changed the model. Existing entries
//! are never overwritten: a plugin, extension, profile or report plugin
//! that is already declared is left exactly as the user wrote it.

use super::{
    Build, Dependency, DistributionManagement, Extension, Plugin, PomModel, PomProperties, Profile,
    ReportPlugin, Reporting, Site,
};
use crate::error::{ForgeError, Result};
use std::collections::HashSet;

/// Set `key` to `desired` unless it already holds that value
///
/// A blank or missing `desired` is a no-op. Returns `dirty` or'ed with
/// whether this call wrote anything, so a batch of calls can thread a
/// single flag and persist once at the end.
pub fn upsert_property(
    props: &mut PomProperties,
    key: &str,
    desired: Option<&str>,
    dirty: bool,
) -> Result<bool> {
    if key.trim().is_empty() {
        return Err(ForgeError::contract("property key must not be blank"));
    }
    let Some(value) = desired.filter(|v| !v.trim().is_empty()) else {
        return Ok(dirty);
    };
    if props.get(key) == Some(value) {
        return Ok(dirty);
    }
    props.insert(key, value);
    Ok(true)
}

/// Fail when the POM declares the same profile id twice
pub fn check_profile_ids(model: &PomModel) -> Result<()> {
    let mut seen = HashSet::new();
    match model.profiles.iter().find(|p| !seen.insert(p.id.as_str())) {
        Some(dup) => Err(ForgeError::contract(format!(
            "POM declares profile '{}' more than once",
            dup.id
        ))),
        None => Ok(()),
    }
}

/// Append the profile built by `builder` unless a profile with `id` exists
///
/// `builder` is only invoked when the profile is missing.
pub fn upsert_profile<F>(model: &mut PomModel, id: &str, builder: F) -> Result<bool>
where
    F: FnOnce() -> Profile,
{
    if id.trim().is_empty() {
        return Err(ForgeError::contract("profile id must not be blank"));
    }
    check_profile_ids(model)?;

    if model.find_profile(id).is_some() {
        tracing::debug!("Profile {} already present", id);
        return Ok(false);
    }

    let profile = builder();
    if profile.id != id {
        return Err(ForgeError::contract(format!(
            "profile builder for '{}' produced id '{}'",
            id, profile.id
        )));
    }
    tracing::debug!("Adding profile {}", id);
    model.profiles.push(profile);
    Ok(true)
}

/// Add a build extension unless one with the same coordinate exists
pub fn upsert_extension(build: &mut Build, extension: Extension) -> bool {
    let exists = build
        .extensions
        .iter()
        .any(|e| e.group_id == extension.group_id && e.artifact_id == extension.artifact_id);
    if exists {
        return false;
    }
    build.extensions.push(extension);
    true
}

/// Add a report plugin unless one with the same coordinate exists
pub fn upsert_report_plugin(reporting: &mut Reporting, plugin: ReportPlugin) -> bool {
    let exists = reporting
        .plugins
        .iter()
        .any(|p| p.group_id == plugin.group_id && p.artifact_id == plugin.artifact_id);
    if exists {
        return false;
    }
    reporting.plugins.push(plugin);
    true
}

/// Fill in the site id and url, each only when missing or blank
pub fn upsert_site_distribution(
    distribution: &mut DistributionManagement,
    id: &str,
    url: &str,
) -> bool {
    let site = distribution.site.get_or_insert_with(Site::default);
    let mut changed = false;
    if site.id.as_deref().map_or(true, |v| v.trim().is_empty()) {
        site.id = Some(id.to_string());
        changed = true;
    }
    if site.url.as_deref().map_or(true, |v| v.trim().is_empty()) {
        site.url = Some(url.to_string());
        changed = true;
    }
    changed
}

/// Add a build plugin unless one with the same coordinate exists
pub fn upsert_plugin(build: &mut Build, plugin: Plugin) -> bool {
    let exists = build
        .plugins
        .iter()
        .any(|p| p.group_id == plugin.group_id && p.artifact_id == plugin.artifact_id);
    if exists {
        tracing::info!("Found existing {}", plugin.artifact_id);
        return false;
    }
    tracing::info!("Adding {}", plugin.artifact_id);
    build.plugins.push(plugin);
    true
}

/// Add a dependency unless the project already depends on it
///
/// When the coordinate is version-managed by `<dependencyManagement>` the
/// version is left to the managed entry.
pub fn upsert_dependency(model: &mut PomModel, mut dependency: Dependency) -> bool {
    if model.has_dependency(&dependency.group_id, &dependency.artifact_id) {
        return false;
    }
    if model.has_managed_dependency(&dependency.group_id, &dependency.artifact_id) {
        dependency.version = None;
    }
    tracing::debug!("Adding dependency {}", dependency.coordinate());
    model.dependencies.push(dependency);
    true
}
