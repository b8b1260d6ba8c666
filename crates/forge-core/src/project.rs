//! Project snapshot and generated file IO

use crate::commands::GeneratedFile;
use crate::commands::camel_context::RESOURCES_DIR;
use crate::pom::PomModel;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default file name of the YAML project snapshot
pub const PROJECT_FILE: &str = "forge-project.yaml";

/// Load a project snapshot, `None` when the file does not exist
pub async fn load_project(path: &Path) -> Result<Option<PomModel>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        tracing::debug!("No project file at {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read project file: {}", path.display()))?;
    let model = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse project file: {}", path.display()))?;
    Ok(Some(model))
}

pub async fn save_project(path: &Path, model: &PomModel) -> Result<()> {
    let content = serde_yaml::to_string(model).context("Failed to serialize project")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write project file: {}", path.display()))?;
    Ok(())
}

/// Resources root of a project directory
pub fn resources_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(RESOURCES_DIR)
}

/// Write a generated file below the project's resources root, refusing to
/// overwrite an existing one
pub async fn write_generated_file(project_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let target = resources_dir(project_dir).join(&file.path);
    if fs::try_exists(&target).await.unwrap_or(false) {
        bail!("File already exists: {}", target.display());
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&target, &file.content)
        .await
        .with_context(|| format!("Failed to write file: {}", target.display()))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::Dependency;

    #[tokio::test]
    async fn test_project_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PROJECT_FILE);

        assert!(load_project(&path).await.unwrap().is_none());

        let mut model = PomModel::new("demo");
        model.packaging = Some("war".to_string());
        model.properties.insert("docker.from", "fabric8/tomcat-8.0");
        model
            .dependencies
            .push(Dependency::new("org.apache.camel", "camel-core").with_version("2.17.0"));
        save_project(&path, &model).await.unwrap();

        let loaded = load_project(&path).await.unwrap().unwrap();
        assert_eq!(loaded, model);
    }

    #[tokio::test]
    async fn test_invalid_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        fs::write(&path, "artifactId: [unclosed").await.unwrap();
        assert!(load_project(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_write_generated_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile {
            path: "META-INF/spring/camel.xml".to_string(),
            content: "<beans/>".to_string(),
        };

        let written = write_generated_file(dir.path(), &file).await.unwrap();
        assert!(written.ends_with("src/main/resources/META-INF/spring/camel.xml"));
        assert_eq!(fs::read_to_string(&written).await.unwrap(), "<beans/>");

        assert!(write_generated_file(dir.path(), &file).await.is_err());
    }
}
