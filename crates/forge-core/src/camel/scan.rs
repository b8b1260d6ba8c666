//! Scanning a resource tree for Camel XML files and their endpoints

use super::detector::contains_camel_markers;
use super::endpoints::{parse_endpoints, EndpointDetail, ScanDiagnostic};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// A candidate file: its full path and text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub path: String,
    pub content: String,
}

impl ResourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    fn is_xml(&self) -> bool {
        self.path.ends_with(".xml")
    }
}

/// Camel XML files found under a resource root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamelXmlFiles {
    /// Paths relative to the root, in scan order
    pub files: Vec<String>,
    /// Directories (relative to the root) holding at least one of them
    pub directories: BTreeSet<String>,
}

/// Endpoints of one scanned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEndpoints {
    pub file: String,
    pub endpoints: Vec<EndpointDetail>,
    pub diagnostic: Option<ScanDiagnostic>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointScan {
    pub files: Vec<FileEndpoints>,
}

impl EndpointScan {
    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointDetail> {
        self.files.iter().flat_map(|f| f.endpoints.iter())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &ScanDiagnostic> {
        self.files.iter().filter_map(|f| f.diagnostic.as_ref())
    }
}

/// `path` relative to `root` when it starts with it, else `path` unchanged
///
/// An empty root is no root at all and leaves every path as given.
pub fn relative_to_root(path: &str, root: &str) -> String {
    if root.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(root) {
        Some(rest) => rest
            .strip_prefix('/')
            .or_else(|| rest.strip_prefix('\\'))
            .unwrap_or(rest)
            .to_string(),
        None => path.to_string(),
    }
}

/// Apply the caller's filter; `None` means no opinion, which includes the file
fn included<F>(filter: &F, path: &str) -> bool
where
    F: Fn(&str) -> Option<bool>,
{
    let verdict = filter(path);
    tracing::trace!("Filter {} -> {:?}", path, verdict);
    verdict.unwrap_or(true)
}

/// Find the XML files under `root` that contain Camel routes
pub fn find_camel_xml_files<F>(files: &[ResourceFile], root: &str, filter: F) -> CamelXmlFiles
where
    F: Fn(&str) -> Option<bool>,
{
    let mut found = CamelXmlFiles::default();
    for file in files.iter().filter(|f| f.is_xml()) {
        if !included(&filter, &file.path) || !contains_camel_markers(&file.content) {
            continue;
        }
        let relative = relative_to_root(&file.path, root);
        if let Some((dir, _)) = relative.rsplit_once(['/', '\\']) {
            found.directories.insert(dir.to_string());
        }
        found.files.push(relative);
    }
    found
}

/// Collect endpoints from every Camel XML file under `root`
///
/// A malformed file contributes an empty endpoint list and a diagnostic;
/// the remaining files are still scanned.
pub fn find_camel_endpoints<F>(files: &[ResourceFile], root: &str, filter: F) -> EndpointScan
where
    F: Fn(&str) -> Option<bool>,
{
    let mut scan = EndpointScan::default();
    for file in files.iter().filter(|f| f.is_xml()) {
        if !included(&filter, &file.path) || !contains_camel_markers(&file.content) {
            continue;
        }
        let relative = relative_to_root(&file.path, root);
        let parsed = parse_endpoints(&file.content, &relative);
        if let Some(diagnostic) = &parsed.diagnostic {
            tracing::warn!("Ignoring {}", diagnostic);
        }
        scan.files.push(FileEndpoints {
            file: relative,
            endpoints: parsed.endpoints,
            diagnostic: parsed.diagnostic,
        });
    }
    scan
}

/// Read every `.xml` file below `root`, sorted by path
///
/// Entries that cannot be read are logged and skipped.
pub fn load_xml_resources(root: &Path) -> Vec<ResourceFile> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "xml") {
            continue;
        }
        match std::fs::read_to_string(path) {
            Ok(content) => files.push(ResourceFile::new(path.to_string_lossy(), content)),
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/work/demo/src/main/resources";

    const ROUTE_XML: &str = r#"<camelContext xmlns="http://camel.apache.org/schema/spring">
  <route><from uri="timer:tick"/><to uri="log:tick"/></route>
</camelContext>"#;

    const BEANS_XML: &str = r#"<beans><bean id="a" class="com.acme.A"/></beans>"#;

    fn no_opinion(_: &str) -> Option<bool> {
        None
    }

    #[test]
    fn test_relative_to_root() {
        assert_eq!(
            relative_to_root(&format!("{}/META-INF/spring/a.xml", ROOT), ROOT),
            "META-INF/spring/a.xml"
        );
        assert_eq!(relative_to_root("/elsewhere/a.xml", ROOT), "/elsewhere/a.xml");
    }

    #[test]
    fn test_relative_to_empty_root_keeps_path() {
        assert_eq!(relative_to_root("/elsewhere/a.xml", ""), "/elsewhere/a.xml");
        assert_eq!(relative_to_root("spring/a.xml", ""), "spring/a.xml");
    }

    #[test]
    fn test_only_camel_file_recorded() {
        let files = vec![
            ResourceFile::new(format!("{}/META-INF/spring/camel.xml", ROOT), ROUTE_XML),
            ResourceFile::new(format!("{}/META-INF/spring/beans.xml", ROOT), BEANS_XML),
        ];
        let found = find_camel_xml_files(&files, ROOT, no_opinion);
        assert_eq!(found.files, vec!["META-INF/spring/camel.xml"]);
        assert_eq!(
            found.directories.into_iter().collect::<Vec<_>>(),
            vec!["META-INF/spring"]
        );
    }

    #[test]
    fn test_filter_excludes_and_non_xml_skipped() {
        let files = vec![
            ResourceFile::new(format!("{}/a/camel.xml", ROOT), ROUTE_XML),
            ResourceFile::new(format!("{}/b/camel.xml", ROOT), ROUTE_XML),
            ResourceFile::new(format!("{}/b/camel.txt", ROOT), ROUTE_XML),
        ];
        let found = find_camel_xml_files(&files, ROOT, |path| {
            if path.contains("/a/") {
                Some(false)
            } else {
                None
            }
        });
        assert_eq!(found.files, vec!["b/camel.xml"]);
    }

    #[test]
    fn test_malformed_file_does_not_stop_scan() {
        let files = vec![
            ResourceFile::new(format!("{}/one.xml", ROOT), ROUTE_XML),
            ResourceFile::new(
                format!("{}/broken.xml", ROOT),
                "<routes><route><from uri=\"timer:x\"></route>",
            ),
            ResourceFile::new(
                format!("{}/two.xml", ROOT),
                "<routes xmlns=\"http://camel.apache.org/schema/spring\"><route><from uri=\"direct:a\"/></route></routes>",
            ),
        ];
        let scan = find_camel_endpoints(&files, ROOT, no_opinion);

        assert_eq!(scan.files.len(), 3);
        assert_eq!(scan.files[0].endpoints.len(), 2);
        assert!(scan.files[1].endpoints.is_empty());
        assert_eq!(scan.files[1].file, "broken.xml");
        assert_eq!(scan.files[2].endpoints[0].endpoint_uri, "direct:a");
        assert_eq!(scan.endpoints().count(), 3);
        assert_eq!(scan.diagnostics().count(), 1);
    }

    #[test]
    fn test_load_xml_resources_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let spring = dir.path().join("META-INF").join("spring");
        std::fs::create_dir_all(&spring).unwrap();
        std::fs::write(spring.join("camel.xml"), ROUTE_XML).unwrap();
        std::fs::write(dir.path().join("beans.xml"), BEANS_XML).unwrap();
        std::fs::write(dir.path().join("app.properties"), "a=b").unwrap();

        let files = load_xml_resources(dir.path());
        assert_eq!(files.len(), 2);

        let root = dir.path().to_string_lossy().to_string();
        let found = find_camel_xml_files(&files, &root, no_opinion);
        let expected = Path::new("META-INF").join("spring").join("camel.xml");
        assert_eq!(found.files, vec![expected.to_string_lossy().to_string()]);
    }
}
