//! Camel route detection and project helpers
//!
//! - [`detector`]: textual check for Camel XML
//! - [`endpoints`]: endpoint extraction with quick-xml
//! - [`scan`]: multi-file scan of a resource tree
//! - [`project`]: XML flavor and camel-core lookup
//! - [`catalog`]: component catalog seam for languages and data formats

pub mod catalog;
pub mod detector;
pub mod endpoints;
pub mod project;
pub mod scan;

pub use catalog::{available_components, CamelCatalog, CatalogEntry, ComponentKind, StaticCatalog};
pub use detector::contains_camel_markers;
pub use endpoints::{
    default_new_instance_name, endpoint_by_instance_name, parse_endpoints, EndpointDetail,
    ParsedEndpoints, ScanDiagnostic,
};
pub use project::{detect_xml_flavor, find_camel_core, XmlFlavor};
pub use scan::{
    find_camel_endpoints, find_camel_xml_files, load_xml_resources, relative_to_root,
    CamelXmlFiles, EndpointScan, ResourceFile,
};
