//! Endpoint extraction from Camel XML routes

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::fmt;

/// An endpoint found in a route file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDetail {
    pub file_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    pub endpoint_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_instance_name: Option<String>,
}

/// A file that could not be scanned; the scan carries on without it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanDiagnostic {
    pub file: String,
    pub message: String,
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Endpoints of one document, or an empty list plus a diagnostic when the
/// document is not well-formed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEndpoints {
    pub endpoints: Vec<EndpointDetail>,
    pub diagnostic: Option<ScanDiagnostic>,
}

/// Extract endpoint URIs from `<endpoint>` declarations and from the `uri`
/// attribute of any step inside a `<route>`
///
/// `file_uri` is recorded on every endpoint. Parsing stops at the first
/// XML error and nothing from that document is returned.
pub fn parse_endpoints(xml: &str, file_uri: &str) -> ParsedEndpoints {
    match read_endpoints(xml, file_uri) {
        Ok(endpoints) => ParsedEndpoints {
            endpoints,
            diagnostic: None,
        },
        Err(message) => {
            tracing::debug!("Skipping endpoints of {}: {}", file_uri, message);
            ParsedEndpoints {
                endpoints: Vec::new(),
                diagnostic: Some(ScanDiagnostic {
                    file: file_uri.to_string(),
                    message,
                }),
            }
        }
    }
}

fn read_endpoints(xml: &str, file_uri: &str) -> Result<Vec<EndpointDetail>, String> {
    let mut reader = Reader::from_str(xml);
    let mut lines = LineCounter::new(xml);
    let mut endpoints = Vec::new();
    let mut depth = 0usize;
    // depth of the innermost open <route>
    let mut route_depth: Option<usize> = None;

    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let line = lines.line_at(start);
                collect_endpoint(&e, route_depth.is_some(), file_uri, line, &mut endpoints)?;
                if e.local_name().as_ref() == b"route" && route_depth.is_none() {
                    route_depth = Some(depth);
                }
            }
            Ok(Event::Empty(e)) => {
                let line = lines.line_at(start);
                collect_endpoint(&e, route_depth.is_some(), file_uri, line, &mut endpoints)?;
            }
            Ok(Event::End(_)) => {
                if route_depth == Some(depth) {
                    route_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("XML parse error: {}", e)),
        }
    }

    if depth != 0 {
        return Err(format!("XML parse error: {} unclosed element(s)", depth));
    }
    Ok(endpoints)
}

fn collect_endpoint(
    element: &BytesStart<'_>,
    in_route: bool,
    file_uri: &str,
    line: usize,
    endpoints: &mut Vec<EndpointDetail>,
) -> Result<(), String> {
    let is_declaration = element.local_name().as_ref() == b"endpoint";
    if !is_declaration && !in_route {
        return Ok(());
    }

    let mut uri = None;
    let mut id = None;
    for attr in element.attributes() {
        let attr = attr.map_err(|e| format!("XML attribute error: {}", e))?;
        let value = attr
            .unescape_value()
            .map_err(|e| format!("XML attribute error: {}", e))?;
        match attr.key.local_name().as_ref() {
            b"uri" => uri = Some(value.trim().to_string()),
            b"id" => id = Some(value.trim().to_string()),
            _ => {}
        }
    }

    if let Some(uri) = uri.filter(|u| !u.is_empty()) {
        endpoints.push(EndpointDetail {
            file_uri: file_uri.to_string(),
            line_number: Some(line),
            endpoint_uri: uri,
            endpoint_instance_name: id.filter(|i| !i.is_empty()),
        });
    }
    Ok(())
}

/// Maps byte offsets to 1-based line numbers; offsets must not decrease
struct LineCounter<'a> {
    text: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        if offset > self.offset {
            self.line += self.text.as_bytes()[self.offset..offset]
                .iter()
                .filter(|b| **b == b'\n')
                .count();
            self.offset = offset;
        }
        self.line
    }
}

/// Find an endpoint by its instance name (the `id` it was declared with)
pub fn endpoint_by_instance_name<'a>(
    endpoints: &'a [EndpointDetail],
    instance_name: &str,
) -> Option<&'a EndpointDetail> {
    endpoints
        .iter()
        .find(|e| e.endpoint_instance_name.as_deref() == Some(instance_name))
}

/// First free `endpointN` name, counting from one past the number of
/// known endpoints
pub fn default_new_instance_name(endpoints: &[EndpointDetail]) -> String {
    let mut count = endpoints.len() + 1;
    loop {
        let name = format!("endpoint{}", count);
        if endpoint_by_instance_name(endpoints, &name).is_none() {
            return name;
        }
        count += 1;
    }
}
