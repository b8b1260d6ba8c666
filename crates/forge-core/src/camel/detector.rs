//! Cheap textual check for Camel XML

/// Substrings that only show up in Camel XML route files
const CAMEL_MARKERS: [&str; 6] = [
    "<camelContext",
    "<routeContext",
    "<restContext",
    "<routes",
    "http://camel.apache.org/schema/spring",
    "http://camel.apache.org/schema/blueprint",
];

/// Whether `xml` looks like it defines Camel routes or endpoints
///
/// This is a plain substring scan: a marker inside a comment counts too.
pub fn contains_camel_markers(xml: &str) -> bool {
    CAMEL_MARKERS.iter().any(|marker| xml.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_camel_context() {
        let xml = r#"<beans xmlns="http://www.springframework.org/schema/beans">
  <camelContext xmlns="http://camel.apache.org/schema/spring">
    <route><from uri="timer:foo"/><to uri="log:bar"/></route>
  </camelContext>
</beans>"#;
        assert!(contains_camel_markers(xml));
    }

    #[test]
    fn test_routes_only_file() {
        assert!(contains_camel_markers(
            "<routes xmlns=\"http://camel.apache.org/schema/spring\"/>"
        ));
    }

    #[test]
    fn test_plain_spring_beans() {
        let xml = r#"<beans><bean id="x" class="com.acme.X"/></beans>"#;
        assert!(!contains_camel_markers(xml));
    }

    #[test]
    fn test_marker_in_comment_is_accepted() {
        assert!(contains_camel_markers("<beans><!-- <camelContext> --></beans>"));
    }
}
