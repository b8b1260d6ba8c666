//! Embedded CamelContext skeletons

use super::{TemplateId, TemplateParams, TemplateRenderer};
use crate::error::{ForgeError, Result};

const CAMEL_SPRING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<beans xmlns="http://www.springframework.org/schema/beans"
       xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
       xsi:schemaLocation="
         http://www.springframework.org/schema/beans http://www.springframework.org/schema/beans/spring-beans.xsd
         http://camel.apache.org/schema/spring http://camel.apache.org/schema/spring/camel-spring.xsd">

  <camelContext id="${projectName}" xmlns="http://camel.apache.org/schema/spring">
    <!-- add routes here -->
  </camelContext>

</beans>
"#;

const CAMEL_BLUEPRINT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<blueprint xmlns="http://www.osgi.org/xmlns/blueprint/v1.0.0"
           xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
           xsi:schemaLocation="
             http://www.osgi.org/xmlns/blueprint/v1.0.0 http://www.osgi.org/xmlns/blueprint/v1.0.0/blueprint.xsd
             http://camel.apache.org/schema/blueprint http://camel.apache.org/schema/blueprint/camel-blueprint.xsd">

  <camelContext id="${projectName}" xmlns="http://camel.apache.org/schema/blueprint">
    <!-- add routes here -->
  </camelContext>

</blueprint>
"#;

/// Renders the embedded templates by replacing `${name}` placeholders
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    fn source(template: TemplateId) -> &'static str {
        match template {
            TemplateId::CamelSpring => CAMEL_SPRING,
            TemplateId::CamelBlueprint => CAMEL_BLUEPRINT,
        }
    }
}

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, template: TemplateId, params: &TemplateParams) -> Result<String> {
        if let Some(missing) = template
            .required_params()
            .iter()
            .find(|p| !params.contains_key(**p))
        {
            return Err(ForgeError::Template(format!(
                "template {} needs parameter '{}'",
                template, missing
            )));
        }

        let mut output = Self::source(template).to_string();
        for (name, value) in params {
            output = output.replace(&format!("${{{}}}", name), value);
        }
        Ok(output)
    }
}
