use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine.
///
/// Templates are loaded from the `templates/` directory relative to the
/// working directory, matching how the service is packaged and run in its
/// container image.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, SERVICE_VERSION};

    #[test]
    fn index_template_renders_all_fields() {
        let tera = init_templates().expect("templates should load from crate root");

        let display = DisplayConfig {
            site_name: "Beacon".to_string(),
            platform: "Azure Container Instances".to_string(),
            build_info: "Built with Terraform + ACR + ACI".to_string(),
            version: SERVICE_VERSION.to_string(),
        };

        let mut context = tera::Context::new();
        context.insert("config", &display);
        context.insert("hostname", "test-host");
        context.insert("timestamp", "2026-08-07 12:00:00");

        let html = tera.render("index.html", &context).unwrap();
        assert!(html.contains("Beacon"));
        assert!(html.contains("healthy"));
        assert!(html.contains("Azure Container Instances"));
        assert!(html.contains("test-host"));
        assert!(html.contains("2026-08-07 12:00:00"));
        assert!(html.contains("1.0"));
        assert!(html.contains("Built with Terraform + ACR + ACI"));
    }

    #[test]
    fn index_template_fails_without_context() {
        let tera = init_templates().unwrap();
        let context = tera::Context::new();
        assert!(tera.render("index.html", &context).is_err());
    }
}
