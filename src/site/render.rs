//! Template rendering over `tera`

use serde_json::Value;
use tera::{Context, Tera};

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load every `*.html` under `dir`; template names are relative to it.
    pub fn from_dir(dir: &str) -> Result<Self, tera::Error> {
        let pattern = format!("{}/**/*.html", dir.trim_end_matches('/'));
        let tera = Tera::new(&pattern)?;
        Ok(Self { tera })
    }

    /// Build from in-memory `(name, source)` pairs
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: Value) -> Result<String, tera::Error> {
        let context = Context::from_value(context)?;
        self.tera.render(template, &context)
    }

    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_inheritance() {
        let renderer = Renderer::from_raw(&[
            ("base.html", "<title>{{ meta.title }}</title>{% block body %}{% endblock body %}"),
            (
                "index.html",
                "{% extends \"base.html\" %}{% block body %}<p>{{ site.name }}</p>{% endblock body %}",
            ),
        ])
        .unwrap();

        let html = renderer
            .render("index.html", json!({"meta": {"title": "Home"}, "site": {"name": "Aquatech"}}))
            .unwrap();
        assert_eq!(html, "<title>Home</title><p>Aquatech</p>");
    }

    #[test]
    fn test_missing_template_is_error() {
        let renderer = Renderer::from_raw(&[("index.html", "ok")]).unwrap();
        assert!(renderer.render("missing.html", json!({})).is_err());
    }

    #[test]
    fn test_context_must_be_object() {
        let renderer = Renderer::from_raw(&[("index.html", "ok")]).unwrap();
        assert!(renderer.render("index.html", json!([1, 2])).is_err());
    }

    #[test]
    fn test_html_is_escaped() {
        let renderer = Renderer::from_raw(&[("page.html", "{{ value }}")]).unwrap();
        let html = renderer.render("page.html", json!({"value": "<b>"})).unwrap();
        assert_eq!(html, "&lt;b&gt;");
    }
}
