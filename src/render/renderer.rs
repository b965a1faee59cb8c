//! Page renderer backed by the template registry.

use minijinja::{AutoEscape, Environment, Error, ErrorKind};
use serde::Serialize;
use std::path::Path;

use super::filters::register_filters;
use super::registry::{RegistryError, TemplateRegistry};
use super::Variant;
use crate::config::PreferenceConfig;
use crate::content::Site;
use crate::theme::{DocumentRoot, RootState, ThemeMode};

const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    ("base.j2", include_str!("../../templates/base.j2")),
    ("theme_script.j2", include_str!("../../templates/theme_script.j2")),
    ("component/page.j2", include_str!("../../templates/component/page.j2")),
    ("component/ui.j2", include_str!("../../templates/component/ui.j2")),
    ("scripted/page.j2", include_str!("../../templates/scripted/page.j2")),
];

/// Everything a page template sees.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    site: &'a Site,
    theme: RootState,
    variant: Variant,
    storage_key: &'a str,
    default_mode: ThemeMode,
}

/// Renders full page documents for either variant.
///
/// Templates are compiled lazily through the registry on first use and
/// reused afterwards.
///
/// # Example
///
/// ```rust
/// use portfolio::{DocumentRoot, MarkerStyle, PageRenderer, PreferenceConfig, Site, Variant};
///
/// let renderer = PageRenderer::new();
/// let root = DocumentRoot::new(MarkerStyle::DarkClass);
/// let html = renderer
///     .render(Variant::Component, &Site::default(), &root, &PreferenceConfig::default())
///     .unwrap();
/// assert!(html.contains(r#"id="projects""#));
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer using only the embedded templates.
    pub fn new() -> Self {
        Self::from_registry(embedded_registry())
    }

    /// Creates a renderer whose templates can be overridden from `dir`.
    pub fn with_templates_dir(dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let mut registry = embedded_registry();
        registry.add_override_dir(dir)?;
        Ok(Self::from_registry(registry))
    }

    /// Creates a renderer over an arbitrary registry.
    pub fn from_registry(registry: TemplateRegistry) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_filters(&mut env);
        env.set_loader(move |name| match registry.get_content(name) {
            Ok(content) => Ok(Some(content)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(Error::new(ErrorKind::InvalidOperation, e.to_string())),
        });
        Self { env }
    }

    /// Renders the full document for `variant` with the root in its current state.
    pub fn render(
        &self,
        variant: Variant,
        site: &Site,
        root: &DocumentRoot,
        preference: &PreferenceConfig,
    ) -> Result<String, Error> {
        let context = PageContext {
            site,
            theme: RootState::from(root),
            variant,
            storage_key: &preference.storage_key,
            default_mode: preference.default_mode,
        };
        self.env
            .get_template(variant.template_name())?
            .render(&context)
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn embedded_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for (name, content) in EMBEDDED_TEMPLATES {
        registry.add_embedded(name, content);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MarkerStyle;
    use std::fs;
    use tempfile::tempdir;

    fn site() -> Site {
        Site::default().with_year(2025)
    }

    fn root(style: MarkerStyle, mode: ThemeMode) -> DocumentRoot {
        let mut root = DocumentRoot::new(style);
        root.set_mode(mode);
        root
    }

    #[test]
    fn test_component_dark_marker_and_glyph() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render(
                Variant::Component,
                &site(),
                &root(MarkerStyle::DarkClass, ThemeMode::Dark),
                &PreferenceConfig::default(),
            )
            .unwrap();

        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("🌞</button>"));
    }

    #[test]
    fn test_scripted_light_marker_and_glyph() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render(
                Variant::Scripted,
                &site(),
                &root(MarkerStyle::LightAttribute, ThemeMode::Light),
                &PreferenceConfig::default(),
            )
            .unwrap();

        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains("🌙</button>"));
    }

    #[test]
    fn test_scripted_dark_has_no_marker() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render(
                Variant::Scripted,
                &site(),
                &root(MarkerStyle::LightAttribute, ThemeMode::Dark),
                &PreferenceConfig::default(),
            )
            .unwrap();

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(!html.contains(r#"<html lang="en" data-theme"#));
    }

    #[test]
    fn test_storage_key_reaches_script() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render(
                Variant::Component,
                &site(),
                &root(MarkerStyle::DarkClass, ThemeMode::Light),
                &PreferenceConfig::new().storage_key("site-theme"),
            )
            .unwrap();

        assert!(html.contains(r#"var STORAGE_KEY = "site-theme";"#));
    }

    #[test]
    fn test_script_constants_are_js_literals() {
        let renderer = PageRenderer::new();
        let config = PreferenceConfig::new()
            .storage_key(r#"site/theme"&'<x>"#)
            .default_mode(ThemeMode::Dark);
        let html = renderer
            .render(
                Variant::Scripted,
                &site(),
                &root(MarkerStyle::LightAttribute, ThemeMode::Light),
                &config,
            )
            .unwrap();

        let line = html
            .lines()
            .find(|l| l.contains("var STORAGE_KEY"))
            .unwrap();
        let literal = line
            .trim()
            .trim_start_matches("var STORAGE_KEY = ")
            .trim_end_matches(';');
        let key: String = serde_json::from_str(literal).unwrap();
        assert_eq!(key, r#"site/theme"&'<x>"#);
        assert!(!line.contains("&#"));
        assert!(!line.contains('<'));

        assert!(html.contains(r#"var MARKER = "attribute";"#));
        assert!(html.contains(r#"var DEFAULT_MODE = "dark";"#));
    }

    #[test]
    fn test_content_is_escaped() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render(
                Variant::Component,
                &site(),
                &root(MarkerStyle::DarkClass, ThemeMode::Light),
                &PreferenceConfig::default(),
            )
            .unwrap();

        assert!(html.contains("Computer Vision &amp; ML Projects"));
        assert!(!html.contains("Computer Vision & ML Projects"));
    }

    #[test]
    fn test_override_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scripted")).unwrap();
        fs::write(
            dir.path().join("scripted/page.j2"),
            "{{ site.profile.initials }}:{{ theme.mode }}",
        )
        .unwrap();

        let renderer = PageRenderer::with_templates_dir(dir.path()).unwrap();
        let html = renderer
            .render(
                Variant::Scripted,
                &site(),
                &root(MarkerStyle::LightAttribute, ThemeMode::Dark),
                &PreferenceConfig::default(),
            )
            .unwrap();
        assert_eq!(html, "SV:dark");
    }

    #[test]
    fn test_broken_override_is_error() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("component")).unwrap();
        fs::write(dir.path().join("component/page.j2"), "{{ unclosed").unwrap();

        let renderer = PageRenderer::with_templates_dir(dir.path()).unwrap();
        let result = renderer.render(
            Variant::Component,
            &site(),
            &root(MarkerStyle::DarkClass, ThemeMode::Dark),
            &PreferenceConfig::default(),
        );
        assert!(result.is_err());
    }
}
