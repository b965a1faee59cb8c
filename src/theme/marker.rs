//! The root-element marker that carries the active mode.

use serde::{Deserialize, Serialize};

use super::mode::ThemeMode;

/// Shape of the marker placed on the document root.
///
/// Both shapes encode the same boolean. They differ only in what the
/// stylesheet keys on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// `class="dark"` present while dark.
    #[default]
    DarkClass,
    /// `data-theme="light"` present while light, absent while dark.
    LightAttribute,
}

impl MarkerStyle {
    /// Short name handed to templates and the browser script.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStyle::DarkClass => "class",
            MarkerStyle::LightAttribute => "attribute",
        }
    }
}

/// The live visual state of the page root.
///
/// This is the single mutable point of the page: it holds whether dark is
/// active and derives the root attributes and the toggle glyph from that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    style: MarkerStyle,
    dark: bool,
}

impl DocumentRoot {
    /// Creates a root with no marker applied (light).
    pub fn new(style: MarkerStyle) -> Self {
        Self { style, dark: false }
    }

    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Reads the mode back from the marker.
    pub fn mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub(crate) fn set_mode(&mut self, mode: ThemeMode) {
        self.dark = mode.is_dark();
    }

    /// Returns whether the marker is currently present on the root.
    pub fn marker_present(&self) -> bool {
        match self.style {
            MarkerStyle::DarkClass => self.dark,
            MarkerStyle::LightAttribute => !self.dark,
        }
    }

    /// Attributes to place on the `<html>` element, with a leading space,
    /// or an empty string when the marker is absent.
    pub fn root_attributes(&self) -> &'static str {
        match (self.style, self.marker_present()) {
            (MarkerStyle::DarkClass, true) => r#" class="dark""#,
            (MarkerStyle::LightAttribute, true) => r#" data-theme="light""#,
            (_, false) => "",
        }
    }

    /// Glyph currently shown on the toggle control.
    pub fn toggle_glyph(&self) -> &'static str {
        self.mode().toggle_glyph()
    }
}

/// Serializable snapshot of the root state handed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct RootState {
    pub mode: ThemeMode,
    pub marker: &'static str,
    pub root_attributes: &'static str,
    pub glyph: &'static str,
}

impl From<&DocumentRoot> for RootState {
    fn from(root: &DocumentRoot) -> Self {
        Self {
            mode: root.mode(),
            marker: root.style().as_str(),
            root_attributes: root.root_attributes(),
            glyph: root.toggle_glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_root_is_light() {
        let root = DocumentRoot::new(MarkerStyle::DarkClass);
        assert_eq!(root.mode(), ThemeMode::Light);
        assert_eq!(root.toggle_glyph(), "🌙");
    }

    #[test]
    fn test_dark_class_marker() {
        let mut root = DocumentRoot::new(MarkerStyle::DarkClass);
        assert_eq!(root.root_attributes(), "");

        root.set_mode(ThemeMode::Dark);
        assert!(root.marker_present());
        assert_eq!(root.root_attributes(), r#" class="dark""#);
        assert_eq!(root.toggle_glyph(), "🌞");
    }

    #[test]
    fn test_light_attribute_marker() {
        let mut root = DocumentRoot::new(MarkerStyle::LightAttribute);
        assert!(root.marker_present());
        assert_eq!(root.root_attributes(), r#" data-theme="light""#);

        root.set_mode(ThemeMode::Dark);
        assert!(!root.marker_present());
        assert_eq!(root.root_attributes(), "");
        assert_eq!(root.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_root_state_snapshot() {
        let mut root = DocumentRoot::new(MarkerStyle::LightAttribute);
        root.set_mode(ThemeMode::Dark);
        let state = RootState::from(&root);
        assert_eq!(state.mode, ThemeMode::Dark);
        assert_eq!(state.marker, "attribute");
        assert_eq!(state.glyph, "🌞");
    }
}
