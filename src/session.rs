//! A page session: one rendered page plus its theme preference.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::config::SiteConfig;
use crate::content::Site;
use crate::error::Result;
use crate::render::{PageRenderer, Variant};
use crate::storage::PreferenceStore;
use crate::theme::{DocumentRoot, ThemeMode, ThemePreference};

/// The lifetime of one page view.
///
/// The session is the single owner of the mutable root marker (through its
/// [`ThemePreference`]). How the document follows the marker depends on the
/// variant:
///
/// - [`Variant::Component`] re-renders the whole document from state on every
///   [`html`](Self::html) call
/// - [`Variant::Scripted`] renders once on [`start`](Self::start) and then
///   patches the root tag and toggle glyph in place whenever the mode is
///   applied
///
/// Either way the document always agrees with [`mode`](Self::mode).
///
/// # Example
///
/// ```rust
/// use portfolio::{MemoryStore, PageSession, SiteConfig, ThemeMode, Variant};
///
/// let config = SiteConfig::new().variant(Variant::Scripted);
/// let mut session = PageSession::new(&config, MemoryStore::with_item("theme", "dark")).unwrap();
///
/// assert_eq!(session.start().unwrap(), ThemeMode::Dark);
/// assert_eq!(session.click_toggle(), ThemeMode::Light);
/// assert!(session.html().unwrap().contains(r#"data-theme="light""#));
/// ```
pub struct PageSession<S> {
    variant: Variant,
    site: Site,
    renderer: PageRenderer,
    preference: ThemePreference<S>,
    markup: Rc<RefCell<String>>,
}

impl<S: PreferenceStore> PageSession<S> {
    /// Builds a session with the default site content.
    pub fn new(config: &SiteConfig, store: S) -> Result<Self> {
        Self::with_site(config, store, Site::default())
    }

    /// Builds a session rendering `site`.
    pub fn with_site(config: &SiteConfig, store: S, site: Site) -> Result<Self> {
        let renderer = match &config.templates_dir {
            Some(dir) => PageRenderer::with_templates_dir(dir)?,
            None => PageRenderer::new(),
        };
        let marker = config.variant.marker_style();
        let mut preference = ThemePreference::new(store, config.preference.clone(), marker);

        let markup = Rc::new(RefCell::new(String::new()));
        if config.variant == Variant::Scripted {
            let markup = Rc::clone(&markup);
            preference.subscribe(move |mode| {
                let mut root = DocumentRoot::new(marker);
                root.set_mode(mode);
                patch_markup(&mut markup.borrow_mut(), &root);
            });
        }

        Ok(Self {
            variant: config.variant,
            site,
            renderer,
            preference,
            markup,
        })
    }

    /// Page load: resolves and applies the initial mode, then renders.
    pub fn start(&mut self) -> Result<ThemeMode> {
        let mode = self.preference.initialize();
        debug!("page session started in {mode} mode ({} variant)", self.variant);
        if self.variant == Variant::Scripted {
            let rendered = self.render_now()?;
            *self.markup.borrow_mut() = rendered;
        }
        Ok(mode)
    }

    /// A click on the toggle control.
    pub fn click_toggle(&mut self) -> ThemeMode {
        self.preference.toggle()
    }

    /// Applies and persists an explicit mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.preference.set_mode(mode);
    }

    /// The current document.
    pub fn html(&self) -> Result<String> {
        match self.variant {
            Variant::Scripted if !self.markup.borrow().is_empty() => {
                Ok(self.markup.borrow().clone())
            }
            _ => self.render_now(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.preference.mode()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn preference(&self) -> &ThemePreference<S> {
        &self.preference
    }

    pub fn preference_mut(&mut self) -> &mut ThemePreference<S> {
        &mut self.preference
    }

    fn render_now(&self) -> Result<String> {
        Ok(self.renderer.render(
            self.variant,
            &self.site,
            self.preference.root(),
            self.preference.config(),
        )?)
    }
}

const ROOT_MARKERS: &[&str] = &[r#" class="dark""#, r#" data-theme="light""#];
const TOGGLE_ID: &str = r#"id="themeToggle""#;

/// Rewrites the `<html>` marker and the toggle glyph of already rendered
/// markup to match `root`. Parts that are missing are left alone.
fn patch_markup(markup: &mut String, root: &DocumentRoot) {
    if let Some(start) = markup.find("<html") {
        if let Some(len) = tag_end(&markup[start..]) {
            let end = start + len;
            let mut tag = markup[start..end].to_string();
            for marker in ROOT_MARKERS {
                tag = tag.replace(marker, "");
            }
            tag.push_str(root.root_attributes());
            markup.replace_range(start..end, &tag);
        }
    }

    if let Some(id) = markup.find(TOGGLE_ID) {
        if let Some(open) = tag_end(&markup[id..]) {
            let text_start = id + open + 1;
            if let Some(close) = markup[text_start..].find("</button>") {
                markup.replace_range(text_start..text_start + close, root.toggle_glyph());
            }
        }
    }
}

/// Byte offset of the `>` closing the tag `s` starts in. A `>` inside a
/// quoted attribute value does not close the tag.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MarkerStyle;

    fn root(style: MarkerStyle, mode: ThemeMode) -> DocumentRoot {
        let mut root = DocumentRoot::new(style);
        root.set_mode(mode);
        root
    }

    #[test]
    fn test_patch_markup_sets_and_clears_marker() {
        let mut markup =
            r#"<html lang="en"><body><button id="themeToggle" title="t">🌙</button></body></html>"#
                .to_string();

        patch_markup(&mut markup, &root(MarkerStyle::DarkClass, ThemeMode::Dark));
        assert!(markup.starts_with(r#"<html lang="en" class="dark">"#));
        assert!(markup.contains(r#"title="t">🌞</button>"#));

        patch_markup(&mut markup, &root(MarkerStyle::DarkClass, ThemeMode::Light));
        assert!(markup.starts_with(r#"<html lang="en">"#));
        assert!(markup.contains(">🌙</button>"));
    }

    #[test]
    fn test_patch_markup_attribute_shape() {
        let mut markup = r#"<html lang="en" data-theme="light"><button id="themeToggle">🌙</button>"#.to_string();
        patch_markup(&mut markup, &root(MarkerStyle::LightAttribute, ThemeMode::Dark));
        assert_eq!(markup, r#"<html lang="en"><button id="themeToggle">🌞</button>"#);
    }

    #[test]
    fn test_patch_markup_skips_quoted_angle_brackets() {
        let mut markup = concat!(
            r#"<html lang="en" data-note='a > b' data-theme="light">"#,
            r#"<button id="themeToggle" title="next > prev">🌙</button>"#
        )
        .to_string();
        patch_markup(&mut markup, &root(MarkerStyle::LightAttribute, ThemeMode::Dark));
        assert_eq!(
            markup,
            concat!(
                r#"<html lang="en" data-note='a > b'>"#,
                r#"<button id="themeToggle" title="next > prev">🌞</button>"#
            )
        );
    }

    #[test]
    fn test_tag_end() {
        assert_eq!(tag_end(r#"<a href="x>y">"#), Some(13));
        assert_eq!(tag_end("<a>"), Some(2));
        assert_eq!(tag_end(r#"<a title="unterminated>"#), None);
    }

    #[test]
    fn test_patch_markup_without_anchors_is_noop() {
        let mut markup = "plain text".to_string();
        patch_markup(&mut markup, &root(MarkerStyle::DarkClass, ThemeMode::Dark));
        assert_eq!(markup, "plain text");
    }
}
