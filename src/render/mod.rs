//! Page rendering.
//!
//! The page comes in two variants with identical content:
//!
//! - [`Variant::Component`]: assembled from template macros (card, tag,
//!   toggle button) and re-rendered from session state; the root marker is a
//!   `dark` class
//! - [`Variant::Scripted`]: plain markup whose root is mutated in place; the
//!   marker is a `data-theme="light"` attribute
//!
//! Both embed a small browser script that applies the same theme contract
//! client-side.

mod filters;
mod registry;
mod renderer;

pub use filters::slugify;
pub use registry::{
    walk_template_dir, RegistryError, ResolvedTemplate, TemplateFile, TemplateRegistry,
    TEMPLATE_EXTENSIONS,
};
pub use renderer::PageRenderer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::theme::MarkerStyle;

/// Which rendering of the page to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Template components, declarative re-render.
    #[default]
    Component,
    /// Plain markup, imperative marker mutation.
    Scripted,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Component => "component",
            Variant::Scripted => "scripted",
        }
    }

    /// The root marker shape this variant styles against.
    pub fn marker_style(self) -> MarkerStyle {
        match self {
            Variant::Component => MarkerStyle::DarkClass,
            Variant::Scripted => MarkerStyle::LightAttribute,
        }
    }

    pub(crate) fn template_name(self) -> &'static str {
        match self {
            Variant::Component => "component/page",
            Variant::Scripted => "scripted/page",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(Variant::Component),
            "scripted" => Ok(Variant::Scripted),
            other => Err(format!(
                "unknown variant \"{other}\": expected \"component\" or \"scripted\""
            )),
        }
    }
}
