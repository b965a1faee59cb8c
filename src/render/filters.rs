//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::theme::ThemeMode;

/// Registers the page filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // {{ project.title | slug }} -> "computer-vision-ml-projects"
    env.add_filter("slug", |value: Value| -> String { slugify(&value.to_string()) });

    // {{ "dark" | glyph }} -> the toggle glyph shown while that mode is active
    env.add_filter("glyph", |value: Value| -> Result<String, Error> {
        let text = value.to_string();
        let mode: ThemeMode = text
            .parse()
            .map_err(|e: crate::theme::ParseModeError| {
                Error::new(ErrorKind::InvalidOperation, e.to_string())
            })?;
        Ok(mode.toggle_glyph().to_string())
    });
}

/// Lowercase ASCII slug: transliterates, keeps alphanumerics, joins words with `-`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    for word in ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(&word.to_ascii_lowercase());
    }
    slug
}
