//! Placeholder substitution for manifest URL templates.

use std::collections::HashMap;

/// Variable substitution context for manifest URL templates.
///
/// Supports variable substitution in strings using the `{varname}` syntax.
/// Placeholders with no matching variable are left as they are.
///
/// # Example
///
/// ```
/// use flixgate::playback::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("quality", "1080p")
///     .with_var("format", "WEB");
///
/// assert_eq!(
///     ctx.substitute("https://cdn.example/{quality}/{format}/{audio}.mpd"),
///     "https://cdn.example/1080p/WEB/{audio}.mpd"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Substitute variables in a string.
    ///
    /// The template is scanned once, so a substituted value that itself
    /// looks like `{name}` is not expanded again.
    pub fn substitute(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.vars.get(key) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(key);
                            result.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    result.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        let ctx = TemplateContext::new()
            .with_var("quality", "720p")
            .with_var("audioCodec", "eac3");

        assert_eq!(ctx.substitute("{quality}"), "720p");
        assert_eq!(
            ctx.substitute("/{quality}/a-{audioCodec}.mpd"),
            "/720p/a-eac3.mpd"
        );
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let ctx = TemplateContext::new().with_var("format", "WEB");
        assert_eq!(
            ctx.substitute("{format}/{subtitles}/{}"),
            "WEB/{subtitles}/{}"
        );
    }

    #[test]
    fn test_unclosed_brace_kept() {
        let ctx = TemplateContext::new().with_var("format", "WEB");
        assert_eq!(ctx.substitute("{format}/{form"), "WEB/{form");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let ctx = TemplateContext::new()
            .with_var("audio", "{subtitles}")
            .with_var("subtitles", "eng");
        assert_eq!(ctx.substitute("{audio}-{subtitles}"), "{subtitles}-eng");
    }

    #[test]
    fn test_no_placeholders() {
        let ctx = TemplateContext::new();
        assert_eq!(
            ctx.substitute("https://cdn.example/manifest.mpd"),
            "https://cdn.example/manifest.mpd"
        );
    }
}
