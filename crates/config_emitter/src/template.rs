//! Config templates rendered with [Tera](https://keats.github.io/tera/).
//!
//! A [`Template`] owns a single named Tera template, compiled once and
//! rendered any number of times against a [`tera::Context`]. Variables use
//! the `{{ name }}` form; a variable missing from the context is a render
//! error.

use tera::{Context, Tera};

use crate::error::TemplateError;

/// Name the template is registered under inside its [`Tera`] instance.
///
/// Tera only autoescapes `.html`/`.htm`/`.xml` names, so the `.yml` suffix
/// keeps rendered values verbatim.
const TEMPLATE_NAME: &str = "config.yml";

/// A compiled config template.
#[derive(Debug)]
pub struct Template {
    tera: Tera,
}

impl Template {
    /// Compile template text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Tera`] if the text is not valid Tera syntax.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, text)?;
        Ok(Self { tera })
    }

    /// Render the template against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Tera`] if a referenced variable is missing
    /// from `context`.
    pub fn render(&self, context: &Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(TEMPLATE_NAME, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_renders_unchanged() {
        let tmpl = Template::parse("no placeholders here\n").unwrap();
        assert_eq!(
            tmpl.render(&Context::new()).unwrap(),
            "no placeholders here\n"
        );
    }

    #[test]
    fn test_integer_variable_renders_decimal() {
        let tmpl = Template::parse("users/{{ uid }}.json").unwrap();
        let mut context = Context::new();
        context.insert("uid", &7u32);
        assert_eq!(tmpl.render(&context).unwrap(), "users/7.json");
    }

    #[test]
    fn test_dollar_signs_are_literal() {
        let tmpl = Template::parse("cost: $5 for {{ who }}").unwrap();
        let mut context = Context::new();
        context.insert("who", "alice");
        assert_eq!(tmpl.render(&context).unwrap(), "cost: $5 for alice");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let tmpl = Template::parse("{{ uid }}").unwrap();
        let err = tmpl.render(&Context::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Tera(_)));
    }

    #[test]
    fn test_invalid_syntax_is_rejected() {
        let err = Template::parse("keypair_path: {{ uid").unwrap_err();
        assert!(matches!(err, TemplateError::Tera(_)));
    }

    #[test]
    fn test_extra_variables_are_ignored() {
        let tmpl = Template::parse("{{ a }}").unwrap();
        let mut context = Context::new();
        context.insert("a", &1);
        context.insert("b", &2);
        assert_eq!(tmpl.render(&context).unwrap(), "1");
    }
}
