use std::fmt::{self, Debug};
use handlebars::{Context, RenderContext, Renderable, StringOutput};
use crate::JsonValue;


/// The template engine the renderer delegates to.
///
/// An engine turns source text into a compiled [`TemplateEngine::Template`]
/// and executes compiled templates against a [`JsonValue`] context. The
/// renderer never looks inside a compiled template.
pub trait TemplateEngine: Send + Sync {
    type Template: Send + Sync;

    fn compile(&self, source: &str) -> Result<Self::Template, String>;

    /// Executes `template` against `context`, appending to `out`.
    ///
    /// On failure `out` keeps whatever was produced before the error.
    fn execute(
        &self, template: &Self::Template, context: &JsonValue, out: &mut String
    ) -> Result<(), String>;
}


/// [`TemplateEngine`] backed by the `handlebars` crate.
pub struct Handlebars {
    registry: handlebars::Handlebars<'static>
}

impl Handlebars {
    pub fn new() -> Self {
        Handlebars { registry: handlebars::Handlebars::new() }
    }

    /// Strict mode makes execution fail on fields missing from the context.
    pub fn strict() -> Self {
        let mut registry = handlebars::Handlebars::new();
        registry.set_strict_mode(true);
        Handlebars { registry }
    }

    /// Wraps a preconfigured registry, e.g. one with helpers or partials.
    pub fn with_registry(registry: handlebars::Handlebars<'static>) -> Self {
        Handlebars { registry }
    }

    pub fn registry(&self) -> &handlebars::Handlebars<'static> {
        &self.registry
    }
}

impl Default for Handlebars {
    fn default() -> Self {
        Handlebars::new()
    }
}

impl Debug for Handlebars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlebars")
            .field("strict_mode", &self.registry.strict_mode())
            .finish()
    }
}

impl TemplateEngine for Handlebars {
    type Template = handlebars::Template;

    fn compile(&self, source: &str) -> Result<Self::Template, String> {
        handlebars::Template::compile(source).map_err(
            |err| err.to_string()
        )
    }

    fn execute(
        &self, template: &Self::Template, context: &JsonValue, out: &mut String
    ) -> Result<(), String> {
        let context = Context::wraps(context).map_err(
            |err| err.to_string()
        )?;
        let mut output = StringOutput::new();
        let mut render_context = RenderContext::new(None);
        let result = template.render(
            &self.registry, &context, &mut render_context, &mut output
        );
        // partial output is kept even when rendering stopped early
        if let Ok(text) = output.into_string() {
            out.push_str(&text);
        }
        result.map_err(|err| err.to_string())
    }
}
