use std::fmt;
use std::sync::Arc;
use http::HeaderValue;
use http::header::CONTENT_TYPE;
use crate::{
    cache::load_template, Handlebars, IntoContext, JsonValue, Mode,
    RenderError, RenderOptions, RenderSink, TemplateCache, TemplateEngine,
};


/// Shared, process-wide entry point turning template names into render tasks.
pub struct Renderer<E: TemplateEngine = Handlebars> {
    engine: Arc<E>,
    options: RenderOptions,
    cache: TemplateCache<E>,
    mode: Mode
}

impl<E: TemplateEngine> Renderer<E> {
    pub fn new(engine: E, options: RenderOptions, mode: Mode) -> Self {
        let engine = Arc::new(engine);
        Renderer {
            cache: TemplateCache::new(Arc::clone(&engine)),
            engine,
            options,
            mode
        }
    }

    /// Resolves `name` under the template directory and pairs the compiled
    /// template with `context`.
    ///
    /// In [`Mode::Debug`] the file is read and compiled on every call, so
    /// edits show up without a restart. Otherwise the template cache is used.
    pub fn prepare(
        &self, name: &str, context: impl IntoContext
    ) -> Result<RenderTask<'_, E>, RenderError> {
        let path = self.options.template_path(name);
        let template = match self.mode {
            Mode::Debug => Arc::new(load_template(self.engine.as_ref(), &path)?),
            Mode::Release => self.cache.get_or_load(&path)?
        };
        Ok(RenderTask {
            template,
            context: context.into_context()?,
            options: &self.options,
            engine: self.engine.as_ref()
        })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cache(&self) -> &TemplateCache<E> {
        &self.cache
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl Renderer<Handlebars> {
    pub fn with_options(options: RenderOptions, mode: Mode) -> Self {
        Renderer::new(Handlebars::new(), options, mode)
    }
}

impl Default for Renderer<Handlebars> {
    fn default() -> Self {
        Renderer::with_options(RenderOptions::default(), Mode::default())
    }
}

impl<E: TemplateEngine> fmt::Debug for Renderer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("options", &self.options)
            .field("mode", &self.mode)
            .field("cache", &self.cache)
            .finish()
    }
}


/// A compiled template and its context, ready to be written to one response.
///
/// Rendering consumes the task.
pub struct RenderTask<'r, E: TemplateEngine> {
    template: Arc<E::Template>,
    context: JsonValue,
    options: &'r RenderOptions,
    engine: &'r E
}

impl<'r, E: TemplateEngine> RenderTask<'r, E> {
    /// Writes the content type, executes the template and writes its output.
    ///
    /// The header goes out before execution starts, so a failing template
    /// still leaves it on the sink, followed by whatever partial output the
    /// engine produced.
    pub fn render<S: RenderSink + ?Sized>(self, sink: &mut S) -> Result<(), RenderError> {
        self.write_content_type(sink);
        let mut output = String::new();
        let result = self.engine.execute(&self.template, &self.context, &mut output);
        if let Err(message) = &result {
            tracing::warn!(error = %message, written = output.len(), "template execution failed");
        }
        // a failed body write takes precedence over the execution error
        sink.write_body(output.as_bytes())?;
        result.map_err(|message| RenderError::Execute { message })
    }

    /// Sets the configured `Content-Type` unless the sink already has one.
    pub fn write_content_type<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        if sink.headers().contains_key(CONTENT_TYPE) {
            return;
        }
        let headers = sink.headers_mut();
        for value in &self.options.content_type {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.append(CONTENT_TYPE, value);
                },
                Err(_) => {
                    tracing::warn!(content_type = %value, "skipping invalid content type");
                }
            }
        }
    }

    pub fn context(&self) -> &JsonValue {
        &self.context
    }

    pub fn template(&self) -> &Arc<E::Template> {
        &self.template
    }
}

impl<E: TemplateEngine> fmt::Debug for RenderTask<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTask")
            .field("context", &self.context)
            .finish()
    }
}
