//! Adapters for framework rendering hooks that cannot return errors.
//!
//! A framework calls [`HtmlRender::instance`] once per response and then
//! [`Render::render`] on the result. Because `instance` has no error channel,
//! a template that cannot be loaded is a fatal fault there: the hook panics
//! instead of handing back a renderer that would produce an empty page.
//! Code that can propagate errors should call [`Renderer::prepare`] directly.
use crate::{
    JsonValue, RenderError, RenderSink, RenderTask, Renderer, TemplateEngine,
};


/// A prepared response body, the per-request half of a rendering hook.
pub trait Render {
    fn render(self: Box<Self>, sink: &mut dyn RenderSink) -> Result<(), RenderError>;

    fn write_content_type(&self, sink: &mut dyn RenderSink);
}

/// The process-wide half of a rendering hook.
pub trait HtmlRender {
    /// # Panics
    ///
    /// Panics when the template named `name` cannot be read or compiled, or
    /// when `data` cannot be used as a template context.
    fn instance(&self, name: &str, data: JsonValue) -> Box<dyn Render + '_>;
}


impl<E: TemplateEngine> Render for RenderTask<'_, E> {
    fn render(self: Box<Self>, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        RenderTask::render(*self, sink)
    }

    fn write_content_type(&self, sink: &mut dyn RenderSink) {
        RenderTask::write_content_type(self, sink)
    }
}

impl<E: TemplateEngine> HtmlRender for Renderer<E> {
    fn instance(&self, name: &str, data: JsonValue) -> Box<dyn Render + '_> {
        match self.prepare(name, data) {
            Ok(task) => Box::new(task),
            Err(err) => {
                tracing::error!(template = name, error = %err, "cannot prepare template");
                panic!("{}", err)
            }
        }
    }
}
