use serde::Serialize;
use crate::{JsonValue, RenderError};


/// Conversion of request data into the context a template executes against.
pub trait IntoContext {
    fn into_context(self) -> Result<JsonValue, RenderError>;
}


/// Any serializable value, used as a template context.
///
/// ```
/// use hbs_render::{Data, IntoContext};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page { title: &'static str }
///
/// let context = Data(Page { title: "home" }).into_context().unwrap();
/// assert_eq!(context["title"], "home");
/// ```
#[derive(Debug, Clone)]
pub struct Data<T>(pub T);

impl<T: Serialize> IntoContext for Data<T> {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        serde_json::to_value(&self.0).map_err(
            |err| RenderError::Context(err.to_string())
        )
    }
}

impl IntoContext for () {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        Ok(JsonValue::Null)
    }
}
