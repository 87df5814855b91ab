use crate::{IntoContext, RenderError};
pub use serde_json::Value as JsonValue;


impl IntoContext for JsonValue {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        Ok(self)
    }
}

impl IntoContext for &JsonValue {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        Ok(self.clone())
    }
}
