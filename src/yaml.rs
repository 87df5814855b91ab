use crate::{IntoContext, JsonValue, RenderError};
pub use serde_yaml::Value as YamlValue;


impl IntoContext for YamlValue {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        (&self).into_context()
    }
}

impl IntoContext for &YamlValue {
    fn into_context(self) -> Result<JsonValue, RenderError> {
        // mappings with non-string keys have no JSON form
        serde_json::to_value(self).map_err(
            |err| RenderError::Context(format!("yaml: {}", err))
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_mapping_becomes_json_object() {
        let yaml = serde_yaml::from_str::<YamlValue>("name: World\ncount: 2\n").unwrap();
        let context = yaml.into_context().unwrap();
        assert_eq!(context, serde_json::json!({"name": "World", "count": 2}));
    }

    #[test]
    fn yaml_sequence_key_is_rejected() {
        let yaml = serde_yaml::from_str::<YamlValue>("? [a, b]\n: c\n").unwrap();
        assert!(matches!(yaml.into_context(), Err(RenderError::Context(_))));
    }
}
