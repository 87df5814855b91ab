use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Deserializer, Serialize};
use crate::ConfigError;


pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_CONTENT_TYPE: &str = "text/html; charset=utf-8";


/// Settings shared by every render, fixed when the [`Renderer`] is built.
///
/// [`Renderer`]: crate::Renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Directory template names are resolved against.
    pub template_dir: PathBuf,

    /// `Content-Type` values written when the response has none.
    #[serde(deserialize_with = "one_or_many")]
    pub content_type: Vec<String>,
}

impl RenderOptions {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        RenderOptions {
            template_dir: template_dir.into(),
            ..RenderOptions::default()
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = vec![content_type.to_owned()];
        self
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str::<RenderOptions>(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(
            |source| ConfigError::Read { path: path.to_owned(), source }
        )?;
        RenderOptions::from_yaml(&text)
    }

    /// Joins `name` under the template directory.
    ///
    /// An empty name yields the directory itself. Leading separators are
    /// dropped so the result stays under the directory lexically, but `..`
    /// segments are kept as given: never pass raw user input as a name.
    pub fn template_path(&self, name: &str) -> PathBuf {
        let name = name.trim_start_matches('/');
        if name.is_empty() {
            self.template_dir.clone()
        } else {
            self.template_dir.join(name)
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            content_type: vec![DEFAULT_CONTENT_TYPE.to_owned()],
        }
    }
}


/// Whether templates are served from the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every render reads and compiles the template file again.
    Debug,
    /// Templates are compiled once and cached for the process lifetime.
    #[default]
    Release,
}


fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where D: Deserializer<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values
    })
}
