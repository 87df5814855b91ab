//! Handlebars templates as the HTML renderer of a web framework.
//!
//! A [`Renderer`] resolves template names against a directory, compiles the
//! files through a [`TemplateEngine`] and hands out a [`RenderTask`] per
//! response. Rendering a task writes a `Content-Type` header and the
//! template output to a [`RenderSink`].
//!
//! In [`Mode::Release`] compiled templates are kept in a [`TemplateCache`]
//! for the life of the process. In [`Mode::Debug`] every render reads the
//! file again so edits show up immediately.
//!
//! The engine is the `handlebars` crate by default ([`Handlebars`]); any
//! other engine can be plugged in by implementing [`TemplateEngine`].
//!
//!
//! # Samples
//!
//! ## Hello world
//!
//! ```
//! use hbs_render::{Mode, RenderOptions, Renderer};
//! use serde_json::json;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("hello.hbs"), "Hello {{name}}").unwrap();
//!
//! let renderer = Renderer::with_options(RenderOptions::new(dir.path()), Mode::Release);
//! let mut response = http::Response::new(Vec::new());
//!
//! renderer.prepare("hello.hbs", json!({"name": "World"})).unwrap()
//!     .render(&mut response).unwrap();
//!
//! assert_eq!(response.body(), b"Hello World");
//! assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
//! ```
//!
//! ## Hello team, from YAML data
//!
//! ```
//! use hbs_render::{Mode, RenderOptions, Renderer, YamlValue};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(
//!     dir.path().join("team.hbs"),
//!     "{{#each team}}hello, {{address}} {{name}}! {{/each}}"
//! ).unwrap();
//! let data = r#"
//!   team:
//!     - name: john
//!       address: little
//!     - name: 42
//!       address: citizen
//! "#;
//!
//! let renderer = Renderer::with_options(RenderOptions::new(dir.path()), Mode::Debug);
//! let context = serde_yaml::from_str::<YamlValue>(data).unwrap();
//! let mut response = http::Response::new(Vec::new());
//!
//! renderer.prepare("team.hbs", context).unwrap()
//!     .render(&mut response).unwrap();
//!
//! assert_eq!(response.body(), b"hello, little john! hello, citizen 42! ");
//! ```
mod cache;
mod context;
mod error;
mod json;
mod options;
mod render;
mod sink;
mod template;
mod yaml;
pub mod hook;
#[cfg(feature = "axum")]
mod axum;

pub use self::cache::{TemplateCache, load_template};
pub use self::context::{IntoContext, Data};
pub use self::error::{LoadError, RenderError, ConfigError};
pub use self::json::JsonValue;
pub use self::options::{RenderOptions, Mode, DEFAULT_CONTENT_TYPE, DEFAULT_TEMPLATE_DIR};
pub use self::render::{Renderer, RenderTask};
pub use self::sink::RenderSink;
pub use self::template::{TemplateEngine, Handlebars};
pub use self::yaml::YamlValue;
