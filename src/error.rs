use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;


/// A template file could not be turned into a compiled template.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("cannot compile template {}: {message}", path.display())]
    Compile {
        path: PathBuf,
        message: String
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } => path.as_path(),
            LoadError::Compile { path, .. } => path.as_path()
        }
    }
}


#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot build template context: {0}")]
    Context(String),

    /// The template failed while executing against its context. The header
    /// and any partial output were already written to the sink.
    #[error("template execution failed: {message}")]
    Execute {
        message: String
    },

    #[error("cannot write response: {0}")]
    Io(#[from] io::Error),
}


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read options file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("invalid options: {0}")]
    Parse(#[from] serde_yaml::Error),
}
