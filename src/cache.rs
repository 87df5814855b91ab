use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use dashmap::DashMap;
use crate::{LoadError, TemplateEngine};


/// Compiled templates keyed by file path, filled on first access.
///
/// Entries are never evicted or replaced. Two threads missing on the same
/// path may both compile it; the first insert wins and both callers get
/// that entry back.
pub struct TemplateCache<E: TemplateEngine> {
    engine: Arc<E>,
    templates: DashMap<PathBuf, Arc<E::Template>>
}

impl<E: TemplateEngine> TemplateCache<E> {
    pub fn new(engine: Arc<E>) -> Self {
        TemplateCache {
            engine,
            templates: DashMap::new()
        }
    }

    pub fn get(&self, path: &Path) -> Option<Arc<E::Template>> {
        self.templates.get(path).map(|entry| Arc::clone(entry.value()))
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<E::Template>, LoadError> {
        if let Some(template) = self.get(path) {
            tracing::debug!(path = %path.display(), "template cache hit");
            return Ok(template);
        }
        tracing::debug!(path = %path.display(), "template cache miss");
        let loaded = Arc::new(load_template(self.engine.as_ref(), path)?);
        let template = self.templates
            .entry(path.to_owned())
            .or_insert(loaded)
            .value()
            .clone();
        Ok(template)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.templates.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<E: TemplateEngine> fmt::Debug for TemplateCache<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCache")
            .field("len", &self.templates.len())
            .finish()
    }
}


/// Reads and compiles the template at `path`, bypassing any cache.
pub fn load_template<E: TemplateEngine + ?Sized>(
    engine: &E, path: &Path
) -> Result<E::Template, LoadError> {
    let source = fs::read_to_string(path).map_err(
        |source| LoadError::Read { path: path.to_owned(), source }
    )?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "compiling template");
    engine.compile(&source).map_err(
        |message| LoadError::Compile { path: path.to_owned(), message }
    )
}
