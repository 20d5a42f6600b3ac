//! Text-format file loader.

use std::path::Path;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};
use crate::text;

/// Loader for the line-oriented configuration format.
pub struct TextLoader;

impl TextLoader {
    /// Load a catalog from a text configuration file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        Self::load_with_source(path).map(|(catalog, _)| catalog)
    }

    /// Load a catalog and return the raw file contents alongside it.
    pub fn load_with_source(path: &Path) -> LoadResult<(Catalog, String)> {
        let content = read_file(path)?;
        let catalog = text::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok((catalog, content))
    }
}
