//! Content loaders for reading arena data from files.
//!
//! - `.ron` files are deserialized into arena-core types with serde
//! - every other extension is read as the line-oriented text format
//! - `.toml` rule files override [`arena_core::ArenaConfig`]

pub mod config;
pub mod ron;
pub mod text;

pub use config::ConfigLoader;
pub use ron::{ArenaDefinition, MonsterSpec, RonLoader};
pub use text::TextLoader;

use std::path::Path;

use crate::catalog::Catalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Load a catalog, picking the format from the file extension.
pub fn load_catalog(path: &Path) -> LoadResult<Catalog> {
    load_with_source(path).map(|(catalog, _)| catalog)
}

/// Like [`load_catalog`], also returning the raw file contents.
pub fn load_with_source(path: &Path) -> LoadResult<(Catalog, String)> {
    let (catalog, content) = match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => {
            let content = read_file(path)?;
            let catalog = RonLoader::parse(&content)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
            (catalog, content)
        }
        _ => TextLoader::load_with_source(path)?,
    };
    tracing::info!(
        actions = catalog.action_count(),
        monsters = catalog.monster_count(),
        "loaded {}",
        path.display()
    );
    Ok((catalog, content))
}
