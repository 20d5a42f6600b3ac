//! Monster and action definitions and their loaders.
//!
//! This crate turns configuration into ready-to-fight combatants:
//! - the line-oriented text format ([`text`])
//! - RON definitions deserialized straight into arena-core types
//! - TOML rule overrides for [`arena_core::ArenaConfig`]
//!
//! Everything is collected into a [`Catalog`], which spawns fresh
//! [`arena_core::Combatant`]s from monster templates. Actions are shared
//! between every spawned combatant via `Arc`.

pub mod catalog;
pub mod text;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, CatalogError, MonsterTemplate};
pub use text::{ParseError, ParseErrorKind};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, LoadResult, RonLoader, TextLoader, load_catalog, load_with_source,
};
