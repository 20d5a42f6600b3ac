//! RON definition loader.

use std::path::Path;

use arena_core::{Action, BaseStats, Element};

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Top-level RON document.
///
/// ```ron
/// (
///     actions: [
///         (name: "Splash", element: WATER, effects: [
///             Damage((target: Opponent, amount: Base(30), hit_rate: 95)),
///         ]),
///     ],
///     monsters: [
///         (name: "Droplet", element: WATER,
///          stats: (hp: 40, atk: 12, def: 9, spd: 11),
///          actions: ["Splash"]),
///     ],
/// )
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ArenaDefinition {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub monsters: Vec<MonsterSpec>,
}

/// Monster template as written in RON; actions are referenced by name.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct MonsterSpec {
    pub name: String,
    pub element: Element,
    pub stats: BaseStats,
    pub actions: Vec<String>,
}

/// Loader for RON arena definitions.
pub struct RonLoader;

impl RonLoader {
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let definition: ArenaDefinition = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena RON: {}", e))?;
        Self::build(definition)
    }

    fn build(definition: ArenaDefinition) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new();
        for action in definition.actions {
            catalog.add_action(action)?;
        }
        for monster in definition.monsters {
            catalog.add_monster(
                monster.name,
                monster.element,
                monster.stats,
                monster.actions.as_slice(),
            )?;
        }
        Ok(catalog)
    }
}
