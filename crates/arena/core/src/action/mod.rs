//! Actions and the effects they are built from.
//!
//! An [`Action`] is an immutable, named sequence of [`Effect`]s with an
//! element. Actions are shared between combatants via `Arc` and executed
//! through [`execute::execute_action`].

pub mod effect;
pub mod execute;

pub use effect::{
    Amount, ContinueEffect, Count, DamageEffect, Effect, EffectOutcome, HealEffect,
    InflictStatusEffect, ProtectEffect, RepeatEffect, StatChangeEffect, TargetSelector,
};
pub use execute::{ActionOutcome, EffectContext, build_queue, execute_action};

use crate::combat::Element;

/// A named, elemental sequence of effects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    name: String,
    element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    effects: Vec<Effect>,
}

impl Action {
    pub fn new(name: impl Into<String>, element: Element, effects: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            element,
            effects,
        }
    }

    /// Builder: append an effect.
    pub fn with_effect(mut self, effect: impl Into<Effect>) -> Self {
        self.effects.push(effect.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Hit rate of the first effect, looking through leading repeat blocks.
    pub fn first_hit_rate(&self) -> Option<u8> {
        first_leaf(&self.effects).map(Effect::hit_rate)
    }

    /// Returns true if any effect, including nested ones, targets an opponent.
    pub fn requires_target(&self) -> bool {
        fn any_opponent(effects: &[Effect]) -> bool {
            effects.iter().any(|effect| match effect {
                Effect::Repeat(repeat) => any_opponent(&repeat.effects),
                other => other.target() == TargetSelector::Opponent,
            })
        }
        any_opponent(&self.effects)
    }

    /// Short damage summary for action tables: `b30`, `r10`, `a20` or `--`.
    ///
    /// Only the first damage effect, in queue order, is summarised.
    pub fn damage_summary(&self) -> String {
        fn first_damage(effects: &[Effect]) -> Option<&DamageEffect> {
            effects.iter().find_map(|effect| match effect {
                Effect::Damage(damage) => Some(damage),
                Effect::Repeat(repeat) => first_damage(&repeat.effects),
                _ => None,
            })
        }
        match first_damage(&self.effects) {
            Some(damage) => damage.amount.to_string(),
            None => "--".to_owned(),
        }
    }
}

fn first_leaf(effects: &[Effect]) -> Option<&Effect> {
    effects.iter().find_map(|effect| match effect {
        Effect::Repeat(repeat) => first_leaf(&repeat.effects),
        other => Some(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    fn tackle() -> Action {
        Action::new("Tackle", Element::Normal, Vec::new())
            .with_effect(DamageEffect::new(TargetSelector::Opponent, Amount::Base(30), 90))
    }

    #[test]
    fn summary_reports_first_damage() {
        assert_eq!(tackle().damage_summary(), "b30");
        let buff = Action::new("Focus", Element::Normal, Vec::new())
            .with_effect(StatChangeEffect::new(TargetSelector::User, Stat::Atk, 1, 100));
        assert_eq!(buff.damage_summary(), "--");
    }

    #[test]
    fn requires_target_looks_into_repeats() {
        let flurry = Action::new("Flurry", Element::Water, Vec::new()).with_effect(
            RepeatEffect::new(
                Count::Fixed(2),
                vec![DamageEffect::new(TargetSelector::Opponent, Amount::Absolute(5), 80).into()],
            ),
        );
        assert!(flurry.requires_target());
        assert_eq!(flurry.first_hit_rate(), Some(80));

        let rest = Action::new("Rest", Element::Normal, Vec::new())
            .with_effect(HealEffect::new(TargetSelector::User, Amount::Relative(50), 100));
        assert!(!rest.requires_target());
    }
}
