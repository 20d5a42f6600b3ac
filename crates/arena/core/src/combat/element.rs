//! Element chart.

use crate::config::ArenaConfig;

/// Elemental affinity of combatants and actions.
///
/// Advantage is cyclic: WATER beats FIRE, FIRE beats EARTH, EARTH beats
/// WATER. NORMAL is neutral against everything.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Element {
    Normal,
    Water,
    Fire,
    Earth,
}

impl Element {
    /// Returns true if attacks of this element are very effective against `target`.
    pub const fn is_very_effective_against(self, target: Element) -> bool {
        matches!(
            (self, target),
            (Element::Water, Element::Fire)
                | (Element::Fire, Element::Earth)
                | (Element::Earth, Element::Water)
        )
    }

    /// Returns true if attacks of this element are not very effective against `target`.
    pub const fn is_not_very_effective_against(self, target: Element) -> bool {
        target.is_very_effective_against(self)
    }

    /// Classify an attack of this element against `target`.
    pub const fn effectiveness_against(self, target: Element) -> Effectiveness {
        if self.is_very_effective_against(target) {
            Effectiveness::Super
        } else if self.is_not_very_effective_against(target) {
            Effectiveness::Weak
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Outcome of the element chart for one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Super,
    Neutral,
    Weak,
}

impl Effectiveness {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Super => ArenaConfig::SUPER_EFFECTIVE_MULTIPLIER,
            Self::Neutral => 1.0,
            Self::Weak => ArenaConfig::NOT_EFFECTIVE_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn advantage_is_cyclic() {
        assert_eq!(
            Element::Water.effectiveness_against(Element::Fire),
            Effectiveness::Super
        );
        assert_eq!(
            Element::Fire.effectiveness_against(Element::Earth),
            Effectiveness::Super
        );
        assert_eq!(
            Element::Earth.effectiveness_against(Element::Water),
            Effectiveness::Super
        );
        assert_eq!(
            Element::Fire.effectiveness_against(Element::Water),
            Effectiveness::Weak
        );
    }

    #[test]
    fn normal_and_same_element_are_neutral() {
        for element in Element::iter() {
            assert_eq!(
                element.effectiveness_against(element),
                Effectiveness::Neutral
            );
            assert_eq!(
                Element::Normal.effectiveness_against(element),
                Effectiveness::Neutral
            );
            assert_eq!(
                element.effectiveness_against(Element::Normal),
                Effectiveness::Neutral
            );
        }
    }

    #[test]
    fn multipliers() {
        assert_eq!(Effectiveness::Super.multiplier(), 2.0);
        assert_eq!(Effectiveness::Neutral.multiplier(), 1.0);
        assert_eq!(Effectiveness::Weak.multiplier(), 0.5);
    }
}
