//! Damage and healing magnitudes.

use super::element::Effectiveness;
use crate::config::ArenaConfig;

/// Inputs of the BASE damage formula, with every random outcome already decided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseDamage {
    /// Base value of the damage effect.
    pub base: u32,
    /// Action element against target element.
    pub effectiveness: Effectiveness,
    /// Actor's effective ATK.
    pub attack: f64,
    /// Target's effective DEF.
    pub defense: f64,
    /// Whether the critical roll succeeded.
    pub critical: bool,
    /// Whether the action shares the actor's element.
    pub same_element: bool,
    /// Uniform factor in [0.85, 1.0].
    pub random_factor: f64,
}

impl BaseDamage {
    /// Calculate damage.
    ///
    /// # Formula
    ///
    /// ```text
    /// ceil(base × element × (ATK / DEF) × critical × same_element × random / 3)
    /// ```
    pub fn calculate(&self) -> u32 {
        let critical = if self.critical {
            ArenaConfig::CRITICAL_MULTIPLIER
        } else {
            1.0
        };
        let same_element = if self.same_element {
            ArenaConfig::SAME_ELEMENT_MULTIPLIER
        } else {
            1.0
        };
        let total = f64::from(self.base)
            * self.effectiveness.multiplier()
            * (self.attack / self.defense)
            * critical
            * same_element
            * self.random_factor
            / f64::from(ArenaConfig::NORMALIZATION_DIVISOR);

        // Saturating float-to-int cast; negative inputs cannot occur.
        total.ceil() as u32
    }
}

/// Critical hit chance in percent: `10 × actor SPD / target SPD`.
pub fn critical_chance(actor_speed: f64, target_speed: f64) -> f64 {
    ArenaConfig::CRITICAL_BASE_CHANCE * actor_speed / target_speed
}

/// `ceil(max_hp × percent / 100)` in exact integer arithmetic.
pub fn relative_amount(max_hp: u32, percent: u32) -> u32 {
    let scaled = u64::from(max_hp) * u64::from(percent);
    u32::try_from(scaled.div_ceil(100)).unwrap_or(u32::MAX)
}

/// BASE healing: `ceil(value / 3)` with none of the damage modifiers.
pub fn base_healing(value: u32) -> u32 {
    value.div_ceil(ArenaConfig::NORMALIZATION_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_example_deals_sixty() {
        let damage = BaseDamage {
            base: 30,
            effectiveness: Effectiveness::Super,
            attack: 20.0,
            defense: 10.0,
            critical: false,
            same_element: true,
            random_factor: 1.0,
        };
        assert_eq!(damage.calculate(), 60);
    }

    #[test]
    fn critical_doubles_and_weak_halves() {
        let mut damage = BaseDamage {
            base: 30,
            effectiveness: Effectiveness::Neutral,
            attack: 10.0,
            defense: 10.0,
            critical: false,
            same_element: false,
            random_factor: 1.0,
        };
        assert_eq!(damage.calculate(), 10);

        damage.critical = true;
        assert_eq!(damage.calculate(), 20);

        damage.effectiveness = Effectiveness::Weak;
        assert_eq!(damage.calculate(), 10);
    }

    #[test]
    fn rounds_up() {
        let damage = BaseDamage {
            base: 10,
            effectiveness: Effectiveness::Neutral,
            attack: 10.0,
            defense: 10.0,
            critical: false,
            same_element: false,
            random_factor: 0.85,
        };
        // 10 × 0.85 / 3 = 2.83…
        assert_eq!(damage.calculate(), 3);
    }

    #[test]
    fn critical_chance_scales_with_speed() {
        assert_eq!(critical_chance(10.0, 10.0), 10.0);
        assert_eq!(critical_chance(20.0, 10.0), 20.0);
        assert_eq!(critical_chance(5.0, 10.0), 5.0);
    }

    #[test]
    fn relative_amount_rounds_up() {
        assert_eq!(relative_amount(100, 10), 10);
        assert_eq!(relative_amount(55, 10), 6);
        assert_eq!(relative_amount(1, 1), 1);
        assert_eq!(relative_amount(80, 0), 0);
    }

    #[test]
    fn base_healing_is_a_plain_third() {
        assert_eq!(base_healing(30), 10);
        assert_eq!(base_healing(31), 11);
        assert_eq!(base_healing(0), 0);
    }
}
