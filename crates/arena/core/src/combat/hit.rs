//! Hit chance calculation.

/// Calculate the hit chance of an effect in percent.
///
/// # Formula
///
/// ```text
/// self-targeted:  hit_rate
/// otherwise:      hit_rate × precision / agility
/// ```
///
/// The result is not clamped; a chance above 100 always hits and a chance of
/// 0 only hits on a roll of exactly 0.
pub fn hit_chance(hit_rate: u8, targets_actor: bool, precision: f64, agility: f64) -> f64 {
    let base = f64::from(hit_rate);
    if targets_actor {
        base
    } else {
        base * precision / agility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_targeted_ignores_precision() {
        assert_eq!(hit_chance(80, true, 3.0, 1.0), 80.0);
    }

    #[test]
    fn opponent_scales_by_precision_over_agility() {
        assert_eq!(hit_chance(80, false, 1.0, 1.0), 80.0);
        assert_eq!(hit_chance(80, false, 1.0, 2.0), 40.0);
        assert_eq!(hit_chance(60, false, 2.0, 1.0), 120.0);
    }
}
