use bitflags::bitflags;

bitflags! {
    /// What a protection window guards against.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Guard: u8 {
        /// Damage from opponents.
        const HEALTH = 1 << 0;
        /// Stat decreases from opponents.
        const STATS = 1 << 1;
    }
}

/// Temporary protection of a combatant.
///
/// The window lasts `remaining` rounds and is counted down once at the end of
/// every round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectionWindow {
    pub guards: Guard,
    pub remaining: u32,
}

impl ProtectionWindow {
    pub fn new(guards: Guard, remaining: u32) -> Self {
        Self { guards, remaining }
    }

    pub fn guards_health(&self) -> bool {
        self.guards.contains(Guard::HEALTH)
    }

    pub fn guards_stats(&self) -> bool {
        self.guards.contains(Guard::STATS)
    }

    /// Count the window down by one round.
    ///
    /// Returns true when the window just expired while still guarding
    /// something. A window that is already at zero stays untouched.
    pub fn decrease(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return false;
        }
        let was_guarding = !self.guards.is_empty();
        self.guards = Guard::empty();
        was_guarding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_round_window_expires_on_second_decrease() {
        let mut window = ProtectionWindow::new(Guard::HEALTH, 2);
        assert!(!window.decrease());
        assert!(window.guards_health());
        assert!(window.decrease());
        assert!(!window.guards_health());
        assert!(!window.decrease());
    }

    #[test]
    fn empty_window_never_reports_expiry() {
        let mut window = ProtectionWindow::new(Guard::empty(), 1);
        assert!(!window.decrease());
        assert_eq!(window.remaining, 0);
    }
}
