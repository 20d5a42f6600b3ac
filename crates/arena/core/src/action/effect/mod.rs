//! Effect system - the atomic steps an action is built from.
//!
//! This module uses an **Enum + Struct hybrid** approach:
//! - Each effect is a struct ([`DamageEffect`], [`HealEffect`], ...) carrying
//!   its own payload and `apply` method
//! - [`Effect`] wraps them for serialization and dispatches in one `match`
//!
//! Effects never roll their own hit: the pipeline in
//! [`execute`](crate::action::execute) resolves the target, rolls the hit and
//! only then calls `apply`. An effect against a defeated target changes
//! nothing and reports [`EffectOutcome::Miss`].

mod damage;
mod flow;
mod heal;
mod kinds;
mod params;
mod protect;
mod stat_change;
mod status;

pub use damage::DamageEffect;
pub use flow::{ContinueEffect, RepeatEffect};
pub use heal::HealEffect;
pub use kinds::{Effect, EffectOutcome};
pub use params::{Amount, Count, TargetSelector};
pub use protect::ProtectEffect;
pub use stat_change::StatChangeEffect;
pub use status::InflictStatusEffect;
