//! Pure combat formulas.
//!
//! Everything here is free of state and randomness: callers roll the dice
//! through a [`DecisionSource`](crate::decision::DecisionSource) and pass the
//! outcomes in.

pub mod damage;
pub mod element;
pub mod hit;

pub use damage::{BaseDamage, base_healing, critical_chance, relative_amount};
pub use element::{Effectiveness, Element};
pub use hit::hit_chance;
