//! Text rendering of contest events and status displays.
//!
//! The engine reports structured [`arena_core::BattleEvent`]s; everything the
//! player reads is worded here.

pub mod narrative;
pub mod tables;

pub use narrative::narrate;
pub use tables::{action_table, monster_line, roster_table, stat_line};
