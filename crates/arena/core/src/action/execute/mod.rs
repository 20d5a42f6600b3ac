//! Action execution: queue construction and the resolution loop.
//!
//! ```text
//! Action.effects ──build_queue──▶ flat queue ──execute_action──▶ events
//!   (repeats expanded, ranged durations fixed)   (hit rolls, cascading rule)
//! ```

mod context;
mod pipeline;
mod queue;

pub use context::EffectContext;
pub use pipeline::{ActionOutcome, execute_action};
pub use queue::build_queue;
