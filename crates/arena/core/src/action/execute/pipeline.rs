//! Effect resolution loop.
//!
//! 1. Build the flat queue
//! 2. Resolve the first entry: a miss (or a defeated target) fails the whole
//!    action and discards the rest
//! 3. Resolve every later entry independently; a miss skips only that entry

use crate::action::Action;
use crate::action::effect::{Effect, EffectOutcome};
use crate::combat::hit_chance;
use crate::decision::Decision;
use crate::error::ArenaError;
use crate::event::BattleEvent;
use crate::stats::Stat;

use super::context::EffectContext;
use super::queue::build_queue;

/// Result of executing one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action has no effects.
    NoEffect,
    /// The first effect missed; nothing else was attempted.
    Failed,
    /// The first effect landed; later entries landed or were skipped.
    Resolved { landed: u32, skipped: u32 },
}

/// Execute `action` for `ctx.actor` against `ctx.target`.
///
/// # Errors
///
/// Only invariant violations are errors: an unknown combatant id, an
/// opponent-targeting effect without a target, or a repeat block left in the
/// queue. Misses are reported through the outcome and the event log.
pub fn execute_action(
    action: &Action,
    ctx: &mut EffectContext<'_>,
) -> Result<ActionOutcome, ArenaError> {
    let mut queue = build_queue(action.effects(), &mut *ctx.decisions);

    let Some(first) = queue.pop_front() else {
        return Ok(ActionOutcome::NoEffect);
    };

    if !resolve_entry(&first, ctx)?.is_hit() {
        tracing::debug!(action = action.name(), "first effect missed, action failed");
        ctx.emit(BattleEvent::ActionFailed { actor: ctx.actor });
        return Ok(ActionOutcome::Failed);
    }

    let mut landed = 1;
    let mut skipped = 0;
    while let Some(effect) = queue.pop_front() {
        match resolve_entry(&effect, ctx)? {
            EffectOutcome::Hit => landed += 1,
            EffectOutcome::Miss => skipped += 1,
        }
    }

    Ok(ActionOutcome::Resolved { landed, skipped })
}

/// Roll the hit for one queued effect and apply it on success.
fn resolve_entry(effect: &Effect, ctx: &mut EffectContext<'_>) -> Result<EffectOutcome, ArenaError> {
    if matches!(effect, Effect::Repeat(_)) {
        return Err(ArenaError::UnexpandedRepeat);
    }

    let target = ctx.resolve(effect.target())?;
    let targets_actor = target == ctx.actor;
    let chance = hit_chance(
        effect.hit_rate(),
        targets_actor,
        ctx.combatant(ctx.actor)?.effective_stat(Stat::Prc),
        ctx.combatant(target)?.effective_stat(Stat::Agl),
    );

    if !ctx.decisions.check(Decision::EffectHit, chance) {
        tracing::trace!(?effect, chance, "effect missed");
        return Ok(EffectOutcome::Miss);
    }

    let outcome = effect.apply(target, ctx)?;
    tracing::trace!(?effect, ?outcome, "effect applied");
    Ok(outcome)
}
