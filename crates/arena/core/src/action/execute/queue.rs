//! Effect queue construction.

use std::collections::VecDeque;

use crate::action::effect::{Count, Effect};
use crate::decision::DecisionSource;

/// Flatten an effect list into the queue the pipeline executes.
///
/// Every repeat block is replaced by `count` copies of its sub-sequence; a
/// ranged count is drawn once per block. Ranged protect durations are drawn
/// here as well so each queued protect carries a fixed duration. Draws happen
/// in effect order, before any effect resolves.
pub fn build_queue(effects: &[Effect], decisions: &mut dyn DecisionSource) -> VecDeque<Effect> {
    let mut queue = VecDeque::new();
    expand_into(effects, decisions, &mut queue);
    queue
}

fn expand_into(effects: &[Effect], decisions: &mut dyn DecisionSource, queue: &mut VecDeque<Effect>) {
    for effect in effects {
        match effect {
            Effect::Repeat(repeat) => {
                let count = repeat.count.resolve(decisions);
                // The sub-sequence is expanded once so nested ranged counts
                // are drawn once per enclosing block.
                let mut block = VecDeque::new();
                expand_into(&repeat.effects, decisions, &mut block);
                for _ in 0..count {
                    queue.extend(block.iter().cloned());
                }
            }
            Effect::Protect(protect) if !protect.duration.is_fixed() => {
                let mut fixed = protect.clone();
                fixed.duration = Count::Fixed(protect.duration.resolve(decisions));
                queue.push_back(Effect::Protect(fixed));
            }
            other => queue.push_back(other.clone()),
        }
    }
}
