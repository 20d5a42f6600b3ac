//! Scripted decisions for debugging and tests.

use std::collections::VecDeque;

use super::{Decision, DecisionSource};

/// One query made against a decision source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Query {
    Check(Decision),
    Factor { min: f64, max: f64 },
    Count { min: u32, max: u32 },
}

/// Decision source that replays answers supplied in advance.
///
/// Each query kind has its own answer queue. When a queue runs dry the
/// source falls back to a fixed answer: checks return the configured
/// fallback (`true` unless changed), factors return `max`, counts return
/// `min`. Every query is recorded so tests can assert on call order.
#[derive(Clone, Debug)]
pub struct ScriptedDecisions {
    checks: VecDeque<bool>,
    factors: VecDeque<f64>,
    counts: VecDeque<u32>,
    fallback_check: bool,
    history: Vec<Query>,
}

impl Default for ScriptedDecisions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self {
            checks: VecDeque::new(),
            factors: VecDeque::new(),
            counts: VecDeque::new(),
            fallback_check: true,
            history: Vec::new(),
        }
    }

    /// Builder: queue yes/no answers.
    pub fn checks(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.checks.extend(answers);
        self
    }

    /// Builder: queue factor answers.
    pub fn factors(mut self, answers: impl IntoIterator<Item = f64>) -> Self {
        self.factors.extend(answers);
        self
    }

    /// Builder: queue count answers.
    pub fn counts(mut self, answers: impl IntoIterator<Item = u32>) -> Self {
        self.counts.extend(answers);
        self
    }

    /// Builder: answer for checks once the queue is empty.
    pub fn otherwise(mut self, answer: bool) -> Self {
        self.fallback_check = answer;
        self
    }

    /// Every query made so far, in order.
    pub fn history(&self) -> &[Query] {
        &self.history
    }
}

impl DecisionSource for ScriptedDecisions {
    fn check(&mut self, decision: Decision, _probability: f64) -> bool {
        self.history.push(Query::Check(decision));
        self.checks.pop_front().unwrap_or(self.fallback_check)
    }

    fn factor(&mut self, min: f64, max: f64) -> f64 {
        self.history.push(Query::Factor { min, max });
        self.factors.pop_front().unwrap_or(max).clamp(min, max)
    }

    fn count(&mut self, min: u32, max: u32) -> u32 {
        self.history.push(Query::Count { min, max });
        self.counts.pop_front().unwrap_or(min).clamp(min, max.max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_falls_back() {
        let mut source = ScriptedDecisions::new()
            .checks([false, true])
            .otherwise(false);

        assert!(!source.check(Decision::EffectHit, 100.0));
        assert!(source.check(Decision::EffectHit, 0.0));
        assert!(!source.check(Decision::EffectHit, 100.0));
    }

    #[test]
    fn clamps_out_of_range_answers() {
        let mut source = ScriptedDecisions::new().factors([3.0]).counts([9, 0]);
        assert_eq!(source.factor(0.85, 1.0), 1.0);
        assert_eq!(source.count(1, 4), 4);
        assert_eq!(source.count(1, 4), 1);
        assert_eq!(source.factor(0.85, 1.0), 1.0);
    }

    #[test]
    fn records_history() {
        let mut source = ScriptedDecisions::new();
        source.check(Decision::CriticalHit, 10.0);
        source.factor(0.85, 1.0);
        source.count(2, 3);
        assert_eq!(
            source.history(),
            &[
                Query::Check(Decision::CriticalHit),
                Query::Factor {
                    min: 0.85,
                    max: 1.0
                },
                Query::Count { min: 2, max: 3 },
            ]
        );
    }
}
