//! Decision source that asks the player for every random outcome.
use std::io::{self, Write};
use std::str::FromStr;

use arena_core::{Decision, DecisionSource};

use super::LineReader;

/// Prompts on `output` and reads the answer from `input`.
///
/// Invalid answers are rejected and asked again. When input runs out the
/// source falls back to a fixed answer: checks succeed only at 100 percent,
/// factors take the maximum and counts the minimum.
pub struct PromptDecisions<R, W> {
    input: R,
    output: W,
}

impl PromptDecisions<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> PromptDecisions<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Ask `question` until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        question: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Option<T> {
        loop {
            // Prompt output is best effort.
            let _ = write!(self.output, "{question}");
            let _ = self.output.flush();

            let line = match self.input.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(error) => {
                    tracing::warn!("failed to read decision: {error}");
                    return None;
                }
            };
            if let Some(answer) = parse(line.trim()) {
                return Some(answer);
            }
            let _ = writeln!(self.output, "Error, {retry}");
        }
    }
}

fn parse_in_range<T: FromStr + PartialOrd>(text: &str, min: T, max: T) -> Option<T> {
    text.parse()
        .ok()
        .filter(|value: &T| *value >= min && *value <= max)
}

impl<R: LineReader, W: Write> DecisionSource for PromptDecisions<R, W> {
    fn check(&mut self, decision: Decision, probability: f64) -> bool {
        let question = format!("Decide {}: yes or no? (y/n) ", decision.as_str());
        let answer = self.ask(&question, "enter y or n.", |text| {
            match text.to_ascii_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            }
        });
        answer.unwrap_or_else(|| {
            tracing::warn!(?decision, "no answer, falling back");
            probability >= 100.0
        })
    }

    fn factor(&mut self, min: f64, max: f64) -> f64 {
        let question = format!("Decide random value: a double between {min:.2} and {max:.2}? ");
        let retry = format!("enter a number between {min:.2} and {max:.2}.");
        self.ask(&question, &retry, |text| parse_in_range(text, min, max))
            .unwrap_or(max)
    }

    fn count(&mut self, min: u32, max: u32) -> u32 {
        let max = max.max(min);
        let question = format!("Decide random count: an integer between {min} and {max}? ");
        let retry = format!("enter an integer between {min} and {max}.");
        self.ask(&question, &retry, |text| parse_in_range(text, min, max))
            .unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(answers: &str) -> PromptDecisions<io::Cursor<String>, Vec<u8>> {
        PromptDecisions::new(io::Cursor::new(answers.to_owned()), Vec::new())
    }

    #[test]
    fn asks_until_yes_or_no() {
        let mut decisions = prompt("maybe\nY\n");
        assert!(decisions.check(Decision::EffectHit, 10.0));

        let output = String::from_utf8(decisions.into_output()).unwrap();
        assert_eq!(
            output,
            "Decide effect hit: yes or no? (y/n) Error, enter y or n.\n\
             Decide effect hit: yes or no? (y/n) "
        );
    }

    #[test]
    fn numbers_must_be_in_range() {
        let mut decisions = prompt("1.5\n0.9\n7\n3\n");
        assert_eq!(decisions.factor(0.85, 1.0), 0.9);
        assert_eq!(decisions.count(2, 4), 3);

        let output = String::from_utf8(decisions.into_output()).unwrap();
        assert!(output.starts_with("Decide random value: a double between 0.85 and 1.00? "));
        assert!(output.contains("Error, enter an integer between 2 and 4."));
    }

    #[test]
    fn end_of_input_falls_back() {
        let mut decisions = prompt("");
        assert!(!decisions.check(Decision::CriticalHit, 50.0));
        assert!(decisions.check(Decision::EffectHit, 100.0));
        assert_eq!(decisions.factor(0.85, 1.0), 1.0);
        assert_eq!(decisions.count(2, 5), 2);
    }
}
