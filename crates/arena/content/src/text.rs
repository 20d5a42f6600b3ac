//! Line-oriented configuration format.
//!
//! ```text
//! action <name> <ELEMENT>
//!     damage <user|target> <base|rel|abs> <value> <hitrate>
//!     heal <user|target> <base|rel|abs> <value> <hitrate>
//!     inflictStatChange <user|target> <STAT> <stages> <hitrate>
//!     inflictStatusCondition <user|target> <CONDITION> <hitrate>
//!     protectStat <health|stats> <n | random <min> <max>> <hitrate>
//!     continue <hitrate>
//!     repeat <n | random <min> <max>>
//!         ...
//!     end repeat
//! end action
//!
//! monster <name> <ELEMENT> <hp> <atk> <def> <spd> <action>...
//! ```
//!
//! Lines are trimmed and blank lines ignored. Repeat blocks nest. Actions
//! must be defined before the monsters that use them.

use std::str::{FromStr, SplitWhitespace};

use arena_core::{
    Action, Amount, BaseStats, ContinueEffect, Count, DamageEffect, Effect, Element, Guard,
    HealEffect, InflictStatusEffect, ProtectEffect, RepeatEffect, Stat, StatChangeEffect,
    StatusCondition, TargetSelector,
};

use crate::catalog::{Catalog, CatalogError};

/// A parse failure with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected line `{0}`")]
    UnexpectedLine(String),

    #[error("unknown effect `{0}`")]
    UnknownEffect(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unexpected trailing `{0}`")]
    Trailing(String),

    #[error("invalid element `{0}`")]
    InvalidElement(String),

    #[error("invalid stat `{0}`")]
    InvalidStat(String),

    #[error("invalid status condition `{0}`")]
    InvalidCondition(String),

    #[error("invalid target `{0}`, expected user or target")]
    InvalidTarget(String),

    #[error("invalid amount mode `{0}`, expected base, rel or abs")]
    InvalidMode(String),

    #[error("invalid protection `{0}`, expected health or stats")]
    InvalidProtection(String),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("hit rate {0} is outside 0-100")]
    HitRateOutOfRange(u32),

    #[error("range {min}..{max} is inverted")]
    InvertedRange { min: u32, max: u32 },

    #[error("`end repeat` without a matching `repeat`")]
    UnbalancedEndRepeat,

    #[error("repeat block is not closed before `end action`")]
    UnterminatedRepeat,

    #[error("action {0} is missing `end action`")]
    UnterminatedAction(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a whole configuration into a catalog.
pub fn parse(source: &str) -> Result<Catalog, ParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut catalog = Catalog::new();
    while let Some((number, line)) = lines.next() {
        let at = |kind| ParseError { line: number, kind };
        let mut fields = Fields::new(line);
        match fields.word("keyword").map_err(at)? {
            "action" => {
                let action = parse_action(&mut fields, &mut lines).map_err(|error| match error {
                    Located::At(line, kind) => ParseError { line, kind },
                    Located::Here(kind) => at(kind),
                })?;
                catalog.add_action(action).map_err(|e| at(e.into()))?;
            }
            "monster" => parse_monster(&mut fields, &mut catalog).map_err(at)?,
            _ => return Err(at(ParseErrorKind::UnexpectedLine(line.to_owned()))),
        }
    }
    Ok(catalog)
}

/// Error from inside an action block, which spans several lines.
enum Located {
    /// On the header line.
    Here(ParseErrorKind),
    At(usize, ParseErrorKind),
}

/// One open block while reading an action: the action itself or a repeat.
struct Frame {
    count: Option<Count>,
    effects: Vec<Effect>,
}

fn parse_action<'a>(
    header: &mut Fields<'_>,
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<Action, Located> {
    let name = header.word("action name").map_err(Located::Here)?.to_owned();
    let element = header.element().map_err(Located::Here)?;
    header.finish().map_err(Located::Here)?;

    let mut stack = vec![Frame {
        count: None,
        effects: Vec::new(),
    }];

    for (number, line) in lines.by_ref() {
        let at = |kind| Located::At(number, kind);
        match line {
            "end action" => {
                if stack.len() > 1 {
                    return Err(at(ParseErrorKind::UnterminatedRepeat));
                }
                let effects = stack.pop().map(|frame| frame.effects).unwrap_or_default();
                return Ok(Action::new(name, element, effects));
            }
            "end repeat" => {
                if stack.len() < 2 {
                    return Err(at(ParseErrorKind::UnbalancedEndRepeat));
                }
                if let Some(Frame {
                    count: Some(count),
                    effects,
                }) = stack.pop()
                    && let Some(parent) = stack.last_mut()
                {
                    parent.effects.push(RepeatEffect::new(count, effects).into());
                }
            }
            _ => {
                let mut fields = Fields::new(line);
                let keyword = fields.word("effect").map_err(at)?;
                if keyword == "repeat" {
                    let count = fields.count().map_err(at)?;
                    fields.finish().map_err(at)?;
                    stack.push(Frame {
                        count: Some(count),
                        effects: Vec::new(),
                    });
                    continue;
                }
                let effect = parse_effect(keyword, &mut fields).map_err(at)?;
                fields.finish().map_err(at)?;
                if let Some(frame) = stack.last_mut() {
                    frame.effects.push(effect);
                }
            }
        }
    }

    Err(Located::Here(ParseErrorKind::UnterminatedAction(name)))
}

fn parse_effect(keyword: &str, fields: &mut Fields<'_>) -> Result<Effect, ParseErrorKind> {
    let effect: Effect = match keyword {
        "damage" => {
            let target = fields.target()?;
            let amount = fields.amount()?;
            DamageEffect::new(target, amount, fields.hit_rate()?).into()
        }
        "heal" => {
            let target = fields.target()?;
            let amount = fields.amount()?;
            HealEffect::new(target, amount, fields.hit_rate()?).into()
        }
        "inflictStatChange" => {
            let target = fields.target()?;
            let stat = fields.stat()?;
            let stages = fields.number::<i32>("stage change")?;
            StatChangeEffect::new(target, stat, stages, fields.hit_rate()?).into()
        }
        "inflictStatusCondition" => {
            let target = fields.target()?;
            let condition = fields.condition()?;
            InflictStatusEffect::new(target, condition, fields.hit_rate()?).into()
        }
        "protectStat" => {
            let guard = match fields.word("protection")? {
                "health" => Guard::HEALTH,
                "stats" => Guard::STATS,
                other => return Err(ParseErrorKind::InvalidProtection(other.to_owned())),
            };
            let duration = fields.count()?;
            ProtectEffect::new(guard, duration, fields.hit_rate()?).into()
        }
        "continue" => ContinueEffect::new(fields.hit_rate()?).into(),
        other => return Err(ParseErrorKind::UnknownEffect(other.to_owned())),
    };
    Ok(effect)
}

fn parse_monster(fields: &mut Fields<'_>, catalog: &mut Catalog) -> Result<(), ParseErrorKind> {
    let name = fields.word("monster name")?.to_owned();
    let element = fields.element()?;
    let hp = fields.number("hp")?;
    let atk = fields.number("atk")?;
    let def = fields.number("def")?;
    let spd = fields.number("spd")?;

    let actions: Vec<&str> = fields.rest().collect();
    if actions.is_empty() {
        return Err(ParseErrorKind::Missing("monster actions"));
    }

    let stats = BaseStats::new(hp, atk, def, spd);
    catalog.add_monster(name, element, stats, actions.as_slice())?;
    Ok(())
}

/// Whitespace-separated fields of one line.
struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn word(&mut self, what: &'static str) -> Result<&'a str, ParseErrorKind> {
        self.inner.next().ok_or(ParseErrorKind::Missing(what))
    }

    fn rest(&mut self) -> impl Iterator<Item = &'a str> + '_ {
        self.inner.by_ref()
    }

    fn finish(&mut self) -> Result<(), ParseErrorKind> {
        match self.inner.next() {
            Some(extra) => Err(ParseErrorKind::Trailing(extra.to_owned())),
            None => Ok(()),
        }
    }

    fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T, ParseErrorKind> {
        let word = self.word(what)?;
        word.parse()
            .map_err(|_| ParseErrorKind::InvalidNumber(word.to_owned()))
    }

    fn hit_rate(&mut self) -> Result<u8, ParseErrorKind> {
        let rate: u32 = self.number("hit rate")?;
        u8::try_from(rate)
            .ok()
            .filter(|&rate| rate <= 100)
            .ok_or(ParseErrorKind::HitRateOutOfRange(rate))
    }

    fn element(&mut self) -> Result<Element, ParseErrorKind> {
        let word = self.word("element")?;
        word.parse()
            .map_err(|_| ParseErrorKind::InvalidElement(word.to_owned()))
    }

    fn stat(&mut self) -> Result<Stat, ParseErrorKind> {
        let word = self.word("stat")?;
        word.parse::<Stat>()
            .ok()
            .filter(|stat| *stat != Stat::Hp)
            .ok_or_else(|| ParseErrorKind::InvalidStat(word.to_owned()))
    }

    fn condition(&mut self) -> Result<StatusCondition, ParseErrorKind> {
        let word = self.word("status condition")?;
        word.parse::<StatusCondition>()
            .ok()
            .filter(|condition| {
                !condition.is_none() && *condition != StatusCondition::Fainted
            })
            .ok_or_else(|| ParseErrorKind::InvalidCondition(word.to_owned()))
    }

    fn target(&mut self) -> Result<TargetSelector, ParseErrorKind> {
        match self.word("target")? {
            "user" => Ok(TargetSelector::User),
            "target" => Ok(TargetSelector::Opponent),
            other => Err(ParseErrorKind::InvalidTarget(other.to_owned())),
        }
    }

    fn amount(&mut self) -> Result<Amount, ParseErrorKind> {
        let mode = self.word("amount mode")?;
        let value = self.number("amount")?;
        match mode {
            "base" => Ok(Amount::Base(value)),
            "rel" => Ok(Amount::Relative(value)),
            "abs" => Ok(Amount::Absolute(value)),
            other => Err(ParseErrorKind::InvalidMode(other.to_owned())),
        }
    }

    /// `<n>` or `random <min> <max>`.
    fn count(&mut self) -> Result<Count, ParseErrorKind> {
        let word = self.word("count")?;
        if word != "random" {
            return word
                .parse()
                .map(Count::Fixed)
                .map_err(|_| ParseErrorKind::InvalidNumber(word.to_owned()));
        }
        let min = self.number("minimum")?;
        let max = self.number("maximum")?;
        if min > max {
            return Err(ParseErrorKind::InvertedRange { min, max });
        }
        Ok(Count::Random { min, max })
    }
}
