//! Command line parsing.
use std::path::PathBuf;

use arena_core::{ArenaError, ErrorSeverity, GameError};

/// Errors reported to the player as `Error, <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("empty command.")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Expected {expected} arguments, got {got}")]
    ArgCount { expected: usize, got: usize },

    #[error("Expected at least {min} arguments, got {got}")]
    TooFewArgs { min: usize, got: usize },

    #[error("Unknown show command: {0}")]
    UnknownShow(String),

    #[error("Not in a competition.")]
    NotInCompetition,

    #[error("no monster is currently active.")]
    NoActiveMonster,

    #[error("monster {0} not found.")]
    UnknownMonster(String),

    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error(transparent)]
    Load(#[from] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Arena(error) => error.severity(),
            Self::Io(_) => ErrorSeverity::Fatal,
            Self::Load(_) | Self::UnknownMonster(_) | Self::NoActiveMonster => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "CLI_EMPTY",
            Self::Unknown(_) => "CLI_UNKNOWN_COMMAND",
            Self::ArgCount { .. } | Self::TooFewArgs { .. } => "CLI_ARG_COUNT",
            Self::UnknownShow(_) => "CLI_UNKNOWN_SHOW",
            Self::NotInCompetition => "CLI_NOT_IN_COMPETITION",
            Self::NoActiveMonster => "CLI_NO_ACTIVE_MONSTER",
            Self::UnknownMonster(_) => "CLI_UNKNOWN_MONSTER",
            Self::Arena(error) => error.error_code(),
            Self::Load(_) => "CLI_LOAD",
            Self::Io(_) => "CLI_IO",
        }
    }
}

/// What `show` displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowTarget {
    /// Health bars of the running competition.
    Roster,
    /// Every loaded monster template.
    Monsters,
    /// Actions of the monster whose choice is awaited.
    Actions,
    /// Stats of the monster whose choice is awaited.
    Stats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Load(PathBuf),
    Competition(Vec<String>),
    Show(ShowTarget),
    Action {
        name: String,
        target: Option<String>,
    },
    Pass,
}

impl Command {
    /// Parse one input line. The keyword is case-insensitive.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "quit" => {
                expect_args(&args, 0)?;
                Self::Quit
            }
            "load" => {
                expect_args(&args, 1)?;
                Self::Load(PathBuf::from(args[0]))
            }
            "competition" => {
                expect_at_least(&args, 2)?;
                Self::Competition(args.iter().map(|name| name.to_string()).collect())
            }
            "show" => Self::Show(match args.first() {
                None => ShowTarget::Roster,
                Some(what) => match what.to_lowercase().as_str() {
                    "monsters" => ShowTarget::Monsters,
                    "actions" => ShowTarget::Actions,
                    "stats" => ShowTarget::Stats,
                    _ => return Err(CommandError::UnknownShow(what.to_string())),
                },
            }),
            "action" => match args.as_slice() {
                [name] => Self::Action {
                    name: name.to_string(),
                    target: None,
                },
                [name, target] => Self::Action {
                    name: name.to_string(),
                    target: Some(target.to_string()),
                },
                [] => {
                    return Err(CommandError::TooFewArgs { min: 1, got: 0 });
                }
                _ => {
                    return Err(CommandError::ArgCount {
                        expected: 2,
                        got: args.len(),
                    });
                }
            },
            "pass" => {
                expect_args(&args, 0)?;
                Self::Pass
            }
            _ => return Err(CommandError::Unknown(keyword)),
        };
        Ok(command)
    }

    /// Returns true for commands that only make sense inside a competition.
    pub fn needs_competition(&self) -> bool {
        match self {
            Self::Show(target) => *target != ShowTarget::Monsters,
            Self::Action { .. } | Self::Pass => true,
            Self::Quit | Self::Load(_) | Self::Competition(_) => false,
        }
    }
}

fn expect_args(args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() != expected {
        return Err(CommandError::ArgCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn expect_at_least(args: &[&str], min: usize) -> Result<(), CommandError> {
    if args.len() < min {
        return Err(CommandError::TooFewArgs {
            min,
            got: args.len(),
        });
    }
    Ok(())
}
