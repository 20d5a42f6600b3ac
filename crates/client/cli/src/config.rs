//! CLI configuration from the environment and the command line.
use std::env;
use std::path::PathBuf;

/// Usage line printed for invalid arguments.
pub const USAGE: &str = "Usage: arena-cli <config_file> [<seed>|debug]";

/// Configuration required to start the command front end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliConfig {
    /// Arena definition loaded at startup.
    pub config_file: Option<PathBuf>,
    /// Optional TOML rules overriding the arena defaults.
    pub rules_file: Option<PathBuf>,
    /// Seed for the decision stream. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Ask on stdin for every random outcome instead of rolling.
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("invalid command line arguments.")]
    Count,

    #[error("invalid seed. Must be a number or 'debug'.")]
    Seed(String),
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CONFIG` - Arena definition file (text or `.ron`)
    /// - `ARENA_RULES` - TOML rules file
    /// - `ARENA_SEED` - Decision stream seed (default: current time)
    /// - `ARENA_DEBUG` - Prompt for every random outcome (default: false)
    pub fn from_env() -> Self {
        let mut config = Self {
            config_file: env::var_os("ARENA_CONFIG").map(PathBuf::from),
            rules_file: env::var_os("ARENA_RULES").map(PathBuf::from),
            seed: read_env::<u64>("ARENA_SEED"),
            ..Self::default()
        };

        if let Some(debug) = read_env::<bool>("ARENA_DEBUG") {
            config.debug = debug;
        } else if env::var("ARENA_DEBUG").is_ok() {
            // A bare `ARENA_DEBUG=` also enables it.
            config.debug = true;
        }

        config
    }

    /// Apply `<config_file> [<seed>|debug]`, taking precedence over the
    /// environment.
    pub fn apply_args<I>(mut self, args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [] if self.config_file.is_some() => {}
            [file] => self.config_file = Some(PathBuf::from(file)),
            [file, mode] => {
                self.config_file = Some(PathBuf::from(file));
                if mode.eq_ignore_ascii_case("debug") {
                    self.debug = true;
                } else {
                    let seed = mode.parse().map_err(|_| ArgsError::Seed(mode.clone()))?;
                    self.seed = Some(seed);
                    self.debug = false;
                }
            }
            _ => return Err(ArgsError::Count),
        }
        Ok(self)
    }

    /// The configured seed, or one taken from the clock.
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or_default()
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
