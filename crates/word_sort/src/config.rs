use std::path::PathBuf;

use log::LevelFilter;

use crate::error::Error;

/// Environment variable consulted for the log level when no flag sets it.
pub const LOG_ENV: &str = "WORD_SORT_LOG";

const DEFAULT_INPUT: &str = "war_and_peace.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

pub const USAGE: &str = "\
usage: word-sort [OPTIONS] [INPUT] [OUTPUT]

Writes the distinct words of INPUT, lowercased and stripped of punctuation,
to OUTPUT in sorted order, one per line.

arguments:
  INPUT           text to read      (default: war_and_peace.txt)
  OUTPUT          file to write     (default: output.txt)

options:
  -v, --verbose   log pipeline details
  -q, --quiet     log warnings and errors only
  -h, --help      print this message

environment:
  WORD_SORT_LOG   off|error|warn|info|debug|trace, used when no flag is given";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Invocation {
    /// Parses command-line arguments (without the program name). `env_level`
    /// is the value of [`LOG_ENV`], if set.
    pub fn parse<I, S>(args: I, env_level: Option<&str>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut flag_level = None;
        let mut positionals = Vec::new();

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "-v" | "--verbose" => flag_level = Some(LevelFilter::Debug),
                "-q" | "--quiet" => flag_level = Some(LevelFilter::Warn),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(Error::Usage(format!("unknown option `{flag}`")));
                }
                _ => positionals.push(arg),
            }
        }

        let mut positionals = positionals.into_iter();
        if let Some(input) = positionals.next() {
            config.input = input.into();
        }
        if let Some(output) = positionals.next() {
            config.output = output.into();
        }
        if let Some(extra) = positionals.next() {
            return Err(Error::Usage(format!("unexpected argument `{extra}`")));
        }

        config.log_level = match (flag_level, env_level) {
            (Some(level), _) => level,
            (None, Some(value)) => value.trim().parse().map_err(|_| {
                Error::Usage(format!("invalid {LOG_ENV} value `{value}`"))
            })?,
            (None, None) => config.log_level,
        };

        Ok(Self::Run(config))
    }
}
