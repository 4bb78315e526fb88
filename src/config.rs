// izondrame: randomizer for a list of distinct entries (configuration)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use anyhow::{Context, Error, Result};
use clap::{value_parser, Arg, Command};
use std::{ffi::OsString, path::PathBuf, time::Duration};

// constants
pub const DEFAULT_INPUT_PATH: &str = "data.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "randomized_results.txt";
pub const DEFAULT_PRINT_DELAY_MS: u64 = 500;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
const INPUT_PARAM: &str = "input";
const OUTPUT_PARAM: &str = "output";
const DELAY_PARAM: &str = "delay-ms";
const MAX_ATTEMPTS_PARAM: &str = "max-attempts";

/// Fine-tuning parameters for one run of the randomizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Line-oriented entry source read before interactive input. A missing file is not an error.
    pub input_path: PathBuf,
    /// Results file, truncated and rewritten on every run.
    pub output_path: PathBuf,
    /// Pause before each displayed result.
    pub print_delay: Duration,
    /// Draws allowed per score slot before giving up on finding an unused score.
    pub max_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_delay: Duration::from_millis(DEFAULT_PRINT_DELAY_MS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

// command-line interface definition
fn command() -> Command {
    Command::new("izondrame")
        .about("Izondrame reads distinct entries from a file and from live input, then prints and saves them in random order")
        .arg(
            Arg::new(INPUT_PARAM)
                .long(INPUT_PARAM)
                .value_name("FILE")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT_PATH),
        )
        .arg(
            Arg::new(OUTPUT_PARAM)
                .long(OUTPUT_PARAM)
                .value_name("FILE")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT_PATH),
        )
        .arg(
            Arg::new(DELAY_PARAM)
                .long(DELAY_PARAM)
                .value_name("MILLISECONDS")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("500"),
        )
        .arg(
            Arg::new(MAX_ATTEMPTS_PARAM)
                .long(MAX_ATTEMPTS_PARAM)
                .value_name("COUNT")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(u32).range(1..))
                .default_value("10000"),
        )
}

// fetch a parameter which always has a value because of its default
fn param<T>(matches: &clap::ArgMatches, name: &str) -> Result<T, Error>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(name)
        .cloned()
        .with_context(|| format!("missing value for --{name}"))
}

impl Config {
    /// Build a configuration from a command line, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Config::from_matches(&matches).map_err(|e| {
            command().error(clap::error::ErrorKind::ValueValidation, e.to_string())
        })
    }

    fn from_matches(matches: &clap::ArgMatches) -> Result<Config, Error> {
        Ok(Config {
            input_path: param(matches, INPUT_PARAM)?,
            output_path: param(matches, OUTPUT_PARAM)?,
            print_delay: Duration::from_millis(param(matches, DELAY_PARAM)?),
            max_attempts: param(matches, MAX_ATTEMPTS_PARAM)?,
        })
    }
}
