use clap::{Parser, Subcommand, ValueEnum};
use shortly_store::CorruptDataPolicy;
use shortly_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "SHORTLY_DATA_DIR";
pub const GENERATOR_ENV: &str = "SHORTLY_GENERATOR";
pub const ON_CORRUPT_ENV: &str = "SHORTLY_ON_CORRUPT";
pub const LOG_FORMAT_ENV: &str = "SHORTLY_LOG_FORMAT";

pub const DEFAULT_DATA_DIR: &str = ".shortly";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    /// Random base-36 tokens.
    #[value(name = "random")]
    Random,
    /// Sequential tokens, continuing after the aliases already saved.
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnCorruptArg {
    /// Refuse to start.
    #[value(name = "fail")]
    Fail,
    /// Start from an empty list; the next add overwrites the stored data.
    #[value(name = "reset")]
    Reset,
}

impl Display for OnCorruptArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OnCorruptArg::Fail => write!(f, "fail"),
            OnCorruptArg::Reset => write!(f, "reset"),
        }
    }
}

impl From<OnCorruptArg> for CorruptDataPolicy {
    fn from(value: OnCorruptArg) -> Self {
        match value {
            OnCorruptArg::Fail => CorruptDataPolicy::Fail,
            OnCorruptArg::Reset => CorruptDataPolicy::Reset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "compact")]
    Compact,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        LogFormat::from(*self).fmt(f)
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shorten a URL and print its alias.
    Add { url: String },
    /// List every alias, newest first.
    List,
    /// Check a URL without storing anything.
    Validate { url: String },
}

#[derive(Debug, Parser)]
#[command(name = "shortly", about = "Generate and remember short aliases for URLs")]
pub struct CLI {
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    #[arg(
        long,
        env = ON_CORRUPT_ENV,
        value_enum,
        default_value_t = OnCorruptArg::Fail
    )]
    pub on_corrupt: OnCorruptArg,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Compact
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CLI::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["shortly", "list"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(cli.generator, GeneratorArg::Random);
        assert_eq!(cli.on_corrupt, OnCorruptArg::Fail);
        assert_eq!(cli.log_format, LogFormatArg::Compact);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn add_with_options() {
        let cli = CLI::try_parse_from([
            "shortly",
            "--data-dir",
            "/tmp/links",
            "--generator",
            "seq",
            "--on-corrupt",
            "reset",
            "--log-format",
            "json",
            "add",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/links"));
        assert_eq!(cli.generator, GeneratorArg::Seq);
        assert_eq!(CorruptDataPolicy::from(cli.on_corrupt), CorruptDataPolicy::Reset);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
        assert!(matches!(cli.command, Command::Add { ref url } if url == "https://example.com"));
    }
}
