use stderrlog::{LogLevelNum, Timestamp};

/// Crates whose log records are shown unless ``--all-modules`` is set.
///
/// `tokenizers` and the download stack are chatty at debug level.
pub const LOGGED_MODULES: [&str; 3] = ["wsieve", "wordsieve", "wordsieve_disk_cache"];

/// Named log levels, in ``-v`` count order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Nothing.
    Off = 0,

    /// Failures only.
    Errors = 1,

    /// Skipped rows and other recoverable problems.
    Warnings = 2,

    /// Split sizes, vocab sizes, filter counts.
    Progress = 3,

    /// Paths, cache lookups, per-step detail.
    Debug = 4,

    /// Everything.
    Trace = 5,
}

impl Verbosity {
    /// The level for a ``-v`` count; counts past ``-vvvvv`` saturate.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Off,
            1 => Self::Errors,
            2 => Self::Warnings,
            3 => Self::Progress,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level_num(self) -> LogLevelNum {
        match self {
            Self::Off => LogLevelNum::Off,
            Self::Errors => LogLevelNum::Error,
            Self::Warnings => LogLevelNum::Warn,
            Self::Progress => LogLevelNum::Info,
            Self::Debug => LogLevelNum::Debug,
            Self::Trace => LogLevelNum::Trace,
        }
    }
}

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level (-v errors .. -vvvvv trace); overrides the command default.
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Prefix log lines with a timestamp.
    #[clap(short, long)]
    pub ts: bool,

    /// Also show log records from dependencies.
    #[clap(long)]
    pub all_modules: bool,
}

impl LogArgs {
    /// The effective level; `default` applies when ``-v`` is absent.
    pub fn verbosity(
        &self,
        default: Verbosity,
    ) -> Verbosity {
        match self.verbose {
            Some(count) if count > 0 => Verbosity::from_count(count),
            _ => default,
        }
    }

    /// Initialize ``stderrlog`` for a command.
    pub fn setup_logging(
        &self,
        default: Verbosity,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut logger = stderrlog::new();
        logger
            .quiet(self.quiet)
            .verbosity(self.verbosity(default).level_num())
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            });
        if !self.all_modules {
            logger.modules(LOGGED_MODULES);
        }
        logger.init()?;

        Ok(())
    }
}
