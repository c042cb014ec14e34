use std::path::PathBuf;

use clap::Parser;
use gregory::{CalendarDate, CaseMode, Config};

/// Render every date in a range through compact format codes.
///
/// Symbols: d/D day, m/M month, y/Y year, a/A weekday name, b/B month name.
/// Lower case is the short or unpadded form, upper case the long or padded
/// one. A format is one to three symbols, e.g. `DMY`, `dby`, `aDb`.
#[derive(Debug, Parser)]
#[command(name = "gregory", version)]
pub struct Cli {
    /// First date, DD/MM/YYYY or YYYY-MM-DD.
    #[arg(short, long)]
    pub start: CalendarDate,

    /// Date to stop before [default: today]
    #[arg(short, long)]
    pub end: Option<CalendarDate>,

    /// Append to this file instead of writing to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Divider placed between the fields of a line.
    #[arg(short, long = "divide", default_value = "")]
    pub divide: String,

    /// Keep lines that repeat an earlier one.
    #[arg(short, long)]
    pub twin: bool,

    /// No summary and no delay.
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep capitals in names as the locale spells them.
    #[arg(short = 'c', long = "capital")]
    pub capital: bool,

    /// Upper-case every line. Wins over --capital.
    #[arg(short = 'C', long = "CAPITAL")]
    pub all_capitals: bool,

    /// Locale for weekday and month names, e.g. fr_FR.UTF-8 [default: C]
    #[arg(short, long, default_value = "")]
    pub locale: String,

    /// Formats to render. None means every format.
    #[arg(short, long = "format", num_args = 0..)]
    pub formats: Vec<String>,

    /// Seconds to wait after the summary before writing.
    #[arg(long, default_value_t = 5)]
    pub delay: u64,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self, end: CalendarDate) -> Config {
        Config {
            formats: self.formats.clone(),
            divider: self.divide.clone(),
            case: CaseMode::from_flags(self.capital, self.all_capitals),
            allow_duplicates: self.twin,
            locale: self.locale.clone(),
            ..Config::new(self.start, end)
        }
    }
}
