//! Enumerate every Gregorian date in a range and render each one through
//! compact format codes (`DMY`, `dby`, `Ymd`, ...), dropping lines that
//! collapse onto an already emitted string.
//!
//! ```ignore
//! use gregory::{Config, Generator};
//!
//! let mut config = Config::new("01/02/2003".parse()?, "03/02/2003".parse()?);
//! config.formats = vec!["DMY".into(), "dby".into()];
//!
//! let generator = Generator::from_config(&config)?;
//! let lines: Vec<String> = generator.lines().collect();
//! assert_eq!(lines, ["01022003", "1feb03", "02022003", "2feb03"]);
//! ```

mod config;
mod consts;
mod estimate;
mod format;
mod generate;
mod locale;
mod prelude;
mod range;
mod render;
mod sink;
#[cfg(test)]
mod test_utils;
mod types;

pub use config::Config;
pub use consts::*;
pub use estimate::Estimate;
pub use format::{Field, FieldSpec, FormatError, FormatSpec, Style, validate, vocabulary};
pub use generate::Generator;
pub use locale::{LocaleError, NameProvider, NameTable, resolve as resolve_locale};
pub use range::{DateRange, Days, RangeError};
pub use render::{CaseMode, RenderOptions, RenderedLines, RunStats, run};
pub use sink::Sink;
pub use types::{Day, Month, Weekday, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A single proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Every fatal condition a generation run can end with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Range(#[from] RangeError),

    /// The output destination could not be opened or written.
    #[error("failed to write output: {source}")]
    Sink {
        #[from]
        source: std::io::Error,
    },
}

impl CalendarDate {
    /// Assembles a date from already validated components.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Validates raw components and builds a date.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Today's date on the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    #[inline]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Day of the week (Sakamoto's method).
    pub const fn weekday(&self) -> Weekday {
        let month = self.month.get();
        let mut y = self.year.get();
        if month < MARCH {
            y -= 1;
        }
        let n = y + y / consts::LEAP_YEAR_CYCLE - y / consts::CENTURY_CYCLE
            + y / consts::GREGORIAN_CYCLE
            + consts::WEEKDAY_MONTH_OFFSETS[(month - 1) as usize]
            + self.day.get() as u16;
        Weekday::from_sunday_based(n % DAYS_IN_WEEK as u16)
    }

    /// The following calendar day, or `None` past `MAX_YEAR`-12-31.
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year.get(), self.month.get(), self.day.get())?;
        Self::from_ymd(year, month, day).ok()
    }
}

// --- helpers for rollover ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    let max = days_in_month(year, month);
    if day < max {
        Some((year, month, day + 1))
    } else {
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts the day-first `DD/MM/YYYY` form and ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(DAY_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {DAY_FIRST_SEPARATOR})"
            )));
        }

        let (separator, day_first) = if has_hyphen {
            (DATE_SEPARATOR, false)
        } else if has_slash {
            (DAY_FIRST_SEPARATOR, true)
        } else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected DD{DAY_FIRST_SEPARATOR}MM{DAY_FIRST_SEPARATOR}YYYY or \
                 YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [first, month, last] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        };

        let (year, day) = if day_first { (last, first) } else { (first, last) };
        Self::from_ymd(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        // month() is 1..=12 and day() is 1..=31
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
