//! Weekday and month names.
//!
//! Rendering only sees the [`NameProvider`] trait. [`NameTable::english`] is the
//! fixed C/POSIX reference; [`resolve`] builds a table for any locale in
//! chrono's locale database.

use chrono::{Locale, NaiveDate, TimeZone, Utc};
use tracing::{debug, info};

use crate::consts::{MONTH_ABBREVIATIONS, MONTH_NAMES, WEEKDAY_ABBREVIATIONS, WEEKDAY_NAMES};
use crate::{Month, Style, Weekday};

/// Source of the locale-dependent words a format can emit.
pub trait NameProvider {
    fn weekday_name(&self, weekday: Weekday, style: Style) -> &str;

    fn month_name(&self, month: Month, style: Style) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("the locale '{identifier}' is not supported by your system")]
    Unsupported { identifier: String },
}

/// Precomputed names for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    locale:                String,
    weekdays:              [String; 7],
    weekday_abbreviations: [String; 7],
    months:                [String; 12],
    month_abbreviations:   [String; 12],
}

// 2001-01-01 is a Monday, so 2001-01-(1 + i) walks Monday..Sunday.
const REFERENCE_YEAR: i32 = 2001;

impl NameTable {
    /// The C/POSIX names, independent of the host.
    pub fn english() -> Self {
        Self {
            locale:                "C".to_owned(),
            weekdays:              WEEKDAY_NAMES.map(str::to_owned),
            weekday_abbreviations: WEEKDAY_ABBREVIATIONS.map(str::to_owned),
            months:                MONTH_NAMES.map(str::to_owned),
            month_abbreviations:   MONTH_ABBREVIATIONS.map(str::to_owned),
        }
    }

    /// Names as chrono's `%A %a %B %b` spell them for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        let weekday = |i: usize, fmt: &str| localized(1, 1 + i as u32, fmt, locale);
        let month = |i: usize, fmt: &str| localized(1 + i as u32, 1, fmt, locale);

        Self {
            locale:                format!("{locale:?}"),
            weekdays:              std::array::from_fn(|i| weekday(i, "%A")),
            weekday_abbreviations: std::array::from_fn(|i| weekday(i, "%a")),
            months:                std::array::from_fn(|i| month(i, "%B")),
            month_abbreviations:   std::array::from_fn(|i| month(i, "%b")),
        }
    }

    /// Name of the locale the table was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::english()
    }
}

impl NameProvider for NameTable {
    fn weekday_name(&self, weekday: Weekday, style: Style) -> &str {
        match style {
            Style::Short => &self.weekday_abbreviations[weekday.index()],
            Style::Long => &self.weekdays[weekday.index()],
        }
    }

    fn month_name(&self, month: Month, style: Style) -> &str {
        match style {
            Style::Short => &self.month_abbreviations[month.index()],
            Style::Long => &self.months[month.index()],
        }
    }
}

fn localized(month: u32, day: u32, fmt: &str, locale: Locale) -> String {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).format_localized(fmt, locale).to_string())
        .unwrap_or_default()
}

/// Resolves a locale identifier such as `en_GB.UTF-8`, `fr_FR` or
/// `sr_RS@latin` to a name table.
///
/// The empty identifier, `C` and `POSIX` resolve to [`NameTable::english`].
/// The codeset suffix is ignored; an `@modifier` is kept and must be known
/// together with its base.
///
/// # Errors
/// Returns `LocaleError::Unsupported` if no locale matches.
pub fn resolve(identifier: &str) -> Result<NameTable, LocaleError> {
    let trimmed = identifier.trim();
    let (base, modifier) = match trimmed.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (trimmed, None),
    };
    let base = base.split_once('.').map_or(base, |(language, _codeset)| language).replace('-', "_");

    if base.is_empty() || base == "C" || base == "POSIX" {
        debug!(identifier = trimmed, "using reference locale");
        return Ok(NameTable::english());
    }

    // A modified locale never falls back to its unmodified base.
    let name = match modifier {
        Some(modifier) => format!("{base}@{modifier}"),
        None => base,
    };

    let locale = Locale::try_from(name.as_str()).map_err(|_| LocaleError::Unsupported {
        identifier: trimmed.to_owned(),
    })?;

    info!(identifier = trimmed, locale = ?locale, "resolved locale");
    Ok(NameTable::for_locale(locale))
}
