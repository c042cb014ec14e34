//! Shared constructors for unit tests.

use crate::{CalendarDate, DateRange, FormatSpec, RenderOptions};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day)
        .unwrap_or_else(|e| panic!("invalid test date {year}-{month}-{day}: {e}"))
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .unwrap_or_else(|e| panic!("invalid test range: {e}"))
}

pub fn spec(token: &str) -> FormatSpec {
    token
        .parse()
        .unwrap_or_else(|e| panic!("invalid test token {token:?}: {e}"))
}

pub fn specs(tokens: &[&str]) -> Vec<FormatSpec> {
    tokens.iter().map(|t| spec(t)).collect()
}

pub fn options(divider: &str) -> RenderOptions {
    RenderOptions {
        divider: divider.to_owned(),
        ..RenderOptions::default()
    }
}
