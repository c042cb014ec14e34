use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CaseMode, RenderOptions};

/// Everything a generation run needs, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// First date rendered.
    pub start: CalendarDate,

    /// First date not rendered.
    pub end: CalendarDate,

    /// Format tokens. Empty means the full vocabulary.
    #[serde(default)]
    pub formats: Vec<String>,

    /// Inserted between the fields of a line.
    #[serde(default)]
    pub divider: String,

    #[serde(default)]
    pub case: CaseMode,

    /// Keep lines that repeat an earlier one.
    #[serde(default)]
    pub allow_duplicates: bool,

    /// Locale identifier for weekday and month names. Empty means C.
    #[serde(default)]
    pub locale: String,
}

impl Config {
    /// A config with every option at its default.
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start,
            end,
            formats: Vec::new(),
            divider: String::new(),
            case: CaseMode::Lower,
            allow_duplicates: false,
            locale: String::new(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            divider:          self.divider.clone(),
            case:             self.case,
            allow_duplicates: self.allow_duplicates,
        }
    }
}
