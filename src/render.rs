//! Render-and-dedup engine.
//!
//! Dates are walked in ascending order and, for each date, every format spec
//! in the order given. Each rendered line goes through the run's case
//! transform and, unless duplicates are allowed, is dropped when the exact same
//! string was already emitted earlier in the run.
//!
//! The set of emitted lines lives only as long as the [`RenderedLines`]
//! iterator that owns it. It grows to at most `days × formats` strings, which
//! is the dominant memory cost of a run over a long range.

use std::collections::HashSet;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{CalendarDate, DateRange, Days, Error, FormatSpec, NameProvider, prelude::*};

/// Case transform applied to every rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    /// Everything lower-case
    #[default]
    #[display(fmt = "lower")]
    Lower,
    /// Leave names as the locale spells them (`February`, `Sat`)
    #[display(fmt = "as-rendered")]
    AsRendered,
    /// Everything upper-case
    #[display(fmt = "upper")]
    Upper,
}

impl CaseMode {
    /// Combines the "keep capitals" and "all capitals" switches. All capitals
    /// wins when both are set.
    pub const fn from_flags(keep_capitals: bool, all_capitals: bool) -> Self {
        if all_capitals {
            Self::Upper
        } else if keep_capitals {
            Self::AsRendered
        } else {
            Self::Lower
        }
    }

    pub fn apply(self, line: String) -> String {
        match self {
            Self::Lower => line.to_lowercase(),
            Self::AsRendered => line,
            Self::Upper => line.to_uppercase(),
        }
    }
}

/// Per-run rendering switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Inserted between consecutive fields of a line
    pub divider:          String,
    pub case:             CaseMode,
    /// Emit every rendered line, even when it repeats an earlier one
    pub allow_duplicates: bool,
}

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub dates:      usize,
    pub rendered:   usize,
    pub emitted:    usize,
    pub duplicates: usize,
}

/// Iterator over the emitted lines of a run, in date order then format order.
pub struct RenderedLines<'a, N: NameProvider + ?Sized> {
    days:    Days,
    specs:   &'a [FormatSpec],
    options: &'a RenderOptions,
    names:   &'a N,
    current: Option<CalendarDate>,
    next:    usize,
    seen:    Option<HashSet<String>>,
    stats:   RunStats,
}

impl<'a, N: NameProvider + ?Sized> RenderedLines<'a, N> {
    pub fn new(range: &DateRange, specs: &'a [FormatSpec], options: &'a RenderOptions, names: &'a N) -> Self {
        Self {
            days: range.days(),
            specs,
            options,
            names,
            current: None,
            next: 0,
            seen: (!options.allow_duplicates).then(HashSet::new),
            stats: RunStats::default(),
        }
    }

    /// Counters so far. Complete once the iterator is exhausted.
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Advances to the next (date, spec) pair.
    fn advance(&mut self) -> Option<(CalendarDate, &'a FormatSpec)> {
        if self.specs.is_empty() {
            return None;
        }
        loop {
            if let Some(date) = self.current {
                if let Some(spec) = self.specs.get(self.next) {
                    self.next += 1;
                    return Some((date, spec));
                }
            }
            self.current = Some(self.days.next()?);
            self.next = 0;
            self.stats.dates += 1;
        }
    }
}

impl<N: NameProvider + ?Sized> Iterator for RenderedLines<'_, N> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (date, spec) = self.advance()?;

            let mut line = String::new();
            spec.render_into(&mut line, &date, &self.options.divider, self.names);
            let line = self.options.case.apply(line);
            self.stats.rendered += 1;

            if let Some(seen) = self.seen.as_mut() {
                if !seen.insert(line.clone()) {
                    self.stats.duplicates += 1;
                    continue;
                }
            }

            self.stats.emitted += 1;
            return Some(line);
        }
    }
}

/// Renders every date of `range` under every spec and writes the emitted lines
/// to `sink`, one per line. Output already written stays written if the sink
/// fails part way.
///
/// # Errors
/// Returns `Error::Sink` on the first failed write or flush.
pub fn run<W, N>(
    range: &DateRange,
    specs: &[FormatSpec],
    options: &RenderOptions,
    names: &N,
    sink: &mut W,
) -> Result<RunStats, Error>
where
    W: Write + ?Sized,
    N: NameProvider + ?Sized,
{
    debug!(%range, formats = specs.len(), ?options, "starting run");

    let mut lines = RenderedLines::new(range, specs, options, names);
    for line in lines.by_ref() {
        writeln!(sink, "{line}")?;
    }
    sink.flush()?;

    let stats = lines.stats();
    info!(
        dates = stats.dates,
        rendered = stats.rendered,
        emitted = stats.emitted,
        duplicates = stats.duplicates,
        "run complete"
    );
    Ok(stats)
}
