use std::io::Write;

use tracing::debug;

use crate::{
    Config, DateRange, Error, Estimate, FormatSpec, NameTable, RenderOptions, RenderedLines, RunStats, locale,
    render, validate,
};

/// A validated run, ready to render.
///
/// Building one performs every check that can abort a run, so nothing is
/// written for a config that would fail.
#[derive(Debug, Clone)]
pub struct Generator {
    range:   DateRange,
    specs:   Vec<FormatSpec>,
    names:   NameTable,
    options: RenderOptions,
}

impl Generator {
    /// Checks the range, then the formats, then the locale.
    ///
    /// # Errors
    /// Returns `Error::Range`, `Error::Format` or `Error::Locale` for the
    /// first check that fails.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let range = DateRange::new(config.start, config.end)?;
        let specs = validate(&config.formats)?;
        debug!(count = specs.len(), "compiled format specs");
        let names = locale::resolve(&config.locale)?;

        Ok(Self {
            range,
            specs,
            names,
            options: config.render_options(),
        })
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn specs(&self) -> &[FormatSpec] {
        &self.specs
    }

    pub const fn names(&self) -> &NameTable {
        &self.names
    }

    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn estimate(&self) -> Estimate {
        Estimate::new(&self.range, &self.specs, &self.options.divider)
    }

    pub fn lines(&self) -> RenderedLines<'_, NameTable> {
        RenderedLines::new(&self.range, &self.specs, &self.options, &self.names)
    }

    /// Writes every emitted line to `sink`.
    ///
    /// # Errors
    /// Returns `Error::Sink` if writing fails.
    pub fn run<W: Write + ?Sized>(&self, sink: &mut W) -> Result<RunStats, Error> {
        render::run(&self.range, &self.specs, &self.options, &self.names, sink)
    }
}
