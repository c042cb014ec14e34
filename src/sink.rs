use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

use tracing::debug;

/// Destination of the rendered lines.
#[derive(Debug)]
pub enum Sink {
    Console(BufWriter<StdoutLock<'static>>),
    /// Appends to an existing file instead of truncating it.
    File(BufWriter<File>),
}

impl Sink {
    /// Opens `path` for appending, creating it if needed, or locks stdout
    /// when no path is given.
    ///
    /// # Errors
    /// Returns the I/O error from opening the file.
    pub fn open(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                debug!(path = %path.display(), "appending to file");
                Ok(Self::File(BufWriter::new(file)))
            },
            None => Ok(Self::Console(BufWriter::new(io::stdout().lock()))),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Console(out) => out.write(buf),
            Self::File(out) => out.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Console(out) => out.write_all(buf),
            Self::File(out) => out.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Console(out) => out.flush(),
            Self::File(out) => out.flush(),
        }
    }
}
