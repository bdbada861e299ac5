use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::error::Result;

/// Writer handed out per event: the shared log file when one was opened,
/// otherwise a sink so nothing lands on the terminal the UI owns.
pub enum DelegatingWriter {
    File(Arc<Mutex<File>>),
    Sink(io::Sink),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DelegatingWriter::File(file) => match file.lock() {
                Ok(mut f) => f.write(buf),
                Err(_) => Ok(buf.len()),
            },
            DelegatingWriter::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DelegatingWriter::File(file) => match file.lock() {
                Ok(mut f) => f.flush(),
                Err(_) => Ok(()),
            },
            DelegatingWriter::Sink(sink) => sink.flush(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<Mutex<File>>>,
}

impl SubscriberMakeWriter {
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(Arc::new(Mutex::new(file))),
        })
    }

    pub fn discard() -> Self {
        Self::default()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match &self.file {
            Some(file) => DelegatingWriter::File(Arc::clone(file)),
            None => DelegatingWriter::Sink(io::sink()),
        }
    }
}

/// Install the global fmt subscriber. Output goes to `log_file` when given
/// and is dropped otherwise. A second call leaves the first subscriber in
/// place.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::to_file(path)?,
        None => SubscriberMakeWriter::discard(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn file_writer_appends_to_log() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let make = SubscriberMakeWriter::to_file(file.path()).unwrap();
        let mut w = make.make_writer();
        w.write_all(b"opened window\n").unwrap();
        w.flush().unwrap();

        let mut contents = String::new();
        file.as_file_mut().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "opened window\n");
    }

    #[test]
    fn discard_writer_swallows_output() {
        let make = SubscriberMakeWriter::discard();
        let mut w = make.make_writer();
        assert_eq!(w.write(b"dropped").unwrap(), 7);
    }
}
