use crate::{
    error::{Error, Result},
    timer::{clock, path},
};
use std::{
    fs::{self, File},
    io::{ErrorKind, Read},
    path::PathBuf,
};
use tracing::{debug, instrument, warn};

/// Size of a valid timer file: one little-endian `i64`.
pub const TIMER_SIZE: u64 = 8;

/// File-backed timers living under a base directory.
#[derive(Debug, Clone)]
pub struct TimerStore {
    directory: PathBuf,
}

impl TimerStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Location of the timer file for `name`.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        path::resolve(&self.directory, name)
    }

    /// Checks whether the timer file exists and has the right size.
    ///
    /// # Errors
    /// A file of any other size is removed and reported as [`Error::Corrupt`].
    /// If it can not be removed the failure is returned as [`Error::Io`].
    #[instrument(skip(self))]
    pub fn exists(&self, name: &str) -> Result<bool> {
        let path = self.path(name);

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(Error::io(path, e)),
        };

        if metadata.len() != TIMER_SIZE {
            debug!(path = %path.display(), size = metadata.len(), "corrupt timer file");

            if let Err(e) = fs::remove_file(&path) {
                warn!(path = %path.display(), "failed to remove corrupt timer file: {}", e);
                return Err(Error::io(path, e));
            }

            return Err(Error::Corrupt {
                name: name.to_string(),
                empty: metadata.len() == 0,
            });
        }

        Ok(true)
    }

    /// Starts (or restarts) the timer at the current instant.
    ///
    /// # Errors
    /// Will return an error if the timer file can not be written
    pub fn start(&self, name: &str) -> Result<i64> {
        let instant = clock::now();
        self.start_at(name, instant)?;
        Ok(instant)
    }

    /// Writes `instant` as the timer's start, replacing any previous content.
    ///
    /// # Errors
    /// Will return an error if the timer file can not be written
    #[instrument(skip(self))]
    pub fn start_at(&self, name: &str, instant: i64) -> Result<()> {
        let path = self.path(name);

        fs::write(&path, instant.to_le_bytes()).map_err(|e| Error::io(&path, e))?;

        debug!(path = %path.display(), "timer started");

        Ok(())
    }

    /// Reads the start instant of a running timer.
    ///
    /// Returns 0 when the file vanished or shrank after the existence check.
    ///
    /// # Errors
    /// [`Error::NotStarted`] when there is no timer, [`Error::Corrupt`] when
    /// its file has the wrong size.
    #[instrument(skip(self))]
    pub fn read(&self, name: &str) -> Result<i64> {
        if !self.exists(name)? {
            return Err(Error::NotStarted {
                name: name.to_string(),
            });
        }

        let path = self.path(name);

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Error::io(path, e)),
        };

        let mut buf = [0u8; TIMER_SIZE as usize];

        match file.read_exact(&mut buf) {
            Ok(()) => {
                let instant = i64::from_le_bytes(buf);
                debug!(path = %path.display(), instant, "timer read");
                Ok(instant)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(0),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Removes the timer.
    ///
    /// # Errors
    /// [`Error::NotFound`] when there is no timer, [`Error::Corrupt`] when
    /// its file has the wrong size.
    #[instrument(skip(self))]
    pub fn stop(&self, name: &str) -> Result<()> {
        if !self.exists(name)? {
            return Err(Error::NotFound {
                name: name.to_string(),
            });
        }

        let path = self.path(name);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "timer stopped");
                Ok(())
            }
            // someone else stopped it in between
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(path, e)),
        }
    }
}
