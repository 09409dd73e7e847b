use std::ffi::CString;
use std::fmt::{self, Debug, Display, Formatter};
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::{Duration, Instant};

use libc::{O_CLOEXEC, O_CREAT, O_TRUNC, O_WRONLY, c_uint};
use log::{debug, trace};

use super::{
    FinishError, Fd, InvalidPathError, IOError, OpenError, SyncError, SyncStrategy, WriteError,
};
use crate::util::fmt::{DebugRaw, human_bytes};
use crate::util::syscall::err_no;

pub const DEFAULT_MODE: u32 = 0o644;

/// A write-only file that applies a [`SyncStrategy`] to everything written through it.
///
/// Call [`SyncWriter::finish`] when done: it performs any deferred sync and reports close errors.
/// Dropping the writer instead still closes the file, but can only log a failure.
pub struct SyncWriter {
    fd: Fd,
    strategy: SyncStrategy,
    mode: u32,
    written: u64,
    started: Instant,
}

impl SyncWriter {
    /// Creates or truncates the file at `path` with mode `0o644`.
    pub fn create<P: AsRef<Path>>(path: P, strategy: SyncStrategy) -> Result<SyncWriter, OpenError> {
        SyncWriter::create_with_mode(path, strategy, DEFAULT_MODE)
    }

    /// Like [`SyncWriter::create`], with explicit permission bits for a newly created file.
    pub fn create_with_mode<P: AsRef<Path>>(
        path: P,
        strategy: SyncStrategy,
        mode: u32,
    ) -> Result<SyncWriter, OpenError> {
        let path = path.as_ref();
        let pathname = CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)?;
        let flags = O_WRONLY | O_CREAT | O_TRUNC | O_CLOEXEC | strategy.open_flags();

        // SAFETY: pathname is a valid nul-terminated string that outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), flags, mode as c_uint) } {
            -1 => Err(OpenError::interpret_raw_error(err_no())),
            fd => {
                debug!("opened {} for writing with {}", path.display(), strategy);
                Ok(SyncWriter {
                    fd: Fd(fd),
                    strategy,
                    mode,
                    written: 0,
                    started: Instant::now(),
                })
            }
        }
    }

    pub const fn strategy(&self) -> SyncStrategy {
        self.strategy
    }

    /// Total bytes that reached the file so far, including the part of a write that later failed.
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Writes all of `buf`, then syncs if the strategy asks for it after every write.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), WriteError> {
        let mut rest = buf;

        while !rest.is_empty() {
            // SAFETY: rest is a valid, initialized buffer of rest.len() bytes.
            match unsafe { libc::write(*self.fd, rest.as_ptr().cast(), rest.len()) } {
                -1 => match err_no() {
                    libc::EINTR => continue,
                    e => return Err(WriteError::interpret_raw_error(e)),
                },
                // A regular file only accepts zero bytes when something has gone wrong below us.
                0 => return Err(IOError.into()),
                // Counted per call, so bytes that reached the file before a later failure still show.
                count => {
                    self.written += count as u64;
                    rest = &rest[count as usize..];
                }
            }
        }

        match self.strategy {
            SyncStrategy::FsyncEachWrite => self.sync()?,
            SyncStrategy::FdatasyncEachWrite => self.sync_data()?,
            _ => (),
        }
        trace!("wrote {} bytes, {} total", buf.len(), self.written);
        Ok(())
    }

    /// Writes `total` bytes by repeating `block`, with the final write cut short as needed. Each
    /// block counts as one write for the strategy. An empty block writes nothing.
    pub fn write_repeated(&mut self, block: &[u8], total: u64) -> Result<(), WriteError> {
        if block.is_empty() {
            return Ok(());
        }

        let mut remaining = total;
        while remaining > 0 {
            let size = block.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
            self.write_all(&block[..size])?;
            remaining -= size as u64;
        }
        Ok(())
    }

    /// Flushes data and metadata to disk with `fsync`.
    pub fn sync(&self) -> Result<(), SyncError> {
        // SAFETY: fsync only reads the descriptor, which is owned by self.
        self.retry_sync(|fd| unsafe { libc::fsync(fd) })
    }

    /// Flushes data, and only the metadata needed to read it, with `fdatasync`.
    pub fn sync_data(&self) -> Result<(), SyncError> {
        // SAFETY: fdatasync only reads the descriptor, which is owned by self.
        self.retry_sync(|fd| unsafe { libc::fdatasync(fd) })
    }

    fn retry_sync<F: Fn(libc::c_int) -> libc::c_int>(&self, sync: F) -> Result<(), SyncError> {
        loop {
            if sync(*self.fd) != -1 {
                return Ok(());
            }
            match err_no() {
                libc::EINTR => continue,
                e => return Err(SyncError::interpret_raw_error(e)),
            }
        }
    }

    /// Performs the deferred sync if there is one, closes the file and reports what was written.
    pub fn finish(self) -> Result<WriteReport, FinishError> {
        if self.strategy == SyncStrategy::Deferred {
            self.sync()?;
        }

        let report = WriteReport {
            bytes: self.written,
            elapsed: self.started.elapsed(),
            strategy: self.strategy,
        };
        self.fd.close()?;

        debug!("finished write: {}", report);
        Ok(report)
    }
}

impl AsRawFd for SyncWriter {
    fn as_raw_fd(&self) -> RawFd {
        *self.fd
    }
}

impl Debug for SyncWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncWriter")
            .field("fd", &*self.fd)
            .field("strategy", &self.strategy)
            .field("mode", &DebugRaw::octal(self.mode))
            .field("written", &DebugRaw::bytes(self.written))
            .finish()
    }
}

/// What a finished [`SyncWriter`] wrote and how long it took, from open to close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteReport {
    pub bytes: u64,
    pub elapsed: Duration,
    pub strategy: SyncStrategy,
}

impl WriteReport {
    /// Throughput in MiB per second. Zero if no time was measured.
    pub fn mib_per_sec(&self) -> f64 {
        match self.elapsed.as_secs_f64() {
            secs if secs > 0.0 => self.bytes as f64 / (1024.0 * 1024.0) / secs,
            _ => 0.0,
        }
    }
}

impl Display for WriteReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {:.3}s ({:.1} MiB/s) with {}",
            human_bytes(self.bytes),
            self.elapsed.as_secs_f64(),
            self.mib_per_sec(),
            self.strategy
        )
    }
}
