use derive_more::Display;
use libc::c_int;

/// How a [`SyncWriter`](super::SyncWriter) makes its writes durable.
///
/// Listed from the strongest guarantee per write to the weakest. `OpenSync` and `FsyncEachWrite`
/// also persist metadata (size, timestamps) on every write, their `Data` counterparts only persist
/// what's needed to read the data back.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncStrategy {
    /// Opened with `O_SYNC`, each write returns once data and metadata are on disk.
    #[display("O_SYNC")]
    OpenSync,
    /// Opened with `O_DSYNC`, each write returns once its data is on disk.
    #[display("O_DSYNC")]
    OpenDataSync,
    #[display("fsync after each write")]
    FsyncEachWrite,
    #[display("fdatasync after each write")]
    FdatasyncEachWrite,
    /// A single fsync when the writer is finished.
    #[display("fsync on finish")]
    Deferred,
    /// Left to the page cache. Nothing is guaranteed to be on disk, even after finishing.
    #[display("buffered")]
    Buffered,
}

impl SyncStrategy {
    pub const ALL: [SyncStrategy; 6] = [
        SyncStrategy::OpenSync,
        SyncStrategy::OpenDataSync,
        SyncStrategy::FsyncEachWrite,
        SyncStrategy::FdatasyncEachWrite,
        SyncStrategy::Deferred,
        SyncStrategy::Buffered,
    ];

    pub(crate) const fn open_flags(self) -> c_int {
        match self {
            SyncStrategy::OpenSync => libc::O_SYNC,
            SyncStrategy::OpenDataSync => libc::O_DSYNC,
            _ => 0,
        }
    }
}
