use derive_more::{Display, Error, From};
use libc::c_int;

use super::error::*;

#[derive(Debug, Display, Clone, Copy, From, Error)]
pub enum OpenError {
    Access(AccessError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    IsDirectory(IsDirectoryError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    PathLength(PathLengthError),
    ReadOnlyFS(ReadOnlyFSError),
    StorageExhausted(StorageExhaustedError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    pub(crate) fn interpret_raw_error(errno: c_int) -> OpenError {
        match errno {
            libc::EACCES | libc::EPERM => AccessError.into(),
            libc::EMFILE | libc::ENFILE => FileCountError.into(),
            libc::EINTR => InterruptError.into(),
            libc::EISDIR => IsDirectoryError.into(),
            libc::ENOENT => MissingComponentError.into(),
            libc::ENOTDIR => NonDirComponentError.into(),
            libc::ENAMETOOLONG => PathLengthError.into(),
            libc::EROFS => ReadOnlyFSError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, From, Error)]
pub enum SyncError {
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    SyncUnsupported(SyncUnsupportedError),
    Unexpected(UnexpectedError),
}

impl SyncError {
    pub(crate) fn interpret_raw_error(errno: c_int) -> SyncError {
        match errno {
            libc::EIO => IOError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            libc::EROFS | libc::EINVAL => SyncUnsupportedError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, From, Error)]
pub enum WriteError {
    IO(IOError),
    OversizedFile(OversizedFileError),
    StorageExhausted(StorageExhaustedError),
    SyncUnsupported(SyncUnsupportedError),
    Unexpected(UnexpectedError),
}

impl WriteError {
    pub(crate) fn interpret_raw_error(errno: c_int) -> WriteError {
        match errno {
            libc::EIO => IOError.into(),
            libc::EFBIG => OversizedFileError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}

impl From<SyncError> for WriteError {
    fn from(value: SyncError) -> Self {
        match value {
            SyncError::IO(e) => e.into(),
            SyncError::StorageExhausted(e) => e.into(),
            SyncError::SyncUnsupported(e) => e.into(),
            SyncError::Unexpected(e) => e.into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, From, Error)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    Unexpected(UnexpectedError),
}

impl CloseError {
    pub(crate) fn interpret_raw_error(errno: c_int) -> CloseError {
        match errno {
            libc::EINTR => InterruptError.into(),
            libc::EIO => IOError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, From, Error)]
pub enum FinishError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    SyncUnsupported(SyncUnsupportedError),
    Unexpected(UnexpectedError),
}

impl From<SyncError> for FinishError {
    fn from(value: SyncError) -> Self {
        match value {
            SyncError::IO(e) => e.into(),
            SyncError::StorageExhausted(e) => e.into(),
            SyncError::SyncUnsupported(e) => e.into(),
            SyncError::Unexpected(e) => e.into(),
        }
    }
}

impl From<CloseError> for FinishError {
    fn from(value: CloseError) -> Self {
        match value {
            CloseError::Interrupt(e) => e.into(),
            CloseError::IO(e) => e.into(),
            CloseError::StorageExhausted(e) => e.into(),
            CloseError::Unexpected(e) => e.into(),
        }
    }
}
