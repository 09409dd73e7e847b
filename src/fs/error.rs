use derive_more::{Display, Error};
use libc::c_int;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("sync not supported by file")]
pub struct SyncUnsupportedError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("permission denied for the file or one of its parent directories")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("path contains a nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("file system is read-only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("file exceeds the maximum size")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, Copy, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);
