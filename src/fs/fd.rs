use std::mem::ManuallyDrop;
use std::ops::Deref;

use libc::c_int;
use log::warn;

use super::CloseError;
use crate::util::syscall::err_no;

/// An owned file descriptor, closed when dropped.
#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    /// Closes the descriptor, reporting failure instead of only logging it like [`Drop`] does.
    pub fn close(self) -> Result<(), CloseError> {
        // The descriptor is invalid after close regardless of the outcome, so it must not be closed
        // again on drop.
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is owned and never used after this call.
        if unsafe { libc::close(fd.0) } == -1 {
            return Err(CloseError::interpret_raw_error(err_no()));
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            warn!(
                "error while dropping file descriptor {}: {}",
                self.0,
                CloseError::interpret_raw_error(err_no())
            );
        }
    }
}
