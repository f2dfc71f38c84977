//! Port plumbing errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// The relay stopped listening on `checkPassword`.
    #[error("checkPassword port is closed")]
    InboundClosed,
    /// The shell dropped its `passwordChecked` receiver.
    #[error("passwordChecked port is closed")]
    OutboundClosed,
}
