//! Session error types.

/// Errors that end a [`Session`](crate::session::Session) early.
///
/// Domain rejections are never surfaced here: the session prints them and
/// keeps going.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The console could not be read from or written to.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    /// The input stream ended.
    #[error("input closed")]
    InputClosed,
}
