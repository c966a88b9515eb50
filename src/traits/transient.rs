//! Transient fault classification for retry decisions.

/// Classification of errors as transient faults or permanent failures.
///
/// The async rail distinguishes two failure paths: a *domain* failure is an
/// ordinary `Err` value and propagates through the combinators untouched,
/// while a *transient fault* (connection reset, timeout, contended lock) may
/// succeed on a fresh attempt. Retry helpers consult this trait and retry
/// only the transient path.
///
/// # Examples
///
/// ```
/// use fp_rail::traits::Transient;
///
/// #[derive(Debug)]
/// enum FetchError {
///     Timeout,
///     NotFound,
/// }
///
/// impl Transient for FetchError {
///     fn is_transient(&self) -> bool {
///         matches!(self, FetchError::Timeout)
///     }
/// }
///
/// assert!(FetchError::Timeout.is_transient());
/// assert!(FetchError::NotFound.is_permanent());
/// ```
pub trait Transient {
    /// Returns `true` if this error may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if retrying cannot help.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

/// I/O errors are transient when the failure is connection-shaped.
#[cfg(feature = "std")]
impl Transient for std::io::Error {
    fn is_transient(&self) -> bool {
        use std::io::ErrorKind;
        matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        )
    }
}
