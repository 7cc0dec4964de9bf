//! Error kinds signaled by request classification.

use thiserror::Error;

/// Errors a case can signal while handling a request.
///
/// Every variant carries the originally requested path so the error page can
/// name what the client asked for rather than an internal filesystem path.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The resolved path does not exist on the filesystem.
    #[error("'{path}' not found")]
    NotFound { path: String },

    /// The resolved path is a file but reading it failed (permissions,
    /// disappeared mid-request, I/O error).
    #[error("'{path}' cannot be read: {source}")]
    ReadFailure {
        path: String,
        source: std::io::Error,
    },

    /// The resolved path exists but is neither a regular file nor a
    /// directory (socket, pipe, device).
    #[error("Unknown object '{path}'")]
    UnknownObject { path: String },

    /// The directory's entries could not be enumerated.
    #[error("'{path}' cannot be listed: {source}")]
    ListingFailure {
        path: String,
        source: std::io::Error,
    },
}
