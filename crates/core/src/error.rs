use std::path::PathBuf;

/// Errors raised when reading the backing states document
///
/// A lookup that finds nothing is not an error; it surfaces as `None` from
/// the query API and callers render it as descriptive text.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing resource is missing or unreadable
    #[error("states file {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content did not parse into a states document
    #[error("states file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
