use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the document store, the index and the catalog.
///
/// | Variant           | Raised when                                           |
/// |-------------------|-------------------------------------------------------|
/// | `InvalidArgument` | a required identifier is missing or unusable          |
/// | `NotFound`        | the document or index file does not exist             |
/// | `AlreadyExists`   | a move would overwrite another item's document        |
/// | `Corrupt`         | stored bytes do not deserialize                       |
/// | `Io`              | any other filesystem failure                          |
/// | `PartialFailure`  | a compound operation failed after earlier steps stuck |
/// | `Backend`         | an upload or notification collaborator failed         |
///
/// Every variant carries the operation and/or the path involved so messages
/// can be shown to the operator as-is.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{op}: invalid argument: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{op}: already exists: {}", path.display())]
    AlreadyExists { op: &'static str, path: PathBuf },

    #[error("corrupt document {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("{op} failed for {}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{op} partially failed: {}", join_errors(errors))]
    PartialFailure {
        op: &'static str,
        errors: Vec<CatalogError>,
    },

    #[error("{op}: backend failure: {reason}")]
    Backend { op: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// Map an I/O error, turning `NotFound` into [`CatalogError::NotFound`].
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound { path }
        } else {
            CatalogError::Io { op, path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

fn join_errors(errors: &[CatalogError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err = CatalogError::io(
            "read",
            "/tmp/missing.yaml",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/tmp/missing.yaml"));
    }

    #[test]
    fn test_io_other_keeps_operation() {
        let err = CatalogError::io(
            "write",
            "/tmp/doc.yaml",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, CatalogError::Io { op: "write", .. }));
        assert!(err.to_string().starts_with("write failed for /tmp/doc.yaml"));
    }

    #[test]
    fn test_partial_failure_lists_every_error() {
        let err = CatalogError::PartialFailure {
            op: "delete",
            errors: vec![
                CatalogError::io("remove", "/a.yaml", io::Error::other("disk on fire")),
                CatalogError::io("remove", "/a.md", io::Error::other("still on fire")),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("/a.yaml"));
        assert!(message.contains("/a.md"));
    }

    #[test]
    fn test_io_message_leaves_cause_to_source_chain() {
        let err = CatalogError::io(
            "remove",
            "/tmp/vid.md",
            io::Error::other("device busy"),
        );
        assert_eq!(err.to_string(), "remove failed for /tmp/vid.md");

        let source = std::error::Error::source(&err).expect("io error should be the source");
        assert_eq!(source.to_string(), "device busy");

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain.matches("device busy").count(), 1);
    }
}
