use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const FILE_ERROR_CODE: &str = "FILE_ERROR";
pub const ERROR_CODE: &str = "ERROR";

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The binary is not where the package should have unpacked it.
    ///
    /// `listing` is a snapshot of the directory for diagnostics; `None` when
    /// the directory could not be enumerated, which renders as "empty".
    #[error("FRPC binary not found at {}\nDirectory contents: {}", .path.display(), render_listing(.listing))]
    BinaryMissing {
        path: PathBuf,
        listing: Option<Vec<String>>,
    },

    #[error("Failed to get FRPC path: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ResolveError::Io {
            context: context.into(),
            source,
        }
    }

    /// Short code handed across the bridge.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::BinaryMissing { .. } => FILE_ERROR_CODE,
            ResolveError::Io { .. } => ERROR_CODE,
        }
    }
}

fn render_listing(listing: &Option<Vec<String>>) -> String {
    match listing {
        Some(names) => names.join(", "),
        None => "empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_message_lists_directory() {
        let err = ResolveError::BinaryMissing {
            path: PathBuf::from("/lib/libfrpc.so"),
            listing: Some(vec!["liba.so".into(), "libb.so".into()]),
        };
        assert_eq!(err.code(), "FILE_ERROR");
        assert_eq!(
            err.to_string(),
            "FRPC binary not found at /lib/libfrpc.so\nDirectory contents: liba.so, libb.so"
        );
    }

    #[test]
    fn unlisted_directory_renders_empty() {
        let err = ResolveError::BinaryMissing {
            path: PathBuf::from("/lib/libfrpc.so"),
            listing: None,
        };
        assert!(err.to_string().ends_with("Directory contents: empty"));
    }

    #[test]
    fn empty_directory_renders_no_names() {
        let err = ResolveError::BinaryMissing {
            path: PathBuf::from("/lib/libfrpc.so"),
            listing: Some(Vec::new()),
        };
        assert!(err.to_string().ends_with("Directory contents: "));
    }

    #[test]
    fn io_failures_use_generic_code() {
        let err = ResolveError::io(
            "stat /lib/libfrpc.so",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code(), "ERROR");
        assert_eq!(
            err.to_string(),
            "Failed to get FRPC path: stat /lib/libfrpc.so: denied"
        );
    }
}
