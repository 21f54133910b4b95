//! Static file resolution under a document root.
//!
//! A request path that passes [`is_safe_path`] is joined onto the document
//! root. Directories fall back to the configured index file. The whole file
//! is read into memory before it is returned.

pub mod safety;

pub use safety::is_safe_path;

use std::io;
use std::path::PathBuf;

use tokio::fs::{self, File};
use tokio::io::AsyncReadExt;

use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Why a static lookup produced no file.
#[derive(Debug)]
pub enum StaticFileError {
    /// Path failed the safety check; answered with 400
    Forbidden,
    /// Missing or unopenable file; answered with 404
    NotFound,
    /// I/O failed after the file was opened; answered with 500
    Internal(io::Error),
}

impl StaticFileError {
    pub fn status(&self) -> StatusCode {
        match self {
            StaticFileError::Forbidden => StatusCode::BadRequest,
            StaticFileError::NotFound => StatusCode::NotFound,
            StaticFileError::Internal(_) => StatusCode::InternalServerError,
        }
    }
}

impl std::fmt::Display for StaticFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaticFileError::Forbidden => f.write_str("unsafe path"),
            StaticFileError::NotFound => f.write_str("file not found"),
            StaticFileError::Internal(e) => write!(f, "file I/O failed: {e}"),
        }
    }
}

impl std::error::Error for StaticFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StaticFileError::Internal(e) => Some(e),
            _ => None,
        }
    }
}

/// A file loaded from the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    /// Filesystem path that was actually read
    pub path: PathBuf,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StaticFile {
    pub fn into_response(self) -> Response {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(self.content_type)
            .body(self.body)
            .build()
    }
}

/// Serves files from one document root.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    index_file: String,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>, index_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
        }
    }

    /// Loads the file a request path designates.
    pub async fn resolve(&self, path: &str) -> Result<StaticFile, StaticFileError> {
        if !is_safe_path(path) {
            return Err(StaticFileError::Forbidden);
        }

        let mut target = self.root.join(path.trim_start_matches('/'));

        if fs::metadata(&target).await.is_ok_and(|meta| meta.is_dir()) {
            target.push(&self.index_file);
        }

        let mut file = File::open(&target)
            .await
            .map_err(|_| StaticFileError::NotFound)?;
        let meta = file.metadata().await.map_err(StaticFileError::Internal)?;

        // The index file itself may be a directory
        if !meta.is_file() {
            return Err(StaticFileError::NotFound);
        }

        let expected = usize::try_from(meta.len()).map_err(|_| {
            StaticFileError::Internal(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "file too large to buffer",
            ))
        })?;

        let mut body = Vec::new();
        body.try_reserve_exact(expected).map_err(|e| {
            StaticFileError::Internal(io::Error::new(io::ErrorKind::OutOfMemory, e))
        })?;

        let read = file
            .read_to_end(&mut body)
            .await
            .map_err(StaticFileError::Internal)?;
        if read != expected {
            return Err(StaticFileError::Internal(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short read: expected {expected} bytes, got {read}"),
            )));
        }

        let file_name = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime::content_type_for(&file_name);

        Ok(StaticFile {
            path: target,
            content_type,
            body,
        })
    }
}
