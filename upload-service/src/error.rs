/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of upload errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues (e.g. missing or empty bucket/key).
    ///
    /// Raised before the storage backend is contacted.
    InvalidArgument,

    /// The storage backend failed to store the object (network failure, permission
    /// denied, bucket not found, etc).
    StorageBackend,

    /// Local I/O errors reading the payload
    IOError,
}

impl Error {
    /// Creates a new upload [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::StorageBackend => write!(f, "storage backend error"),
            ErrorKind::IOError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        Error::new(ErrorKind::StorageBackend, value)
    }
}

/// Names the backend operation (and target) that produced an error.
#[derive(Debug)]
struct OperationFailed {
    operation: String,
    source: BoxError,
}

impl fmt::Display for OperationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.operation)
    }
}

impl std::error::Error for OperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub(crate) fn invalid_argument<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidArgument, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

/// Classify a failed backend call as [`ErrorKind::StorageBackend`], recording which
/// operation failed.
pub(crate) fn storage_backend<E>(operation: impl Into<String>) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    let operation = operation.into();
    move |err| {
        Error::new(
            ErrorKind::StorageBackend,
            OperationFailed {
                operation,
                source: err.into(),
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::{invalid_argument, storage_backend, ErrorKind};
    use aws_sdk_s3::config::http::HttpResponse;
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::put_object::PutObjectError;
    use aws_smithy_types::error::display::DisplayErrorContext;

    #[test]
    fn test_invalid_argument_display() {
        let err = invalid_argument("key must not be empty");
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());
        assert_eq!("invalid argument", err.to_string());
        let full = format!("{}", DisplayErrorContext(&err));
        assert!(full.contains("key must not be empty"), "{full}");
    }

    #[test]
    fn test_storage_backend_records_operation() {
        let err = storage_backend("PutObject s3://testbucket/testfile.txt")("connection refused");
        assert_eq!(&ErrorKind::StorageBackend, err.kind());
        let full = format!("{}", DisplayErrorContext(&err));
        assert!(
            full.contains("PutObject s3://testbucket/testfile.txt failed"),
            "{full}"
        );
        assert!(full.contains("connection refused"), "{full}");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: super::Error = io_err.into();
        assert_eq!(&ErrorKind::IOError, err.kind());
    }

    #[test]
    fn test_sdk_error_conversion() {
        let sdk_err =
            SdkError::<PutObjectError, HttpResponse>::construction_failure("missing region");
        let err: super::Error = sdk_err.into();
        assert_eq!(&ErrorKind::StorageBackend, err.kind());
        let full = format!("{}", DisplayErrorContext(&err));
        assert!(full.contains("missing region"), "{full}");
    }
}
