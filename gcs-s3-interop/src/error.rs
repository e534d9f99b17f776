/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// Errors returned by this library
///
/// The error returned by the SDK or the filesystem is always available unmodified as the
/// [`source`](std::error::Error::source) of this error.
///
/// NOTE: Use [`aws_sdk_s3::error::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of storage errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues (e.g. empty bucket name or key)
    InputInvalid,

    /// I/O errors (e.g. local file unreadable or not writable)
    IOError,

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// Bucket name is already taken
    AlreadyExists,

    /// Bucket still contains objects
    BucketNotEmpty,

    /// Any other error returned by the service or the transport
    ServiceError,

    /// Some kind of internal runtime issue (e.g. failed to start the blocking runtime)
    RuntimeError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
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
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::AlreadyExists => write!(f, "resource already exists"),
            ErrorKind::BucketNotEmpty => write!(f, "bucket not empty"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
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

impl From<aws_sdk_s3::primitives::ByteStreamError> for Error {
    fn from(value: aws_sdk_s3::primitives::ByteStreamError) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

/// Map a service error code onto an [`ErrorKind`]
fn kind_for_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
        Some("BucketAlreadyExists" | "BucketAlreadyOwnedByYou") => ErrorKind::AlreadyExists,
        Some("BucketNotEmpty") => ErrorKind::BucketNotEmpty,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = kind_for_code(value.code());
        Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::delete_bucket::DeleteBucketError;
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_sdk_s3::types::error::NoSuchKey;
    use aws_smithy_runtime_api::http::{Response, StatusCode};
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    use super::*;

    fn service_error<E>(err: E, status: u16) -> SdkError<E, Response> {
        let raw = Response::new(StatusCode::try_from(status).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw)
    }

    #[test]
    fn test_kind_for_code() {
        assert_eq!(ErrorKind::NotFound, kind_for_code(Some("NoSuchKey")));
        assert_eq!(ErrorKind::NotFound, kind_for_code(Some("NoSuchBucket")));
        assert_eq!(ErrorKind::NotFound, kind_for_code(Some("NotFound")));
        assert_eq!(
            ErrorKind::AlreadyExists,
            kind_for_code(Some("BucketAlreadyOwnedByYou"))
        );
        assert_eq!(
            ErrorKind::BucketNotEmpty,
            kind_for_code(Some("BucketNotEmpty"))
        );
        assert_eq!(ErrorKind::ServiceError, kind_for_code(Some("AccessDenied")));
        assert_eq!(ErrorKind::ServiceError, kind_for_code(None));
    }

    #[test]
    fn test_sdk_error_kept_as_source() {
        let not_found = NoSuchKey::builder()
            .meta(ErrorMetadata::builder().code("NoSuchKey").build())
            .build();
        let err: Error = service_error(GetObjectError::NoSuchKey(not_found), 404).into();

        assert_eq!(&ErrorKind::NotFound, err.kind());
        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<SdkError<GetObjectError, Response>>())
            .expect("sdk error source");
        assert!(source.as_service_error().unwrap().is_no_such_key());
    }

    #[test]
    fn test_unmodeled_error_code() {
        let meta = ErrorMetadata::builder()
            .code("BucketNotEmpty")
            .message("The bucket you tried to delete is not empty.")
            .build();
        let err: Error = service_error(DeleteBucketError::generic(meta), 409).into();
        assert_eq!(&ErrorKind::BucketNotEmpty, err.kind());
        assert_eq!("bucket not empty", err.to_string());
    }

    #[test]
    fn test_io_error() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(&ErrorKind::IOError, err.kind());
    }
}
