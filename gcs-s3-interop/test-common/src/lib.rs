/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::ErrorMetadata;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

/// Create a temporary directory containing a single file named `name` with `contents`.
///
/// The directory (and the file) is removed when the returned [`tempfile::TempDir`] is dropped.
pub fn create_test_file(name: &str, contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Wrap a (mocked) S3 client with the default interop configuration
pub fn interop_client(client: aws_sdk_s3::Client) -> gcs_s3_interop::Client {
    let config = gcs_s3_interop::Config::builder().client(client).build();
    gcs_s3_interop::Client::new(config)
}

/// Build a service error carrying only a code and message, for operations whose errors are
/// not modeled (e.g. `DeleteBucket`)
pub fn error_meta(code: &str, message: &str) -> ErrorMetadata {
    ErrorMetadata::builder()
        .code(code)
        .message(message)
        .build()
}

// Generate UUID for the process to be used in tests to avoid conflicts between concurrent tests runs.
pub fn global_uuid_str() -> &'static str {
    static UUID_STR: OnceLock<String> = OnceLock::new();
    UUID_STR.get_or_init(|| Uuid::new_v4().to_string())
}
