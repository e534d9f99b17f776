/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Bucket and object operations against Google Cloud Storage using the AWS S3 SDK.
//!
//! Cloud Storage exposes an [interoperable XML API] that accepts S3 shaped requests. This crate
//! configures an [`aws_sdk_s3::Client`] with the Cloud Storage endpoint and the `auto` region and
//! exposes one method per storage operation. Every method is a single request; responses and
//! errors from the service are handed back to the caller as-is.
//!
//! [interoperable XML API]: https://cloud.google.com/storage/docs/interoperability
//!
//! # Examples
//!
//! Load the default configuration. HMAC credentials are read from the `AWS_ACCESS_KEY_ID` and
//! `AWS_SECRET_ACCESS_KEY` environment variables:
//!
//! ```no_run
//! # async fn example() {
//! let config = gcs_s3_interop::from_env().load().await;
//! let client = gcs_s3_interop::Client::new(config);
//! # }
//! ```
//!
//! Upload a file and read it back:
//!
//! ```no_run
//! # async fn example() -> Result<(), gcs_s3_interop::error::Error> {
//! let config = gcs_s3_interop::from_env().load().await;
//! let client = gcs_s3_interop::Client::new(config);
//!
//! client.create_bucket("my-bucket").await?;
//! client
//!     .upload_object("my-bucket", "resources/example.txt", "random-object")
//!     .await?;
//! client
//!     .download_object("my-bucket", "random-object", "/tmp/example.txt")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Callers without an async runtime can use [`blocking::Client`] instead.

/// Default Cloud Storage XML API endpoint
pub(crate) const DEFAULT_ENDPOINT_URL: &str = "https://storage.googleapis.com";

/// Region the interoperable API expects requests to be signed for
pub(crate) const DEFAULT_REGION: &str = "auto";

/// Location constraint sent with `CreateBucket`
pub(crate) const DEFAULT_LOCATION_CONSTRAINT: &str = "US";

/// Error types emitted by `gcs-s3-interop`
pub mod error;

/// Common types used by `gcs-s3-interop`
pub mod types;

/// Interoperable storage client
pub mod client;

/// Client configuration
pub mod config;

/// Synchronous wrapper around [`Client`]
pub mod blocking;

/// Bucket and object operations
pub(crate) mod operation;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
