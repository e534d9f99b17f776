/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lists Cloud Storage buckets through the S3 interoperable XML API.
//!
//! HMAC credentials are read from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
//! Set `RUST_LOG=aws_smithy_runtime=debug` to see the wire level SDK logs.

use std::error::Error;

use aws_sdk_s3::error::DisplayErrorContext;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = gcs_s3_interop::from_env().load().await;
    tracing::debug!("using endpoint {}", config.endpoint_url());
    let client = gcs_s3_interop::Client::new(config);

    if let Err(err) = client.list_buckets().await {
        tracing::error!("list buckets failed: {}", DisplayErrorContext(&err));
        return Err(err.into());
    }

    Ok(())
}
