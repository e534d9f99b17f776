/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketOutput;
use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::get_bucket_acl::GetBucketAclOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::list_objects::ListObjectsOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use tokio::runtime::Runtime;

use crate::error::{self, Error, ErrorKind};
use crate::types::DownloadOutput;
use crate::Config;

/// Blocking counterpart of [`crate::Client`].
///
/// Owns a single threaded runtime and blocks the calling thread for the duration of each
/// request. Must not be used from within an async context, calls will panic.
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Creates a new blocking client from a config.
    pub fn new(config: Config) -> Result<Client, Error> {
        Ok(Client {
            inner: crate::Client::new(config),
            runtime: new_runtime()?,
        })
    }

    /// Creates a new blocking client using the default configuration loaded from the environment.
    pub fn from_env() -> Result<Client, Error> {
        let runtime = new_runtime()?;
        let config = runtime.block_on(crate::from_env().load());
        Ok(Client {
            inner: crate::Client::new(config),
            runtime,
        })
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// See [`crate::Client::create_bucket`]
    pub fn create_bucket(&self, bucket: &str) -> Result<CreateBucketOutput, Error> {
        self.runtime.block_on(self.inner.create_bucket(bucket))
    }

    /// See [`crate::Client::get_bucket_acl`]
    pub fn get_bucket_acl(&self, bucket: &str) -> Result<GetBucketAclOutput, Error> {
        self.runtime.block_on(self.inner.get_bucket_acl(bucket))
    }

    /// See [`crate::Client::list_buckets`]
    pub fn list_buckets(&self) -> Result<ListBucketsOutput, Error> {
        self.runtime.block_on(self.inner.list_buckets())
    }

    /// See [`crate::Client::upload_object`]
    pub fn upload_object(
        &self,
        bucket: &str,
        path: impl AsRef<Path>,
        key: &str,
    ) -> Result<PutObjectOutput, Error> {
        self.runtime.block_on(self.inner.upload_object(bucket, path, key))
    }

    /// See [`crate::Client::list_objects`]
    pub fn list_objects(&self, bucket: &str) -> Result<ListObjectsOutput, Error> {
        self.runtime.block_on(self.inner.list_objects(bucket))
    }

    /// See [`crate::Client::get_object`]
    ///
    /// The body is read to completion before returning, so it can be consumed without a runtime.
    pub fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectOutput, Error> {
        self.runtime.block_on(async {
            let mut output = self.inner.get_object(bucket, key).await?;
            let data = output.body.collect().await?;
            output.body = data.into_bytes().into();
            Ok::<_, Error>(output)
        })
    }

    /// See [`crate::Client::download_object`]
    pub fn download_object(
        &self,
        bucket: &str,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<DownloadOutput, Error> {
        self.runtime.block_on(self.inner.download_object(bucket, key, path))
    }

    /// See [`crate::Client::delete_object`]
    pub fn delete_object(&self, bucket: &str, key: &str) -> Result<DeleteObjectOutput, Error> {
        self.runtime.block_on(self.inner.delete_object(bucket, key))
    }

    /// See [`crate::Client::delete_bucket`]
    pub fn delete_bucket(&self, bucket: &str) -> Result<DeleteBucketOutput, Error> {
        self.runtime.block_on(self.inner.delete_bucket(bucket))
    }
}

fn new_runtime() -> Result<Runtime, Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(error::from_kind(ErrorKind::RuntimeError))
}
