/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;
use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketOutput;
use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::get_bucket_acl::GetBucketAclOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::list_objects::ListObjectsOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;

use crate::error::Error;
use crate::operation;
use crate::types::DownloadOutput;
use crate::Config;

/// Storage client for an S3 interoperable endpoint.
///
/// Every method sends exactly one request. Nothing is cached between calls, and errors are
/// never retried beyond what the underlying SDK client is configured to do.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Create a bucket.
    ///
    /// The bucket is created with the configured location constraint (`US` by default). Fails if
    /// the name is invalid or already taken.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gcs_s3_interop::error::{Error, ErrorKind};
    ///
    /// async fn ensure_bucket(client: &gcs_s3_interop::Client) -> Result<(), Error> {
    ///     match client.create_bucket("my-bucket").await {
    ///         Ok(_) => Ok(()),
    ///         Err(err) if err.kind() == &ErrorKind::AlreadyExists => Ok(()),
    ///         Err(err) => Err(err),
    ///     }
    /// }
    /// ```
    pub async fn create_bucket(&self, bucket: &str) -> Result<CreateBucketOutput, Error> {
        operation::bucket::create_bucket(self.config(), bucket).await
    }

    /// Get the access control list of a bucket.
    pub async fn get_bucket_acl(&self, bucket: &str) -> Result<GetBucketAclOutput, Error> {
        operation::bucket::get_bucket_acl(self.config(), bucket).await
    }

    /// List buckets and print their names to stdout.
    ///
    /// Prints a `Buckets:` header followed by one name per line, in the order the service
    /// returned them. Only the first page of results is read.
    pub async fn list_buckets(&self) -> Result<ListBucketsOutput, Error> {
        let output = operation::bucket::list_buckets(self.config()).await?;
        operation::bucket::write_bucket_names(&mut io::stdout().lock(), &output)?;
        Ok(output)
    }

    /// Upload a local file as an object.
    ///
    /// An existing object with the same key is overwritten.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn upload(client: &gcs_s3_interop::Client) -> Result<(), Box<dyn Error>> {
    ///     let output = client
    ///         .upload_object("my-bucket", "resources/example.txt", "random-object")
    ///         .await?;
    ///     println!("uploaded with etag {:?}", output.e_tag());
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload_object(
        &self,
        bucket: &str,
        path: impl AsRef<Path>,
        key: &str,
    ) -> Result<PutObjectOutput, Error> {
        operation::object::upload_object(self.config(), bucket, path.as_ref(), key).await
    }

    /// List objects in a bucket and print their keys to stdout.
    ///
    /// Prints an `Objects:` header followed by one key per line, in the order the service
    /// returned them. Only the first page of results is read.
    pub async fn list_objects(&self, bucket: &str) -> Result<ListObjectsOutput, Error> {
        let output = operation::object::list_objects(self.config(), bucket).await?;
        operation::object::write_object_keys(&mut io::stdout().lock(), &output)?;
        Ok(output)
    }

    /// Get an object.
    ///
    /// The body is returned unread in [`GetObjectOutput::body`].
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<GetObjectOutput, Error> {
        operation::object::get_object(self.config(), bucket, key).await
    }

    /// Download an object to a local file.
    ///
    /// The file is created, or replaced if it already exists. It is only replaced once the whole
    /// object has been received, a failed download leaves an existing file unchanged.
    pub async fn download_object(
        &self,
        bucket: &str,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<DownloadOutput, Error> {
        operation::object::download_object(self.config(), bucket, key, path.as_ref()).await
    }

    /// Delete an object.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<DeleteObjectOutput, Error> {
        operation::object::delete_object(self.config(), bucket, key).await
    }

    /// Delete a bucket.
    ///
    /// The bucket must be empty, delete its objects first.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<DeleteBucketOutput, Error> {
        operation::bucket::delete_bucket(self.config(), bucket).await
    }
}
