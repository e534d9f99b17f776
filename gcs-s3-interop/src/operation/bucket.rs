/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;

use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketOutput;
use aws_sdk_s3::operation::get_bucket_acl::GetBucketAclOutput;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::types::CreateBucketConfiguration;
use tracing::Instrument;

use crate::error;
use crate::operation::require_non_empty;
use crate::Config;

pub(crate) async fn create_bucket(
    config: &Config,
    bucket: &str,
) -> Result<CreateBucketOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    let bucket_config = CreateBucketConfiguration::builder()
        .location_constraint(config.location_constraint().clone())
        .build();

    let output = config
        .client()
        .create_bucket()
        .bucket(bucket)
        .create_bucket_configuration(bucket_config)
        .send()
        .instrument(tracing::debug_span!("send-create-bucket", bucket))
        .await?;

    tracing::debug!("created bucket {bucket:?} at {:?}", output.location());
    Ok(output)
}

pub(crate) async fn get_bucket_acl(
    config: &Config,
    bucket: &str,
) -> Result<GetBucketAclOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    let output = config
        .client()
        .get_bucket_acl()
        .bucket(bucket)
        .send()
        .instrument(tracing::debug_span!("send-get-bucket-acl", bucket))
        .await?;

    tracing::trace!("bucket {bucket:?} has {} grants", output.grants().len());
    Ok(output)
}

/// List buckets owned by the caller.
///
/// Only the first page returned by the service is read.
pub(crate) async fn list_buckets(config: &Config) -> Result<ListBucketsOutput, error::Error> {
    let output = config
        .client()
        .list_buckets()
        .send()
        .instrument(tracing::debug_span!("send-list-buckets"))
        .await?;

    if output.continuation_token().is_some() {
        tracing::debug!("list buckets response truncated, only the first page is returned");
    }
    Ok(output)
}

pub(crate) async fn delete_bucket(
    config: &Config,
    bucket: &str,
) -> Result<DeleteBucketOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    let output = config
        .client()
        .delete_bucket()
        .bucket(bucket)
        .send()
        .instrument(tracing::debug_span!("send-delete-bucket", bucket))
        .await?;

    tracing::debug!("deleted bucket {bucket:?}");
    Ok(output)
}

/// Write a `Buckets:` header followed by one bucket name per line, in listing order.
pub(crate) fn write_bucket_names<W: io::Write>(
    out: &mut W,
    output: &ListBucketsOutput,
) -> io::Result<()> {
    writeln!(out, "Buckets:")?;
    for name in output.buckets().iter().filter_map(|b| b.name()) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::create_bucket::{CreateBucketError, CreateBucketOutput};
    use aws_sdk_s3::operation::delete_bucket::{DeleteBucketError, DeleteBucketOutput};
    use aws_sdk_s3::operation::get_bucket_acl::{GetBucketAclError, GetBucketAclOutput};
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::types::error::BucketAlreadyOwnedByYou;
    use aws_sdk_s3::types::{Bucket, BucketLocationConstraint, Grant, Owner, Permission};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
    use aws_smithy_types::error::ErrorMetadata;

    use super::*;
    use crate::error::ErrorKind;
    use crate::operation::test_config;

    fn list_resp(names: &[&str]) -> ListBucketsOutput {
        let buckets = names
            .iter()
            .map(|n| Bucket::builder().name(*n).build())
            .collect();
        ListBucketsOutput::builder()
            .set_buckets(Some(buckets))
            .build()
    }

    #[tokio::test]
    async fn test_create_bucket_sends_location_constraint() {
        let (_guard, rx) = capture_test_logs();
        let create = mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.create_bucket_configuration()
                        .and_then(|c| c.location_constraint())
                        == Some(&BucketLocationConstraint::from("US"))
            })
            .then_output(|| {
                CreateBucketOutput::builder()
                    .location("/test-bucket")
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&create]);
        let config = test_config(client);

        let output = create_bucket(&config, "test-bucket").await.unwrap();
        assert_eq!(Some("/test-bucket"), output.location());
        assert!(rx.contents().contains("created bucket \"test-bucket\""));
    }

    #[tokio::test]
    async fn test_create_bucket_already_exists() {
        let create = mock!(aws_sdk_s3::Client::create_bucket).then_error(|| {
            CreateBucketError::BucketAlreadyOwnedByYou(
                BucketAlreadyOwnedByYou::builder()
                    .meta(
                        ErrorMetadata::builder()
                            .code("BucketAlreadyOwnedByYou")
                            .build(),
                    )
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&create]);
        let config = test_config(client);

        let err = create_bucket(&config, "test-bucket").await.unwrap_err();
        assert_eq!(&ErrorKind::AlreadyExists, err.kind());
    }

    #[tokio::test]
    async fn test_get_bucket_acl() {
        let acl = mock!(aws_sdk_s3::Client::get_bucket_acl)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| {
                GetBucketAclOutput::builder()
                    .owner(Owner::builder().id("owner-id").build())
                    .grants(
                        Grant::builder()
                            .permission(Permission::FullControl)
                            .build(),
                    )
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&acl]);
        let config = test_config(client);

        let output = get_bucket_acl(&config, "test-bucket").await.unwrap();
        assert_eq!(Some("owner-id"), output.owner().and_then(|o| o.id()));
        assert_eq!(1, output.grants().len());
    }

    #[tokio::test]
    async fn test_get_bucket_acl_missing_bucket() {
        let acl = mock!(aws_sdk_s3::Client::get_bucket_acl).then_error(|| {
            GetBucketAclError::generic(ErrorMetadata::builder().code("NoSuchBucket").build())
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&acl]);
        let config = test_config(client);

        let err = get_bucket_acl(&config, "missing").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_list_buckets() {
        let list = mock!(aws_sdk_s3::Client::list_buckets)
            .then_output(|| list_resp(&["bucket-b", "bucket-a", "test-bucket"]));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]);
        let config = test_config(client);

        let output = list_buckets(&config).await.unwrap();
        let mut out = Vec::new();
        write_bucket_names(&mut out, &output).unwrap();

        // provider order is kept
        assert_eq!(
            "Buckets:\nbucket-b\nbucket-a\ntest-bucket\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_write_bucket_names_empty() {
        let output = ListBucketsOutput::builder().build();
        let mut out = Vec::new();
        write_bucket_names(&mut out, &output).unwrap();
        assert_eq!("Buckets:\n", String::from_utf8(out).unwrap());
    }

    #[tokio::test]
    async fn test_delete_bucket_not_empty() {
        let delete = mock!(aws_sdk_s3::Client::delete_bucket)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_error(|| {
                DeleteBucketError::generic(
                    ErrorMetadata::builder()
                        .code("BucketNotEmpty")
                        .message("The bucket you tried to delete is not empty.")
                        .build(),
                )
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]);
        let config = test_config(client);

        let err = delete_bucket(&config, "test-bucket").await.unwrap_err();
        assert_eq!(&ErrorKind::BucketNotEmpty, err.kind());
    }

    #[tokio::test]
    async fn test_delete_bucket() {
        let delete = mock!(aws_sdk_s3::Client::delete_bucket)
            .match_requests(|r| r.bucket() == Some("test-bucket"))
            .then_output(|| DeleteBucketOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]);
        let config = test_config(client);

        delete_bucket(&config, "test-bucket").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_bucket_empty_name() {
        let create = mock!(aws_sdk_s3::Client::create_bucket)
            .then_output(|| CreateBucketOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&create]);
        let config = test_config(client);

        let err = create_bucket(&config, "").await.unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
