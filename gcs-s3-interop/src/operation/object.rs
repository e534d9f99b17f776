/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;
use std::path::Path;

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::list_objects::ListObjectsOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

use crate::error;
use crate::operation::require_non_empty;
use crate::types::DownloadOutput;
use crate::Config;

/// Upload the file at `path` as a single `PutObject` request.
///
/// The file is opened before any request is sent so an unreadable path fails without touching the
/// bucket. An existing object with the same key is overwritten.
pub(crate) async fn upload_object(
    config: &Config,
    bucket: &str,
    path: &Path,
    key: &str,
) -> Result<PutObjectOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    require_non_empty("key", key)?;
    let body = ByteStream::from_path(path).await?;
    let content_length = body.size_hint().1;

    let output = config
        .client()
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .instrument(tracing::debug_span!("send-put-object", bucket, key))
        .await?;

    tracing::debug!(
        "uploaded {path:?} to {bucket:?}/{key:?} ({} bytes)",
        content_length.unwrap_or_default()
    );
    Ok(output)
}

/// List objects in `bucket`.
///
/// Only the first page returned by the service is read. No `encoding-type` is requested, the
/// interoperable API does not accept it.
pub(crate) async fn list_objects(
    config: &Config,
    bucket: &str,
) -> Result<ListObjectsOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    let output = config
        .client()
        .list_objects()
        .bucket(bucket)
        .send()
        .instrument(tracing::debug_span!("send-list-objects", bucket))
        .await?;

    if output.is_truncated().unwrap_or(false) {
        tracing::debug!(
            "list objects response for {bucket:?} truncated, only the first page is returned"
        );
    }
    Ok(output)
}

pub(crate) async fn get_object(
    config: &Config,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    require_non_empty("key", key)?;
    let output = config
        .client()
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .instrument(tracing::debug_span!("send-get-object", bucket, key))
        .await?;

    Ok(output)
}

/// Download an object into the file at `path`, creating or replacing it.
///
/// The body is streamed into a temporary file next to `path` which only replaces `path` once the
/// whole body has been written. A missing key or a failure while reading the body leaves an
/// existing local file untouched.
pub(crate) async fn download_object(
    config: &Config,
    bucket: &str,
    key: &str,
    path: &Path,
) -> Result<DownloadOutput, error::Error> {
    let mut output = get_object(config, bucket, key).await?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let (file, temp_path) = tempfile::Builder::new()
        .prefix(".download")
        .suffix(".part")
        .tempfile_in(dir)?
        .into_parts();
    let mut dest = fs::File::from_std(file);
    let mut bytes_written: u64 = 0;

    // dropping `temp_path` on the error path removes the partial file
    async {
        while let Some(chunk) = output.body.try_next().await? {
            dest.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
            tracing::trace!("wrote chunk size: {}", chunk.len());
        }
        dest.flush().await?;
        dest.sync_all().await?;
        Ok::<_, error::Error>(())
    }
    .instrument(tracing::debug_span!("write-output"))
    .await?;

    drop(dest);
    temp_path.persist(path).map_err(io::Error::from)?;

    tracing::debug!("downloaded {bucket:?}/{key:?} to {path:?} ({bytes_written} bytes)");

    Ok(DownloadOutput {
        path: path.to_path_buf(),
        bytes_written,
        content_length: output.content_length(),
        e_tag: output.e_tag().map(str::to_owned),
    })
}

/// Delete an object.
///
/// Deleting a key that does not exist is not treated as an error here, whatever the service
/// answers is returned.
pub(crate) async fn delete_object(
    config: &Config,
    bucket: &str,
    key: &str,
) -> Result<DeleteObjectOutput, error::Error> {
    require_non_empty("bucket", bucket)?;
    require_non_empty("key", key)?;
    let output = config
        .client()
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .instrument(tracing::debug_span!("send-delete-object", bucket, key))
        .await?;

    tracing::debug!("deleted {bucket:?}/{key:?}");
    Ok(output)
}

/// Write an `Objects:` header followed by one object key per line, in listing order.
pub(crate) fn write_object_keys<W: io::Write>(
    out: &mut W,
    output: &ListObjectsOutput,
) -> io::Result<()> {
    writeln!(out, "Objects:")?;
    for key in output.contents().iter().filter_map(|o| o.key()) {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
