/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

/// Response for downloading an object to a local file
///
/// The object body is consumed writing the file, the remaining response fields of interest are
/// kept here.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutput {
    pub(crate) path: PathBuf,
    pub(crate) bytes_written: u64,
    pub(crate) content_length: Option<i64>,
    pub(crate) e_tag: Option<String>,
}

impl DownloadOutput {
    /// Local file the object was written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of bytes written to [`path`](Self::path)
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Size of the object body as reported by the service
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }

    /// Entity tag of the downloaded object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}
