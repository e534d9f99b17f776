/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Bucket level operations (create, ACL, list, delete)
pub(crate) mod bucket;

/// Object level operations (upload, list, get, download, delete)
pub(crate) mod object;

/// Reject an empty bucket name or key before any request is sent.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), crate::error::Error> {
    if value.is_empty() {
        return Err(crate::error::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_config(client: aws_sdk_s3::Client) -> crate::Config {
    crate::Config::builder().client(client).build()
}
