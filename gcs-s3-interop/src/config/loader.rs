/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::environment::credentials::EnvironmentVariableCredentialsProvider;
use aws_sdk_s3::config::{RequestChecksumCalculation, ResponseChecksumValidation};
use aws_types::region::Region;

use crate::config::Builder;
use crate::Config;

/// Load [`Config`] from the environment.
///
/// Credentials are only read from the `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
/// environment variables. Shared config files and instance metadata are never consulted.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Endpoint of the interoperable XML API.
    ///
    /// Default is `https://storage.googleapis.com`
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint_url(endpoint_url);
        self
    }

    /// Region to sign requests for.
    ///
    /// Default is `auto`
    pub fn region(mut self, region: Region) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// Location constraint sent with every `CreateBucket` request.
    ///
    /// Default is `US`
    pub fn location_constraint(mut self, location_constraint: impl Into<String>) -> Self {
        self.builder = self.builder.location_constraint(location_constraint);
        self
    }

    /// Use path-style addressing instead of virtual-hosted style.
    ///
    /// Default is `false`
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.builder = self.builder.force_path_style(force_path_style);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env()
            .credentials_provider(EnvironmentVariableCredentialsProvider::new())
            .region(self.builder.region.clone())
            .endpoint_url(self.builder.endpoint_url.clone())
            .load()
            .await;

        // the interoperable API rejects the flexible checksum headers/trailers newer SDKs send
        // by default
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(self.builder.force_path_style)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .build();

        tracing::debug!(
            "loaded config: endpoint={}, region={}, force_path_style={}",
            self.builder.endpoint_url,
            self.builder.region,
            self.builder.force_path_style
        );

        let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
        self.builder.client(s3_client).build()
    }
}
