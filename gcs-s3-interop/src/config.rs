/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::BucketLocationConstraint;
use aws_types::region::Region;

use crate::{DEFAULT_ENDPOINT_URL, DEFAULT_LOCATION_CONSTRAINT, DEFAULT_REGION};

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    endpoint_url: String,
    region: Region,
    location_constraint: BucketLocationConstraint,
    force_path_style: bool,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the endpoint requests are sent to
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Returns the region requests are signed for
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the location constraint used when creating buckets
    pub fn location_constraint(&self) -> &BucketLocationConstraint {
        &self.location_constraint
    }

    /// Returns true if requests use path-style (`endpoint/bucket/key`) addressing.
    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }

    /// The S3 client instance that will be used to send requests.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone)]
pub struct Builder {
    endpoint_url: String,
    region: Region,
    location_constraint: BucketLocationConstraint,
    force_path_style: bool,
    client: Option<aws_sdk_s3::Client>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            region: Region::from_static(DEFAULT_REGION),
            location_constraint: BucketLocationConstraint::from(DEFAULT_LOCATION_CONSTRAINT),
            force_path_style: false,
            client: None,
        }
    }
}

impl Builder {
    /// Endpoint of the interoperable XML API.
    ///
    /// Default is `https://storage.googleapis.com`
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    /// Region to sign requests for.
    ///
    /// Default is `auto`
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Location constraint sent with every `CreateBucket` request.
    ///
    /// Default is `US`
    pub fn location_constraint(mut self, location_constraint: impl Into<String>) -> Self {
        self.location_constraint =
            BucketLocationConstraint::from(location_constraint.into().as_str());
        self
    }

    /// Use path-style addressing instead of virtual-hosted style.
    ///
    /// Default is `false`
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Set an explicit S3 client to use.
    ///
    /// NOTE: the client is used as given, the endpoint, region and addressing settings of this
    /// builder are only applied when loading with [`from_env`](crate::from_env).
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if no client was set with [`Builder::client`]. Use [`from_env`](crate::from_env) to
    /// have one built from the environment.
    pub fn build(self) -> Config {
        Config {
            endpoint_url: self.endpoint_url,
            region: self.region,
            location_constraint: self.location_constraint,
            force_path_style: self.force_path_style,
            client: self.client.expect("client set"),
        }
    }
}
