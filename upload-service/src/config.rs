/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::{self, Error};
use crate::storage::{normalize_endpoint, S3Storage, SharedStorage, StorageBackend};

/// Load service configuration from the environment
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    storage: SharedStorage,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The storage backend objects are written to.
    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// The base address locators are built from
    pub fn endpoint(&self) -> &str {
        self.storage.endpoint()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    storage: Option<SharedStorage>,
    client: Option<aws_sdk_s3::Client>,
    endpoint: Option<String>,
}

impl Builder {
    /// Set an explicit S3 client to use.
    ///
    /// The client must be paired with the [`endpoint`](Self::endpoint) it sends requests to.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// The base endpoint of the S3 client (e.g. `http://localhost:9000`).
    ///
    /// Used to build the locator returned for every uploaded object.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Use an explicit storage backend.
    ///
    /// Takes precedence over [`client`](Self::client) and [`endpoint`](Self::endpoint).
    pub fn storage(mut self, storage: impl StorageBackend + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Use an explicit, already shared, storage backend.
    pub fn shared_storage(mut self, storage: SharedStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, Error> {
        let endpoint = self
            .endpoint
            .map(normalize_endpoint)
            .filter(|endpoint| !endpoint.is_empty());
        let storage = match (self.storage, self.client, endpoint) {
            (Some(storage), _, _) => storage,
            (None, Some(client), Some(endpoint)) => Arc::new(S3Storage::new(client, endpoint)),
            (None, Some(_), _) => {
                return Err(error::invalid_argument(
                    "an endpoint is required when configuring an S3 client",
                ))
            }
            (None, None, _) => {
                return Err(error::invalid_argument(
                    "either a storage backend or an S3 client must be configured",
                ))
            }
        };

        Ok(Config { storage })
    }
}
