/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Error;
use crate::io::InputStream;

/// In-memory storage backend
pub mod in_memory;
/// Amazon S3 (and S3 compatible) storage backend
pub mod s3;

pub use self::in_memory::InMemoryStorage;
pub use self::s3::S3Storage;

/// A storage backend objects are uploaded to.
///
/// Implementations are shared by every request and must not require mutable access.
#[async_trait]
pub trait StorageBackend: fmt::Debug + Send + Sync {
    /// The base address objects are reachable under.
    ///
    /// Locators are built as `<endpoint>/<bucket>/<key>`.
    fn endpoint(&self) -> &str;

    /// Store the request's payload under its bucket and key.
    async fn put_object(&self, request: PutObjectRequest) -> Result<(), Error>;
}

/// Shared handle to a [`StorageBackend`].
pub type SharedStorage = Arc<dyn StorageBackend>;

/// A single validated write to a [`StorageBackend`].
#[derive(Debug)]
pub struct PutObjectRequest {
    bucket: String,
    key: String,
    body: InputStream,
    metadata: Option<HashMap<String, String>>,
}

impl PutObjectRequest {
    pub(crate) fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        body: InputStream,
        metadata: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body,
            metadata,
        }
    }

    /// The bucket to store the object in
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key to store the object under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// User defined metadata to attach to the object
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }

    /// The payload
    pub fn body(&self) -> &InputStream {
        &self.body
    }

    /// Consume the request, returning its parts as `(bucket, key, body, metadata)`.
    pub fn into_parts(self) -> (String, String, InputStream, Option<HashMap<String, String>>) {
        (self.bucket, self.key, self.body, self.metadata)
    }
}

/// Strip any trailing `/` so that locators never contain an empty path segment.
pub(crate) fn normalize_endpoint(endpoint: impl Into<String>) -> String {
    let endpoint = endpoint.into();
    endpoint.trim_end_matches('/').to_owned()
}
