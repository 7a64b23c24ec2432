/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the StorageBackend trait.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::error::{self, Error};
use crate::storage::{normalize_endpoint, PutObjectRequest, StorageBackend};

/// An object held by [`InMemoryStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    data: Bytes,
    metadata: Option<HashMap<String, String>>,
}

impl StoredObject {
    /// The stored payload
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// The metadata attached when the object was stored
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// An in-memory implementation of the StorageBackend trait.
///
/// Objects are kept in process memory, making this backend suitable for local runs and
/// testing. Every call to `put_object` is counted, whether or not it succeeds.
#[derive(Debug)]
pub struct InMemoryStorage {
    endpoint: String,
    // None accepts any bucket
    buckets: Option<HashSet<String>>,
    // (bucket, key) -> object
    objects: RwLock<HashMap<(String, String), StoredObject>>,
    put_calls: AtomicUsize,
}

impl InMemoryStorage {
    /// Create a new in-memory storage backend that accepts writes to any bucket.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint),
            buckets: None,
            objects: RwLock::new(HashMap::new()),
            put_calls: AtomicUsize::new(0),
        }
    }

    /// Only accept writes to the given buckets; writes to any other bucket fail
    /// with `NoSuchBucket`.
    pub fn with_buckets<I, S>(mut self, buckets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buckets = Some(buckets.into_iter().map(Into::into).collect());
        self
    }

    /// Number of `put_object` calls this backend has received
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    /// Returns the object stored under `bucket`/`key`, if any.
    pub async fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        let objects = self.objects.read().await;
        objects.get(&(bucket.to_owned(), key.to_owned())).cloned()
    }

    /// Number of objects currently stored
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Returns true if no objects are stored
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn put_object(&self, request: PutObjectRequest) -> Result<(), Error> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        let (bucket, key, body, metadata) = request.into_parts();

        if let Some(buckets) = &self.buckets {
            if !buckets.contains(&bucket) {
                return Err(error::storage_backend(format!(
                    "PutObject s3://{bucket}/{key}"
                ))("NoSuchBucket: the specified bucket does not exist"));
            }
        }

        let data = body.collect().await?;
        tracing::debug!(%bucket, %key, content_length = data.len(), "stored object in memory");

        let mut objects = self.objects.write().await;
        objects.insert((bucket, key), StoredObject { data, metadata });
        Ok(())
    }
}
