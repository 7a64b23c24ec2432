/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;

use crate::error::{self, Error};
use crate::storage::{normalize_endpoint, PutObjectRequest, StorageBackend};

/// Storage backend writing objects with a single S3 `PutObject` request.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    endpoint: String,
}

impl S3Storage {
    /// Create a new backend from an S3 client and the endpoint the client is configured for.
    pub fn new(client: aws_sdk_s3::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: normalize_endpoint(endpoint),
        }
    }
}

#[async_trait]
impl StorageBackend for S3Storage {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn put_object(&self, request: PutObjectRequest) -> Result<(), Error> {
        let (bucket, key, body, metadata) = request.into_parts();
        let content_length = body.content_length();
        let content_length: i64 = content_length.try_into().map_err(|_| {
            error::invalid_argument(format!("content_length:{} is invalid.", content_length))
        })?;
        let body = body.into_byte_stream().await?;

        let resp = self
            .client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .content_length(content_length)
            .body(body)
            .set_metadata(metadata)
            .send()
            .await
            .map_err(error::storage_backend(format!(
                "PutObject s3://{bucket}/{key}"
            )))?;

        tracing::debug!(
            %bucket,
            %key,
            content_length,
            e_tag = ?resp.e_tag(),
            "stored object"
        );
        Ok(())
    }
}
