/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use tower::Service;

use crate::io::InputStream;
use crate::rpc::{Status, UploadMediaRequest, UploadMediaResponse};
use crate::Client;

/// Serves the `UploadMedia` RPC on top of a [`Client`].
///
/// The handler holds no mutable state and can be cloned freely; each clone serves requests
/// concurrently through the same client. Dropping the future returned by
/// [`upload_media`](Self::upload_media) cancels the in-flight upload.
#[derive(Debug, Clone)]
pub struct UploadHandler {
    client: Client,
}

impl UploadHandler {
    /// Create a new handler uploading through `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Store the request's file and respond with the object's locator.
    ///
    /// `key` and `bucket` are always passed on as present values, so empty strings are
    /// rejected by validation. An absent `file` uploads an empty object.
    #[tracing::instrument(
        skip_all,
        level = "debug",
        name = "upload-media",
        fields(bucket = %request.bucket, key = %request.key)
    )]
    pub async fn upload_media(
        &self,
        request: UploadMediaRequest,
    ) -> Result<UploadMediaResponse, Status> {
        let UploadMediaRequest {
            key,
            bucket,
            file,
            metadata,
        } = request;

        let metadata = (!metadata.is_empty()).then_some(metadata);
        let result = self
            .client
            .upload_file(
                Some(InputStream::from(file)),
                metadata,
                Some(key.as_str()),
                Some(bucket.as_str()),
            )
            .await;

        match result {
            Ok(output) => Ok(UploadMediaResponse { output }),
            Err(err) => {
                let status = Status::from(err);
                tracing::debug!(code = %status.code(), message = status.message(), "upload failed");
                Err(status)
            }
        }
    }
}

impl Service<UploadMediaRequest> for UploadHandler {
    type Response = UploadMediaResponse;
    type Error = Status;
    type Future = BoxFuture<'static, Result<UploadMediaResponse, Status>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: UploadMediaRequest) -> Self::Future {
        let handler = self.clone();
        Box::pin(async move { handler.upload_media(request).await })
    }
}
