/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use crate::error;
use crate::storage::PutObjectRequest;
/// Request type for uploads
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for uploads
pub use output::UploadOutput;

use std::sync::Arc;

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    ///
    /// Validates the key then the bucket, sends exactly one `put_object` to the configured
    /// storage backend, and returns the locator of the stored object. Nothing is sent to the
    /// backend when validation fails.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        mut input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let key = required("key", input.key())?.to_owned();
        let bucket = required("bucket", input.bucket())?.to_owned();

        let body = input.take_body();
        let metadata = input.metadata.take().filter(|metadata| !metadata.is_empty());

        let storage = handle.config.storage();
        tracing::trace!(
            %bucket,
            %key,
            content_length = body.content_length(),
            "sending upload request to storage backend"
        );
        storage
            .put_object(PutObjectRequest::new(&bucket, &key, body, metadata))
            .await?;

        Ok(UploadOutput::new(locator(storage.endpoint(), &bucket, &key)))
    }
}

/// Reject absent and empty values alike.
fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, error::Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => {
            tracing::trace!("rejecting upload request: {field} is empty");
            Err(error::invalid_argument(format!("{field} must not be empty")))
        }
        None => {
            tracing::trace!("rejecting upload request: {field} is missing");
            Err(error::invalid_argument(format!("{field} is required")))
        }
    }
}

/// Build the canonical locator of an object, `<endpoint>/<bucket>/<key>`.
pub(crate) fn locator(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{endpoint}/{bucket}/{key}")
}
