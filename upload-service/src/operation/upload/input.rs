/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use crate::io::InputStream;

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInput {
    /// Object data. An absent body uploads an empty object.
    pub(crate) body: Option<InputStream>,

    /// The bucket name to which the object is uploaded.
    pub(crate) bucket: Option<String>,

    /// Object key for which the upload is initiated.
    pub(crate) key: Option<String>,

    /// A map of metadata to store with the object.
    pub(crate) metadata: Option<HashMap<String, String>>,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// Split the body from the request by taking it and replacing it with the default.
    ///
    /// An absent body is returned as an empty stream.
    pub(crate) fn take_body(&mut self) -> InputStream {
        self.body.take().unwrap_or_default()
    }

    /// Object data.
    pub fn body(&self) -> Option<&InputStream> {
        self.body.as_ref()
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Object key for which the upload is initiated.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// A map of metadata to store with the object.
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// A builder for [`UploadInput`](crate::operation::upload::UploadInput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInputBuilder {
    pub(crate) body: Option<InputStream>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) metadata: Option<HashMap<String, String>>,
}

impl UploadInputBuilder {
    /// Object data.
    pub fn body(mut self, input: InputStream) -> Self {
        self.body = Some(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<InputStream>) -> Self {
        self.body = input;
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<InputStream> {
        &self.body
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Object key for which the upload is initiated.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Object key for which the upload is initiated.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Object key for which the upload is initiated.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Adds a key-value pair to `metadata`.
    ///
    /// To override the contents of this collection use [`set_metadata`](Self::set_metadata).
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut hash_map = self.metadata.unwrap_or_default();
        hash_map.insert(k.into(), v.into());
        self.metadata = Some(hash_map);
        self
    }

    /// A map of metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.metadata = input;
        self
    }

    /// A map of metadata to store with the object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        &self.metadata
    }

    /// Consumes the builder and constructs a [`UploadInput`](crate::operation::upload::UploadInput).
    ///
    /// Bucket and key are validated when the upload is sent, not here.
    pub fn build(self) -> UploadInput {
        UploadInput {
            body: self.body,
            bucket: self.bucket,
            key: self.key,
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod test {
    use super::UploadInput;

    #[test]
    fn test_metadata_accumulates() {
        let input = UploadInput::builder()
            .metadata("a", "1")
            .metadata("b", "2")
            .metadata("a", "3")
            .build();
        let metadata = input.metadata().unwrap();
        assert_eq!(2, metadata.len());
        assert_eq!("3", metadata["a"]);
    }

    #[test]
    fn test_take_body_defaults_to_empty() {
        let mut input = UploadInput::builder().key("k").bucket("b").build();
        assert!(input.body().is_none());
        assert_eq!(0, input.take_body().content_length());
    }
}
