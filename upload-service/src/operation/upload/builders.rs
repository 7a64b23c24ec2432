/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;
use crate::io::InputStream;

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload a single object and wait for it to be stored
    pub async fn send(self) -> Result<UploadOutput, Error> {
        let input = self.inner.build();
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }

    /// Access the Upload as a reference.
    pub fn as_input(&self) -> &UploadInputBuilder {
        &self.inner
    }

    /// Object data.
    pub fn body(mut self, input: InputStream) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<InputStream>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to which the object is uploaded.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// Object key for which the upload is initiated.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Object key for which the upload is initiated.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Adds a key-value pair to the object metadata.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// A map of metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }
}

impl crate::operation::upload::input::UploadInputBuilder {
    /// Upload a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
