/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for uploading a single object
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutput {
    locator: String,
}

impl UploadOutput {
    pub(crate) fn new(locator: String) -> Self {
        Self { locator }
    }

    /// The locator of the stored object, `<endpoint>/<bucket>/<key>`
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Consume the output, returning the locator
    pub fn into_locator(self) -> String {
        self.locator
    }
}
