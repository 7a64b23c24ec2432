/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use bytes::Bytes;

mod handler;
mod status;

pub use self::handler::UploadHandler;
pub use self::status::{Code, Status};

/// Wire request for the `UploadMedia` RPC.
///
/// Fields carry their wire defaults: an omitted `key` or `bucket` is the empty string and
/// cannot be told apart from one explicitly set to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadMediaRequest {
    /// Object key to store the file under
    pub key: String,
    /// Bucket to store the file in
    pub bucket: String,
    /// File contents. `None` uploads an empty object.
    pub file: Option<Bytes>,
    /// User defined metadata to store with the object
    pub metadata: HashMap<String, String>,
}

/// Wire response for the `UploadMedia` RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadMediaResponse {
    /// Locator of the stored object, `<endpoint>/<bucket>/<key>`
    pub output: String,
}
