/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;
use crate::io::InputStream;
use crate::operation::upload::builders::UploadFluentBuilder;
use crate::operation::upload::UploadInput;
use crate::Config;

/// Upload service client
///
/// Cheap to clone; every clone shares the same configuration and storage backend.
#[derive(Debug, Clone)]
pub struct Client {
    handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. the configured storage backend
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
}

impl Client {
    /// Creates a new client from an upload service config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });

        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Constructs a fluent builder for the Upload operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use upload_service::io::InputStream;
    ///
    /// async fn upload(client: &upload_service::Client) -> Result<(), upload_service::error::Error> {
    ///     let output = client
    ///         .upload()
    ///         .bucket("my-bucket")
    ///         .key("docs/report.txt")
    ///         .body(InputStream::from("Hello, World!"))
    ///         .send()
    ///         .await?;
    ///
    ///     println!("uploaded to {}", output.locator());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> UploadFluentBuilder {
        UploadFluentBuilder::new(self.handle.clone())
    }

    /// Store `body` under `bucket`/`key` and return the object's locator,
    /// `<endpoint>/<bucket>/<key>`.
    ///
    /// An absent `body` uploads an empty object. An absent or empty `key` or `bucket`
    /// fails with [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// without contacting the storage backend.
    pub async fn upload_file(
        &self,
        body: Option<InputStream>,
        metadata: Option<HashMap<String, String>>,
        key: Option<&str>,
        bucket: Option<&str>,
    ) -> Result<String, Error> {
        let input = UploadInput::builder()
            .set_body(body)
            .set_metadata(metadata)
            .set_key(key.map(str::to_owned))
            .set_bucket(bucket.map(str::to_owned))
            .build();

        let output =
            crate::operation::upload::Upload::orchestrate(self.handle.clone(), input).await?;
        Ok(output.into_locator())
    }
}
