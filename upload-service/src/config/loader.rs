/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};

use crate::error::{self, Error};
use crate::storage::normalize_endpoint;
use crate::{http, Config};

/// Environment variable holding the storage endpoint URL
pub const ENDPOINT_ENV: &str = "S3_ENDPOINT";
/// Environment variable holding the static access key
pub const ACCESS_KEY_ENV: &str = "S3_ACCESS_KEY";
/// Environment variable holding the static secret key
pub const SECRET_KEY_ENV: &str = "S3_SECRET_KEY";
/// Environment variable overriding the signing region
pub const REGION_ENV: &str = "S3_REGION";

/// Region used to sign requests when none is configured
pub const DEFAULT_REGION: &str = "eu-east-1";

const CREDENTIALS_PROVIDER_NAME: &str = "upload-service-env";

/// Load [`Config`] from the environment.
///
/// Reads `S3_ENDPOINT` (required), `S3_ACCESS_KEY`, `S3_SECRET_KEY` and `S3_REGION`.
/// Values set explicitly on the loader take precedence over the environment.
///
/// The resulting S3 client uses static credentials and path style addressing, which
/// makes it usable against S3 compatible servers (e.g. MinIO) as well as Amazon S3.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
    region: Option<String>,
}

impl ConfigLoader {
    /// The base endpoint URL of the storage service (e.g. `http://localhost:9000`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Static access key used to sign requests
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Static secret key used to sign requests
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Region used to sign requests. Default is [`DEFAULT_REGION`].
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, values are read from the process environment.
    pub async fn load(self) -> Result<Config, Error> {
        self.load_with(|name| std::env::var(name).ok()).await
    }

    pub(crate) async fn load_with<F>(self, env: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = self
            .endpoint
            .or_else(|| env(ENDPOINT_ENV))
            .map(normalize_endpoint)
            .filter(|endpoint| !endpoint.is_empty())
            .ok_or_else(|| {
                error::invalid_argument(format!(
                    "{ENDPOINT_ENV} must be set to the storage endpoint"
                ))
            })?;
        let access_key = self
            .access_key
            .or_else(|| env(ACCESS_KEY_ENV))
            .unwrap_or_default();
        let secret_key = self
            .secret_key
            .or_else(|| env(SECRET_KEY_ENV))
            .unwrap_or_default();
        let region = self
            .region
            .or_else(|| env(REGION_ENV))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        tracing::debug!(%endpoint, %region, "loading storage client configuration");

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .http_client(http::default_client())
            .credentials_provider(Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ))
            .region(Region::new(region))
            .endpoint_url(endpoint.clone())
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true)
            .build();
        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Config::builder().client(client).endpoint(endpoint).build()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::{ConfigLoader, DEFAULT_REGION, ENDPOINT_ENV, REGION_ENV};
    use crate::error::ErrorKind;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[tokio::test]
    async fn test_missing_endpoint() {
        let err = ConfigLoader::default()
            .load_with(env(&[]))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());
    }

    #[tokio::test]
    async fn test_empty_endpoint() {
        let err = ConfigLoader::default()
            .load_with(env(&[(ENDPOINT_ENV, "")]))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());

        let err = ConfigLoader::default()
            .load_with(env(&[(ENDPOINT_ENV, "/")]))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());
    }

    #[tokio::test]
    async fn test_endpoint_from_env() {
        let config = ConfigLoader::default()
            .load_with(env(&[(ENDPOINT_ENV, "http://localhost:9000/")]))
            .await
            .unwrap();
        assert_eq!("http://localhost:9000", config.endpoint());
    }

    #[tokio::test]
    async fn test_override_takes_precedence() {
        let config = ConfigLoader::default()
            .endpoint("http://minio:9000")
            .region("us-west-2")
            .load_with(env(&[
                (ENDPOINT_ENV, "http://localhost:9000"),
                (REGION_ENV, DEFAULT_REGION),
            ]))
            .await
            .unwrap();
        assert_eq!("http://minio:9000", config.endpoint());
    }
}
