/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::time;

use bytes::Bytes;
use clap::{CommandFactory, Parser};
use upload_service::config::loader::ConfigLoader;
use upload_service::rpc::{UploadHandler, UploadMediaRequest};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "upload")]
#[command(about = "Uploads a local file to S3 compatible storage and prints its locator.")]
#[command(
    after_help = "The storage endpoint and credentials are read from S3_ENDPOINT, S3_ACCESS_KEY, S3_SECRET_KEY and S3_REGION."
)]
pub struct Args {
    /// Local file to upload
    #[arg(required = true)]
    file: PathBuf,

    /// Bucket to upload to
    #[arg(long, required = true)]
    bucket: String,

    /// Object key to upload to (defaults to the file name)
    #[arg(long)]
    key: Option<String>,

    /// Metadata to attach to the object, given as KEY=VALUE. May be repeated.
    #[arg(long = "metadata", value_parser = parse_metadata)]
    metadata: Vec<(String, String)>,
}

fn parse_metadata(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("invalid metadata `{s}`, expected KEY=VALUE"))
}

fn invalid_arg(message: &str) -> ! {
    Args::command()
        .error(clap::error::ErrorKind::InvalidValue, message)
        .exit()
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let key = match args.key.clone() {
        Some(key) => key,
        None => match args.file.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_owned(),
            None => invalid_arg("unable to derive a key from the file name, use --key"),
        },
    };

    let file = tokio::fs::read(&args.file).await?;
    let file_size = file.len();

    let config = ConfigLoader::default().load().await?;
    let handler = UploadHandler::new(upload_service::Client::new(config));

    let request = UploadMediaRequest {
        key,
        bucket: args.bucket,
        file: Some(Bytes::from(file)),
        metadata: args.metadata.into_iter().collect::<HashMap<_, _>>(),
    };

    let start = time::Instant::now();
    let resp = handler.upload_media(request).await?;
    let elapsed = start.elapsed();

    tracing::info!(bytes = file_size, ?elapsed, "upload complete");
    println!("{}", resp.output);
    Ok(())
}
