/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use bytes::Bytes;
use tokio::task::JoinSet;
use tower::ServiceExt;
use upload_service::rpc::{Code, UploadHandler, UploadMediaRequest, UploadMediaResponse};
use upload_service::storage::InMemoryStorage;

const S3_ENDPOINT: &str = "http://localhost:9000";

/// number of simultaneous requests to send
const CONCURRENT_REQUESTS_CNT: usize = 50;

fn in_memory_handler() -> (UploadHandler, Arc<InMemoryStorage>) {
    let storage = Arc::new(InMemoryStorage::new(S3_ENDPOINT));
    let config = upload_service::Config::builder()
        .shared_storage(storage.clone())
        .build()
        .unwrap();
    (
        UploadHandler::new(upload_service::Client::new(config)),
        storage,
    )
}

fn text_file_request(key: &str, bucket: &str) -> UploadMediaRequest {
    UploadMediaRequest {
        key: key.to_owned(),
        bucket: bucket.to_owned(),
        file: Some(Bytes::from_static(b"Hello, World!")),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_upload_media_text_file() {
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|input| {
            input.bucket() == Some("testbucket")
                && input.key() == Some("testfile.txt")
                && input.content_length() == Some(13)
        })
        .then_output(|| PutObjectOutput::builder().build());
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
    let config = upload_service::Config::builder()
        .client(s3_client)
        .endpoint(S3_ENDPOINT)
        .build()
        .unwrap();
    let handler = UploadHandler::new(upload_service::Client::new(config));

    let resp = handler
        .upload_media(text_file_request("testfile.txt", "testbucket"))
        .await
        .unwrap();
    assert_eq!(
        UploadMediaResponse {
            output: format!("{S3_ENDPOINT}/testbucket/testfile.txt"),
        },
        resp
    );
}

#[tokio::test]
async fn test_upload_media_without_key() {
    let (handler, storage) = in_memory_handler();
    let status = handler
        .upload_media(text_file_request("", "testbucket"))
        .await
        .unwrap_err();
    assert_eq!(Code::InvalidArgument, status.code());
    assert!(status.message().contains("key"), "{}", status.message());
    assert_eq!(0, storage.put_calls());
}

#[tokio::test]
async fn test_upload_media_without_bucket() {
    let (handler, storage) = in_memory_handler();
    let status = handler
        .upload_media(text_file_request("testfile.txt", ""))
        .await
        .unwrap_err();
    assert_eq!(Code::InvalidArgument, status.code());
    assert!(status.message().contains("bucket"), "{}", status.message());
    assert_eq!(0, storage.put_calls());
}

#[tokio::test]
async fn test_upload_media_with_nil_file() {
    let (handler, storage) = in_memory_handler();
    let request = UploadMediaRequest {
        file: None,
        ..text_file_request("testfile.txt", "testbucket")
    };
    let resp = handler.upload_media(request).await.unwrap();
    assert_eq!(format!("{S3_ENDPOINT}/testbucket/testfile.txt"), resp.output);
    assert_eq!(1, storage.put_calls());
}

#[tokio::test]
async fn test_upload_media_nil_file_same_as_empty_file() {
    let (handler, storage) = in_memory_handler();
    let nil_file = UploadMediaRequest {
        file: None,
        ..text_file_request("nil.txt", "testbucket")
    };
    let empty_file = UploadMediaRequest {
        file: Some(Bytes::new()),
        ..text_file_request("empty.txt", "testbucket")
    };

    handler.upload_media(nil_file).await.unwrap();
    handler.upload_media(empty_file).await.unwrap();

    let nil_obj = storage.object("testbucket", "nil.txt").await.unwrap();
    let empty_obj = storage.object("testbucket", "empty.txt").await.unwrap();
    assert_eq!(nil_obj, empty_obj);
}

#[tokio::test]
async fn test_upload_media_backend_failure() {
    let storage = InMemoryStorage::new(S3_ENDPOINT).with_buckets(["testbucket"]);
    let config = upload_service::Config::builder()
        .storage(storage)
        .build()
        .unwrap();
    let handler = UploadHandler::new(upload_service::Client::new(config));

    let status = handler
        .upload_media(text_file_request("testfile.txt", "missingbucket"))
        .await
        .unwrap_err();
    assert_eq!(Code::Internal, status.code());
    assert!(
        status.message().contains("NoSuchBucket"),
        "{}",
        status.message()
    );
}

#[tokio::test]
async fn test_concurrent_requests() {
    let (handler, storage) = in_memory_handler();

    let mut tasks = JoinSet::new();
    for i in 0..CONCURRENT_REQUESTS_CNT {
        let svc = handler.clone();
        let key = format!("concurrent-{i}.txt");
        tasks.spawn(async move {
            let resp = svc
                .oneshot(text_file_request(&key, "testbucket"))
                .await
                .unwrap();
            (key, resp)
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (key, resp) = result.unwrap();
        assert_eq!(format!("{S3_ENDPOINT}/testbucket/{key}"), resp.output);
    }
    assert_eq!(CONCURRENT_REQUESTS_CNT, storage.put_calls());
    assert_eq!(CONCURRENT_REQUESTS_CNT, storage.len().await);
}
