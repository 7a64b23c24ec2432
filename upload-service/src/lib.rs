/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! Upload Service
//!
//! Stores a payload under a bucket/key in S3-compatible object storage and
//! returns the object's locator, `<endpoint>/<bucket>/<key>`.
//!
//! The crate is layered as:
//!
//! - [`storage`]: the backend capability (`PutObject` plus the configured endpoint)
//! - [`Client`]: validates an upload, performs a single put, and builds the locator
//! - [`rpc`]: the `UploadMedia` RPC adapter exposed as a [`tower::Service`]

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `upload-service`
pub mod error;

/// Types and helpers for I/O
pub mod io;

/// Upload service client
pub mod client;

/// Upload service operations
pub mod operation;

/// Storage backends objects are written to
pub mod storage;

/// RPC facing adapter for the upload operation
pub mod rpc;

/// Service configuration
pub mod config;

mod http;

pub use self::client::Client;
pub use self::config::Config;
