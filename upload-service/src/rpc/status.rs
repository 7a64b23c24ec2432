/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::{Error, ErrorKind};

/// Wire level status code of a failed RPC
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Code {
    /// The client supplied an invalid argument (e.g. an empty bucket or key)
    InvalidArgument,
    /// The server failed to complete the request (e.g. the storage backend failed)
    Internal,
}

impl Code {
    /// Returns true for codes describing a fault on the caller's side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Code::InvalidArgument)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::InvalidArgument => write!(f, "invalid argument"),
            Code::Internal => write!(f, "internal"),
        }
    }
}

/// Error returned by an RPC: a status code and a human readable message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Status {
    code: Code,
    message: String,
}

impl Status {
    /// Create a new `Status`
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The status code
    pub fn code(&self) -> Code {
        self.code
    }

    /// The status message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}, message: {:?}", self.code, self.message)
    }
}

impl std::error::Error for Status {}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        let code = match err.kind() {
            ErrorKind::InvalidArgument => Code::InvalidArgument,
            ErrorKind::StorageBackend | ErrorKind::IOError => Code::Internal,
        };
        Status::new(code, DisplayErrorContext(&err).to_string())
    }
}
