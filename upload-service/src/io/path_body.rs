/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::error::{self, Error, ErrorKind};
use crate::io::stream::RawInputStream;
use crate::io::InputStream;

/// File based payload
#[derive(Debug)]
pub(super) struct PathBody {
    pub(super) path: PathBuf,
    pub(super) length: u64,
}

impl PathBody {
    /// Read exactly `length` bytes from the start of the file.
    pub(super) async fn read_exact_length(&self) -> Result<Bytes, Error> {
        let file = tokio::fs::File::open(&self.path).await?;
        let file_size = file.metadata().await?.len();
        if file_size < self.length {
            return Err(self.length_larger_than_file(file_size));
        }

        let capacity =
            usize::try_from(self.length).map_err(error::from_kind(ErrorKind::IOError))?;
        let mut data = Vec::with_capacity(capacity);
        file.take(self.length).read_to_end(&mut data).await?;
        // the file may have been truncated after the size check
        if data.len() < capacity {
            return Err(self.length_larger_than_file(data.len() as u64));
        }
        Ok(Bytes::from(data))
    }

    fn length_larger_than_file(&self, file_size: u64) -> Error {
        Error::new(
            ErrorKind::IOError,
            format!(
                "length ({}) was larger than the size of {} ({file_size})",
                self.length,
                self.path.display(),
            ),
        )
    }
}

/// Builder for creating an `InputStream` from a file/path.
///
/// ```no_run
/// # {
/// use upload_service::io::InputStream;
///
/// fn input_stream_from_file() -> InputStream {
///     InputStream::read_from()
///         .path("media/cat.png")
///         // Specify the length of the file used (skips an additional call to retrieve the size)
///         .length(123_456)
///         .build()
///         .expect("valid path")
/// }
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PathBodyBuilder {
    path: Option<PathBuf>,
    length: Option<u64>,
}

impl PathBodyBuilder {
    /// Create a new [`PathBodyBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path to read from.
    ///
    /// NOTE: The resulting `InputStream` must be uploaded before the file is modified.
    pub fn path(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Specify the length to read from the file.
    ///
    /// If not set the length is taken from the file's metadata.
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Returns an [`InputStream`] from this builder.
    pub fn build(self) -> Result<InputStream, Error> {
        let path = self
            .path
            .ok_or_else(|| error::invalid_argument("path is required"))?;

        let length = match self.length {
            Some(length) => length,
            None => {
                let metadata = std::fs::metadata(&path)?;
                if !metadata.is_file() {
                    return Err(error::invalid_argument(format!(
                        "{} is not a regular file",
                        path.display()
                    )));
                }
                metadata.len()
            }
        };

        let body = PathBody { path, length };
        Ok(InputStream {
            inner: RawInputStream::Fs(body),
        })
    }
}
