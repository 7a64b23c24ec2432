/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::primitives::{ByteStream, Length};
use bytes::{Buf, Bytes};

use crate::error;
use crate::io::path_body::{PathBody, PathBodyBuilder};

/// Source of binary data.
///
/// `InputStream` wraps the payload of an upload. The default value is an empty
/// payload, which is valid input for an upload.
#[derive(Debug)]
pub struct InputStream {
    pub(super) inner: RawInputStream,
}

impl InputStream {
    /// Create a new `InputStream` from a static byte slice
    pub fn from_static(bytes: &'static [u8]) -> Self {
        let inner = RawInputStream::Buf(bytes.into());
        Self { inner }
    }

    /// Return the number of bytes that will be uploaded
    pub fn content_length(&self) -> u64 {
        self.inner.content_length()
    }

    /// Returns a [`PathBodyBuilder`], allowing you to build a `InputStream` with
    /// full control over how the file is read.
    pub fn read_from() -> PathBodyBuilder {
        PathBodyBuilder::new()
    }

    /// Create a new `InputStream` that reads data from a given `path`.
    ///
    /// ## Warning
    /// The contents of the file MUST not change. The length of the file is cached
    /// when the stream is created.
    ///
    /// # Examples
    /// ```no_run
    /// use upload_service::io::InputStream;
    ///
    /// fn make_stream() -> InputStream {
    ///     InputStream::from_path("media/cat.png").expect("file should be readable")
    /// }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<InputStream, error::Error> {
        Self::read_from().path(path).build()
    }

    /// Read the entire payload into memory.
    ///
    /// A file backed payload yields exactly `content_length()` bytes. If the file
    /// is shorter than that an [`ErrorKind::IOError`](error::ErrorKind::IOError)
    /// is returned.
    pub async fn collect(self) -> Result<Bytes, error::Error> {
        match self.inner {
            RawInputStream::Buf(bytes) => Ok(bytes),
            RawInputStream::Fs(path_body) => path_body.read_exact_length().await,
        }
    }

    /// Converts `InputStream` to ByteStream that can be used in PutObject.
    pub(crate) async fn into_byte_stream(self) -> Result<ByteStream, error::Error> {
        match self.inner {
            RawInputStream::Buf(bytes) => Ok(ByteStream::from(bytes)),
            RawInputStream::Fs(path_body) => ByteStream::read_from()
                .path(path_body.path)
                .length(Length::Exact(path_body.length))
                .build()
                .await
                .map_err(error::from_kind(error::ErrorKind::IOError)),
        }
    }
}

#[derive(Debug)]
pub(super) enum RawInputStream {
    /// In-memory buffer to read from
    Buf(Bytes),
    /// File based input
    Fs(PathBody),
}

impl RawInputStream {
    fn content_length(&self) -> u64 {
        match self {
            RawInputStream::Buf(bytes) => bytes.remaining() as u64,
            RawInputStream::Fs(path_body) => path_body.length,
        }
    }
}

impl Default for InputStream {
    fn default() -> Self {
        Self {
            inner: RawInputStream::Buf(Bytes::default()),
        }
    }
}

impl From<Bytes> for InputStream {
    fn from(value: Bytes) -> Self {
        Self {
            inner: RawInputStream::Buf(value),
        }
    }
}

impl From<Vec<u8>> for InputStream {
    fn from(value: Vec<u8>) -> Self {
        Self::from(Bytes::from(value))
    }
}

impl From<&'static [u8]> for InputStream {
    fn from(slice: &'static [u8]) -> InputStream {
        Self::from(Bytes::from_static(slice))
    }
}

impl From<&'static str> for InputStream {
    fn from(slice: &'static str) -> InputStream {
        Self::from(Bytes::from_static(slice.as_bytes()))
    }
}

impl From<Option<Bytes>> for InputStream {
    /// An absent payload is an empty payload.
    fn from(value: Option<Bytes>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use bytes::Bytes;

    use super::InputStream;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(0, InputStream::default().content_length());
        assert_eq!(0, InputStream::from(None::<Bytes>).content_length());
    }

    #[test]
    fn test_in_memory_content_length() {
        assert_eq!(13, InputStream::from("Hello, World!").content_length());
        assert_eq!(3, InputStream::from(vec![1u8, 2, 3]).content_length());
        assert_eq!(
            5,
            InputStream::from(Some(Bytes::from_static(b"hello"))).content_length()
        );
    }

    #[tokio::test]
    async fn test_collect_in_memory() {
        let data = InputStream::from_static(b"every adolescent dog goes bonkers early")
            .collect()
            .await
            .unwrap();
        assert_eq!(&b"every adolescent dog goes bonkers early"[..], &data[..]);
    }

    #[tokio::test]
    async fn test_collect_from_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"Hello, World!").unwrap();

        let data = InputStream::from_path(tmp.path())
            .unwrap()
            .collect()
            .await
            .unwrap();
        assert_eq!(&b"Hello, World!"[..], &data[..]);
    }

    #[tokio::test]
    async fn test_into_byte_stream() {
        let stream = InputStream::from("Hello, World!");
        let body = stream.into_byte_stream().await.unwrap();
        let data = body.collect().await.unwrap().into_bytes();
        assert_eq!(&b"Hello, World!"[..], &data[..]);
    }
}
