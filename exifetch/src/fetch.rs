//! Fetching image data over HTTP
//!
//! Without a configured [`ByteRange`] the whole resource is fetched. With a
//! range, a `HEAD` request determines the size and whether the server accepts
//! range requests. Servers without range support get a full request and the
//! range is cut out afterwards.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use exifetch_common::math::*;
use reqwest::header::{ACCEPT_RANGES, CONTENT_LENGTH, IF_MODIFIED_SINCE, RANGE};
use reqwest::StatusCode;

/// Sent with every `GET` to bypass cached responses
pub const IF_MODIFIED_SINCE_EPOCH: &str = "Sat, 1 Jan 1970 00:00:00 GMT";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!("exifetch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected status code {0}")]
    Status(u16),
    #[error("Range of {length} bytes at {start} is outside of resource with size {size}")]
    InvalidRange { start: i64, length: u64, size: u64 },
    #[error("Server did not report the resource size")]
    UnknownSize,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

impl From<MathError> for FetchError {
    fn from(err: MathError) -> Self {
        Self::Request(err.to_string())
    }
}

/// Part of a resource
///
/// A negative `start` counts from the end of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: i64,
    pub length: u64,
}

impl ByteRange {
    pub fn new(start: i64, length: u64) -> Self {
        Self { start, length }
    }

    /// Start and exclusive end within a resource of `size` bytes
    ///
    /// The end is clamped to the size of the resource. Without a known size,
    /// only ranges with non-negative start can be resolved.
    pub fn resolve(self, size: Option<u64>) -> Result<(u64, u64), FetchError> {
        let invalid = || FetchError::InvalidRange {
            start: self.start,
            length: self.length,
            size: size.unwrap_or_default(),
        };

        let start = match (u64::try_from(self.start), size) {
            (Ok(start), _) => start,
            (Err(_), Some(size)) => size
                .checked_sub(self.start.unsigned_abs())
                .ok_or_else(invalid)?,
            (Err(_), None) => return Err(FetchError::UnknownSize),
        };

        let mut end = start.saturating_add(self.length);
        if let Some(size) = size {
            end = end.min(size);
        }

        if end <= start {
            return Err(invalid());
        }

        Ok((start, end))
    }

    /// Value of the `Range` header
    pub fn header_value(start: u64, end: u64) -> String {
        format!("bytes={start}-{}", end.saturating_sub(1))
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub range: Option<ByteRange>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            range: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Source of image bytes
#[async_trait]
pub trait ByteFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Size of the resource and whether byte ranges are accepted
    async fn head(&self, url: &str) -> Result<(Option<u64>, bool), FetchError> {
        let response = self.client.head(url).send().await?;
        check_status(response.status())?;

        let headers = response.headers();
        let size = headers
            .get(CONTENT_LENGTH)
            .and_then(|x| x.to_str().ok())
            .and_then(|x| x.trim().parse::<u64>().ok());
        let accepts_ranges = headers
            .get(ACCEPT_RANGES)
            .and_then(|x| x.to_str().ok())
            .is_some_and(|x| x.trim().eq_ignore_ascii_case("bytes"));

        tracing::debug!("HEAD {url}: size {size:?}, accepts ranges: {accepts_ranges}");

        Ok((size, accepts_ranges))
    }

    async fn get(&self, url: &str, range: Option<(u64, u64)>) -> Result<Bytes, FetchError> {
        let mut request = self
            .client
            .get(url)
            .header(IF_MODIFIED_SINCE, IF_MODIFIED_SINCE_EPOCH);

        if let Some((start, end)) = range {
            request = request.header(RANGE, ByteRange::header_value(start, end));
        }

        let response = request.send().await?;
        let status = response.status();
        check_status(status)?;

        let data = response.bytes().await?;
        tracing::debug!("GET {url}: {status}, {} bytes", data.len());

        match range {
            // Server ignored the range
            Some((start, end)) if status == StatusCode::OK => slice(data, start, end),
            _ => Ok(data),
        }
    }
}

#[async_trait]
impl ByteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let Some(range) = self.config.range else {
            return self.get(url, None).await;
        };

        let (size, accepts_ranges) = self.head(url).await?;
        let (start, end) = range.resolve(size)?;

        if accepts_ranges {
            self.get(url, Some((start, end))).await
        } else {
            tracing::debug!("No range support, slicing full response");
            let data = self.get(url, None).await?;
            slice(data, start, end)
        }
    }
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK || status == StatusCode::PARTIAL_CONTENT {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

/// Cuts `start..end` out of a full response, the end is clamped
fn slice(data: Bytes, start: u64, end: u64) -> Result<Bytes, FetchError> {
    let len = data.len();
    let start = start.usize()?.min(len);
    let end = end.usize()?.min(len);
    Ok(data.slice(start..end.max(start)))
}
