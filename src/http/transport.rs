//! The narrow transport seam between fetching and orchestration.
//!
//! The orchestrator depends only on this trait, so the raw TCP client can
//! be swapped for another transport (a stub in tests, a library-backed
//! client in an application) without touching the download logic.

use crate::error::Result;
use crate::http::response::Response;
use async_trait::async_trait;
use url::Url;

/// A transport able to perform the two fetch operations the orchestrator
/// needs.
///
/// `async_trait` keeps the trait object-safe so the downloader can hold a
/// `dyn Transport` chosen at build time.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a resource whose body is line-oriented text, such as an HTML
    /// page. The body is present only for a 2xx status.
    async fn fetch_text(&self, url: &Url) -> Result<Response<String>>;

    /// Fetch a resource whose body is raw bytes, such as an image. The
    /// body is present only for a 2xx status.
    async fn fetch_binary(&self, url: &Url) -> Result<Response<Vec<u8>>>;
}
