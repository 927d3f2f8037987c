//! Hand-rolled HTTP/1.1 client over a raw TCP stream.
//!
//! [`RawHttpClient`] opens a fresh connection per request, writes a minimal
//! GET request, and reads the response to EOF before parsing it. There is
//! no pipelining and no keep-alive: the request carries `Connection: close`
//! and only the first response on the connection is ever read.
//!
//! # Examples
//!
//! ```rust,no_run
//! use imgrab::http::{RawHttpClient, Transport};
//! use url::Url;
//!
//! # async fn example() -> Result<(), imgrab::Error> {
//! let client = RawHttpClient::new();
//! let url = Url::parse("http://localhost:8000/index.html").unwrap();
//! let page = client.fetch_text(&url).await?;
//! if let Some(html) = page.body {
//!     println!("{html}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::http::response::{parse_binary_response, parse_text_response, Response};
use crate::http::transport::Transport;
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use url::Url;

/// Default client identifier sent in the `User-Agent` header.
fn default_user_agent() -> String {
    format!("imgrab/{}", env!("CARGO_PKG_VERSION"))
}

/// A minimal HTTP/1.1 GET client built directly on [`TcpStream`].
#[derive(Debug, Clone)]
pub struct RawHttpClient {
    user_agent: String,
}

impl Default for RawHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RawHttpClient {
    /// Create a client with the default `imgrab/{version}` identifier.
    pub fn new() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }

    /// Create a client with a custom `User-Agent` value.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// Get the client identifier sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Render the literal request text for `url`.
    ///
    /// The request line carries the path plus the query string when one is
    /// present; only the `Accept` header differs between text and binary
    /// fetches.
    fn build_request(&self, url: &Url, accept: &str) -> Result<String> {
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("no host in \"{url}\"")))?;
        let mut target = url.path().to_string();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }
        Ok(format!(
            "GET {target} HTTP/1.1\r\n\
             Host: {host}\r\n\
             User-Agent: {ua}\r\n\
             Connection: close\r\n\
             Accept: {accept}\r\n\
             \r\n",
            ua = self.user_agent,
        ))
    }

    /// Perform one request/response exchange and return the raw response
    /// bytes.
    ///
    /// The request is written in full before any response bytes are read,
    /// and the response is read until the server closes the connection.
    async fn exchange(&self, url: &Url, accept: &str) -> Result<Vec<u8>> {
        let request = self.build_request(url, accept)?;
        let host = url.host_str().expect("checked by build_request");
        let port = url.port_or_known_default().unwrap_or(80);

        debug!("Connecting to {host}:{port}");
        let mut stream = TcpStream::connect((host, port))
            .await
            .map_err(Error::transport)?;
        stream
            .write_all(request.as_bytes())
            .await
            .map_err(Error::transport)?;

        let mut buf = Vec::new();
        stream
            .read_to_end(&mut buf)
            .await
            .map_err(Error::transport)?;
        debug!("Received {} bytes from {host}:{port}", buf.len());
        Ok(buf)
    }
}

#[async_trait]
impl Transport for RawHttpClient {
    async fn fetch_text(&self, url: &Url) -> Result<Response<String>> {
        let buf = self.exchange(url, "text/html").await?;
        parse_text_response(&buf)
    }

    async fn fetch_binary(&self, url: &Url) -> Result<Response<Vec<u8>>> {
        let buf = self.exchange(url, "image/jpeg").await?;
        parse_binary_response(&buf)
    }
}
