//! HTTP module containing the raw protocol client.
//!
//! This module provides the hand-rolled HTTP/1.1 exchange the downloader is
//! built on. It is organized into three components:
//!
//! - [`transport`] - the narrow async [`Transport`] seam the orchestrator
//!   depends on
//! - [`client`] - [`RawHttpClient`], the TCP implementation of that seam
//! - [`response`] - pure response parsing over a fully buffered byte slice
//!
//! # Examples
//!
//! ## Parsing a buffered response
//!
//! ```rust
//! use imgrab::http::parse_binary_response;
//!
//! let raw = b"HTTP/1.1 200 OK\r\nContent-Length: 3\r\n\r\n\x01\x02\x03";
//! let response = parse_binary_response(raw).unwrap();
//! assert_eq!(response.body.as_deref(), Some(&[1u8, 2, 3][..]));
//! ```
//!
//! ## Fetching over a raw socket
//!
//! ```rust,no_run
//! use imgrab::http::{RawHttpClient, Transport};
//! use url::Url;
//!
//! # async fn example() -> Result<(), imgrab::Error> {
//! let client = RawHttpClient::new();
//! let url = Url::parse("http://localhost:8000/cat.jpg").unwrap();
//! let image = client.fetch_binary(&url).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod response;
pub mod transport;

pub use client::RawHttpClient;
pub use response::{parse_binary_response, parse_text_response, Headers, Response, StatusLine};
pub use transport::Transport;
