use imgrab::progress::ProgressEvent;
use imgrab::DownloaderBuilder;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Creates a temporary directory for testing purposes.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Requests received by a canned server, one rendered string per
/// connection.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Spawns a TCP server that answers successive connections with the given
/// canned byte responses, in order, then stops accepting.
///
/// Each connection is handled the way the crate's wire contract expects:
/// the request head is drained, the full canned response is written, and
/// the connection is closed.
pub async fn spawn_server(responses: Vec<Vec<u8>>) -> SocketAddr {
    let (addr, _log) = spawn_recording_server(responses).await;
    addr
}

/// Like [`spawn_server`], but also records the raw request text received
/// on each connection so tests can assert on the produced wire protocol.
pub async fn spawn_recording_server(responses: Vec<Vec<u8>>) -> (SocketAddr, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get server address");
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));

    let task_log = log.clone();
    tokio::spawn(async move {
        for response in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            // Drain the request up to the end of its head.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => return,
                }
            }
            task_log
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(&request).into_owned());

            if socket.write_all(&response).await.is_err() {
                return;
            }
            // Dropping the socket closes the connection, which is how the
            // client detects the end of the response.
        }
    });

    (addr, log)
}

/// Renders a canned HTML page response.
pub fn html_response(status: u16, reason: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Connection: close\r\n\
         Content-Type: text/html\r\n\
         \r\n\
         {body}"
    )
    .into_bytes()
}

/// Renders a canned image response with a correct `Content-Length`.
pub fn jpg_response(status: u16, reason: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Connection: close\r\n\
         Content-Type: image/jpeg\r\n\
         Content-Length: {}\r\n\
         \r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Renders a canned error response without a body or `Content-Length`,
/// the way terse servers answer misses.
pub fn error_response(status: u16, reason: &str) -> Vec<u8> {
    format!("HTTP/1.1 {status} {reason}\r\nConnection: close\r\n\r\n").into_bytes()
}

/// A page with one `<img>` tag per link, in order.
pub fn page_with_links(links: &[&str]) -> String {
    let imgs: String = links
        .iter()
        .map(|link| format!("<img src=\"{link}\">"))
        .collect();
    format!("<html><body>{imgs}</body></html>")
}

/// Returns a local port with nothing listening on it.
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener
        .local_addr()
        .expect("Failed to get local address")
        .port()
}

/// Creates a downloader builder pointed at a test server, with the
/// progress bar hidden.
pub fn downloader_for(addr: SocketAddr, page: &str, directory: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .host(addr.ip().to_string())
        .port(addr.port())
        .page(page)
        .directory(directory.to_path_buf())
}

/// Progress events captured through the downloader callback.
pub type EventLog = Arc<Mutex<Vec<ProgressEvent>>>;

/// Creates an empty event log.
pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Attaches a callback recording every progress event into `log`.
pub fn record_events(builder: DownloaderBuilder, log: &EventLog) -> DownloaderBuilder {
    let log = log.clone();
    builder.on_progress(move |event| log.lock().unwrap().push(event.clone()))
}

/// Statuses of the captured events, in delivery order.
pub fn event_statuses(log: &EventLog) -> Vec<Option<u16>> {
    log.lock().unwrap().iter().map(|e| e.status).collect()
}

/// Reads every file in `directory` and returns the sorted list of their
/// byte contents.
pub fn sorted_file_contents(directory: &Path) -> Vec<Vec<u8>> {
    let mut contents: Vec<Vec<u8>> = std::fs::read_dir(directory)
        .expect("Failed to read directory")
        .map(|entry| std::fs::read(entry.expect("Failed to read entry").path()).unwrap())
        .collect();
    contents.sort();
    contents
}
