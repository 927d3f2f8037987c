//! Tests for the downloader module surface: builder pattern,
//! configuration defaults, and getters.

use imgrab::downloader::DownloaderBuilder;
use imgrab::progress::ProgressBarOpts;

use std::path::PathBuf;
use std::sync::{atomic, Arc};

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.host(), "127.0.0.1");
    assert_eq!(downloader.port(), 80);
    assert_eq!(downloader.page(), "/");
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::new()
        .host("localhost")
        .port(8000)
        .page("gallery/index.html")
        .directory(temp_dir.path().to_path_buf())
        .build();

    assert_eq!(downloader.host(), "localhost");
    assert_eq!(downloader.port(), 8000);
    assert_eq!(downloader.page(), "gallery/index.html");
    assert_eq!(downloader.directory(), temp_dir.path());
}

#[test]
fn test_builder_chaining() {
    let downloader = DownloaderBuilder::new()
        .host("localhost")
        .port(8080)
        .page("p.html")
        .directory(PathBuf::from("out"))
        .user_agent("chained-agent/0.1")
        .style(ProgressBarOpts::hidden())
        .on_progress(|_event| {})
        .build();

    assert_eq!(downloader.host(), "localhost");
    assert_eq!(downloader.port(), 8080);
    assert_eq!(downloader.page(), "p.html");
    assert_eq!(downloader.directory(), &PathBuf::from("out"));
}

#[test]
fn test_builder_hidden() {
    let downloader = DownloaderBuilder::hidden().build();

    assert_eq!(downloader.host(), "127.0.0.1");
    assert_eq!(downloader.port(), 80);
}

#[test]
fn test_builder_on_progress_callback() {
    let called = Arc::new(atomic::AtomicBool::new(false));
    let called_clone = called.clone();

    let _downloader = DownloaderBuilder::new()
        .on_progress(move |_event| {
            called_clone.store(true, atomic::Ordering::SeqCst);
        })
        .build();
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("config"));
}

#[test]
fn test_downloader_clone() {
    let downloader = DownloaderBuilder::new().host("localhost").port(9000).build();
    let cloned = downloader.clone();

    assert_eq!(downloader.host(), cloned.host());
    assert_eq!(downloader.port(), cloned.port());
    assert_eq!(downloader.page(), cloned.page());
}

#[test]
fn test_page_url() {
    let downloader = DownloaderBuilder::new()
        .host("localhost")
        .port(8000)
        .page("pics/index.html")
        .build();

    assert_eq!(
        downloader.page_url().unwrap().as_str(),
        "http://localhost:8000/pics/index.html"
    );
}

#[test]
fn test_page_url_with_absolute_path() {
    let downloader = DownloaderBuilder::new()
        .host("localhost")
        .port(8000)
        .page("/index.html")
        .build();

    assert_eq!(
        downloader.page_url().unwrap().as_str(),
        "http://localhost:8000/index.html"
    );
}
