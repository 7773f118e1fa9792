//! Fetcher implementations for retrieving version info

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpFetcher;
