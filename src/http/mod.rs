//! Outbound HTTP helpers.

mod client;

pub use client::HttpClient;
