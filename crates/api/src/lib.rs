//! HTTP API: configuration, routing, and request/response mapping for the
//! product catalog.

pub mod app;
pub mod config;
