//! shortener - A small URL shortening service
//!
//! Clients submit a long URL and receive a short code; visiting the short
//! code redirects to the original URL.
//!
//! # Architecture
//! - `storage`: sea-orm backed `url_records` table (SQLite, MySQL, PostgreSQL)
//! - `services`: short code generation and link CRUD / redirect logic
//! - `api`: actix-web handlers, routes and middleware
//! - `config`: TOML + environment configuration
//! - `runtime`: startup, graceful shutdown and execution modes
//! - `system`: logging initialization
//! - `utils`: URL normalization and random code helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
