//! Mode routing
//!
//! - `serve`: HTTP server (default)
//! - `generate-config`: print / write a sample configuration file

pub mod config_gen;
pub mod server;

pub use config_gen::run_generate_config;
pub use server::run_server;
