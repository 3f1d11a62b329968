//! Liveness and host-identity HTTP microservice.
//!
//! Two read-only endpoints, meant to sit behind a load balancer:
//!
//! ```text
//! GET /health  ->  {"status": "UP"}
//! GET /data    ->  Microservicio corriendo en el Host: <HOSTNAME>
//! ```
//!
//! `/data` reads `HOSTNAME` on every request, so hitting it repeatedly
//! through the balancer shows which replica answered each time.
//!
//! # Modules
//!
//! - [`api`]: Router and handlers
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup error types
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
