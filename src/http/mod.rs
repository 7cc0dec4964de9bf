//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, raw path extraction)
//!     → serve subsystem (classify + render, on the blocking pool)
//!     → response.rs (fixed content type, exact content length)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
