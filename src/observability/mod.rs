//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (format and level set at startup)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached by the HTTP layer and flows through log events
//! - No metrics endpoint; logs are the only telemetry this server emits

pub mod logging;
