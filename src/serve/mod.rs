//! Request classification and rendering subsystem.
//!
//! # Data Flow
//! ```text
//! raw request path
//!     → context.rs (resolve against the serve root)
//!     → cases.rs (ordered classification, first match wins)
//!     → render.rs (file bytes | listing HTML | error HTML)
//!     → Page (status + body) handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Case list and serve root are immutable after startup; shared via Arc
//! - Cases signal typed errors; handler.rs is the single recovery point
//! - Path resolution is literal concatenation, with no URL decoding and no
//!   traversal protection (documented limitation)

pub mod cases;
pub mod context;
pub mod error;
pub mod handler;
pub mod render;

pub use cases::{Case, Classifier};
pub use context::RequestContext;
pub use error::ServeError;
pub use handler::RequestHandler;
pub use render::Page;
