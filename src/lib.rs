//! Static page server library.
//!
//! Maps request paths to filesystem resources: files are served verbatim, a
//! directory with an index file serves that index, and a directory without
//! one gets a generated listing. Classification is an ordered list of cases
//! evaluated first-match-wins; see [`serve`].

pub mod config;
pub mod http;
pub mod observability;
pub mod serve;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use serve::RequestHandler;
