//! Request classification.
//!
//! # Responsibilities
//! - Classify a resolved path by filesystem state
//! - Dispatch to exactly one rendering action
//!
//! # Design Decisions
//! - Ordered case list, first match wins; a catch-all is always last
//! - Case order is a correctness requirement, not an optimization
//! - Directory handling is split into with-index and without-index cases so
//!   each predicate stays a single filesystem check and new cases (symlinks,
//!   redirects) can be added without touching existing ones
//! - Cases signal failure by returning an error kind; the request handler
//!   is the single recovery point

use std::path::PathBuf;

use crate::serve::context::RequestContext;
use crate::serve::error::ServeError;
use crate::serve::render;

/// One classification rule: a predicate over filesystem state plus the
/// action to run when it is the first to match.
///
/// `matches` must not mutate the context; it may stat the filesystem.
pub trait Case: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Returns true if this case applies to the resolved path.
    fn matches(&self, ctx: &RequestContext) -> bool;

    /// Render the response body, or signal why the request cannot be served.
    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError>;
}

/// The resolved path does not exist.
pub struct MissingPath;

impl Case for MissingPath {
    fn name(&self) -> &'static str {
        "missing-path"
    }

    fn matches(&self, ctx: &RequestContext) -> bool {
        !ctx.full_path().exists()
    }

    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        Err(ServeError::NotFound {
            path: ctx.raw_path().to_string(),
        })
    }
}

/// The resolved path is a regular file; serve it verbatim.
pub struct RegularFile;

impl Case for RegularFile {
    fn name(&self) -> &'static str {
        "regular-file"
    }

    fn matches(&self, ctx: &RequestContext) -> bool {
        ctx.full_path().is_file()
    }

    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        render::file_bytes(ctx.full_path(), ctx.raw_path())
    }
}

/// The resolved path is a directory containing an index file; serve that.
pub struct DirectoryWithIndex {
    index_file: String,
}

impl DirectoryWithIndex {
    pub fn new(index_file: impl Into<String>) -> Self {
        Self {
            index_file: index_file.into(),
        }
    }

    fn index_path(&self, ctx: &RequestContext) -> PathBuf {
        ctx.full_path().join(&self.index_file)
    }
}

impl Case for DirectoryWithIndex {
    fn name(&self) -> &'static str {
        "directory-with-index"
    }

    fn matches(&self, ctx: &RequestContext) -> bool {
        ctx.full_path().is_dir() && self.index_path(ctx).is_file()
    }

    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        // Read errors are attributed to the requested path, not the index path.
        render::file_bytes(&self.index_path(ctx), ctx.raw_path())
    }
}

/// The resolved path is a directory without an index file; generate a
/// listing of its immediate entries.
pub struct DirectoryWithoutIndex {
    index_file: String,
}

impl DirectoryWithoutIndex {
    pub fn new(index_file: impl Into<String>) -> Self {
        Self {
            index_file: index_file.into(),
        }
    }

    fn index_path(&self, ctx: &RequestContext) -> PathBuf {
        ctx.full_path().join(&self.index_file)
    }
}

impl Case for DirectoryWithoutIndex {
    fn name(&self) -> &'static str {
        "directory-without-index"
    }

    fn matches(&self, ctx: &RequestContext) -> bool {
        ctx.full_path().is_dir() && !self.index_path(ctx).is_file()
    }

    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        render::listing(ctx.full_path(), ctx.raw_path())
    }
}

/// Always matches. Catches paths that exist but are neither regular files
/// nor directories (sockets, pipes, devices).
pub struct CatchAll;

impl Case for CatchAll {
    fn name(&self) -> &'static str {
        "catch-all"
    }

    fn matches(&self, _ctx: &RequestContext) -> bool {
        true
    }

    fn apply(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        Err(ServeError::UnknownObject {
            path: ctx.raw_path().to_string(),
        })
    }
}

/// The fixed, ordered case list.
///
/// Built once at startup and immutable afterwards; safe to share across
/// whatever concurrency the HTTP layer provides.
pub struct Classifier {
    cases: Vec<Box<dyn Case>>,
}

impl Classifier {
    /// The standard case order. The catch-all must remain last.
    pub fn standard(index_file: &str) -> Self {
        Self {
            cases: vec![
                Box::new(MissingPath),
                Box::new(RegularFile),
                Box::new(DirectoryWithIndex::new(index_file)),
                Box::new(DirectoryWithoutIndex::new(index_file)),
                Box::new(CatchAll),
            ],
        }
    }

    /// Run the first matching case and return its result.
    pub fn dispatch(&self, ctx: &RequestContext) -> Result<Vec<u8>, ServeError> {
        for case in &self.cases {
            if case.matches(ctx) {
                tracing::debug!(case = case.name(), path = %ctx.raw_path(), "case selected");
                return case.apply(ctx);
            }
        }

        // Unreachable with `standard()`: the catch-all matches everything.
        Err(ServeError::UnknownObject {
            path: ctx.raw_path().to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn cases(&self) -> &[Box<dyn Case>] {
        &self.cases
    }
}
