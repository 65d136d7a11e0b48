#![deny(missing_docs)]
//! fmsync html: one-shot stamping of document metadata onto rendered HTML,
//! for static pipelines with no retained tree to synchronize.

/// Batch stamping for static render pipelines.
pub mod batch;
/// Streaming attribute stamping and stripping.
pub mod stamp;

pub use batch::{BatchOptions, StampJob, StampOutcome, StampReport, StampStats, stamp_batch};
pub use stamp::{StampError, stamp_str, strip_str};
